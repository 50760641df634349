//! Server configuration parsed from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR, port: DEFAULT_PORT }
    }
}

impl SiteConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: listen address, default `0.0.0.0`
    /// - `PORT`: listen port, default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("BIND_ADDR").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    /// Parse raw values; `None` or blank selects the default.
    pub fn from_values(bind_addr: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self { bind_addr: parse_bind_addr(bind_addr)?, port: parse_port(port)? })
    }

    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(DEFAULT_PORT);
    };
    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_owned())),
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    let Some(raw) = non_blank(raw) else {
        return Ok(DEFAULT_BIND_ADDR);
    };
    raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidBindAddr(raw.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
