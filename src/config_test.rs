use super::*;

/// # Safety
/// Tests must run with `--test-threads=1` to avoid env races.
unsafe fn clear_site_env() {
    unsafe {
        std::env::remove_var("BIND_ADDR");
        std::env::remove_var("PORT");
    }
}

#[test]
fn from_values_defaults_when_unset() {
    let cfg = SiteConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, SiteConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_values_treats_blank_as_unset() {
    let cfg = SiteConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, SiteConfig::default());
}

#[test]
fn from_values_parses_overrides() {
    let cfg = SiteConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_values_accepts_ipv6() {
    let cfg = SiteConfig::from_values(Some("::1"), Some("443")).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:443");
}

#[test]
fn from_values_rejects_bad_port() {
    for raw in ["abc", "0", "70000", "-1"] {
        let err = SiteConfig::from_values(None, Some(raw)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == raw), "{raw}: {err}");
    }
}

#[test]
fn from_values_rejects_bad_bind_addr() {
    let err = SiteConfig::from_values(Some("localhost"), None).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBindAddr(_)));
    assert!(err.to_string().contains("localhost"));
}

#[test]
fn from_env_reads_port_and_bind_addr() {
    unsafe {
        clear_site_env();
        std::env::set_var("BIND_ADDR", "127.0.0.1");
        std::env::set_var("PORT", "4100");
    }

    let cfg = SiteConfig::from_env().unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:4100");

    unsafe { clear_site_env() };
}
