#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use leptos::config::get_configuration;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = SiteConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    tracing::info!(
        site_root = %leptos_options.site_root,
        output = %leptos_options.output_name,
        "leptos options loaded"
    );

    let app = routes::app(leptos_options);
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "yalama listening");
    axum::serve(listener, app).await?;
    Ok(())
}
