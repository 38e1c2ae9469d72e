mod config;

use anyhow::Context;
use dioxus::fullstack::prelude::*;
use dioxus::prelude::*;
use tracing::{info, instrument};

/// Serves the server-rendered site and its static assets.
#[instrument(skip(component))]
pub async fn launch_server(component: fn() -> Element) -> anyhow::Result<()> {
    let config = config::ServerConfig::load().context("Failed to load server configuration")?;

    // If the CLI is running, the CLI proxies fullstack into the main address, and we use the
    // generated address the CLI gives us unless it is overridden by the environment
    let address = config.bind_address(
        dioxus::cli_config::server_ip(),
        dioxus::cli_config::server_port(),
    );
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!(%address, "serving site");

    let router = axum::Router::new()
        // serve_dioxus_application adds routes to server side render the application, serve static assets, and register server functions
        .serve_dioxus_application(ServeConfigBuilder::default(), component)
        .into_make_service();
    axum::serve(listener, router)
        .await
        .context("Server terminated unexpectedly")
}
