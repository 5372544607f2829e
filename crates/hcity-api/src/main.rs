//! # hcity-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for the Healthy City standards API.
//! Binds to a configurable port (default 8080).

use hcity_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Build configuration from environment.
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let portal = hcity_api::state::Portal::seeded().map_err(|e| {
        tracing::error!("Seed catalog failed validation: {e}");
        e
    })?;
    let state = AppState::from_portal(portal, AppConfig { port });

    let app = hcity_api::app(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Healthy City API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
