mod config;
mod errors;
mod models;
mod routes;
mod service;
mod upstream;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::routes::router;
use crate::service::relay_service::RelayService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_chat=debug,tower_http=debug".into()),
        )
        .init();

    // ── Configuration ─────────────────────────────────────────────────────────
    let config = AppConfig::from_env();
    if config.relay.api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; /api/chat will answer 500 until it is configured");
    }
    info!("Completion service: {}", config.relay.api_base_url);

    // ── Router ────────────────────────────────────────────────────────────────
    let relay = RelayService::new(config.relay.clone());
    let app = router(relay, &config);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
