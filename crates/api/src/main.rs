//! LeadBridge - lead forwarding service
//!
//! Main entry point: logging, environment loading, context wiring, and the
//! axum listener.

use std::sync::Arc;

use leadbridge_api::{build_router, AppContext};
use leadbridge_domain::Config;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "leadbridge=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => warn!(error = %err, "could not load .env file"),
    }

    let config = Config::from_env()?;
    let context = Arc::new(AppContext::new(&config)?);
    let app = build_router(context);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.server.port)).await?;
    info!(port = config.server.port, "server running");
    axum::serve(listener, app).await?;

    Ok(())
}
