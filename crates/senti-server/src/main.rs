mod app;
mod dto;
mod error;
mod extract;
mod handlers;
mod state;

use std::sync::Arc;

use anyhow::Result;
use senti_config::ServerConfig;
use senti_core::KeywordClassifier;
use tracing::info;

use crate::state::ServerState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .compact()
        .init();

    let config = ServerConfig::from_env()?;

    let model = KeywordClassifier::new();
    info!("Loaded keyword classifier v{}", senti_core::MODEL_VERSION);

    let state = Arc::new(ServerState::new(Arc::new(model)));
    let app = app::router(state);

    let addr = config.bind_addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
