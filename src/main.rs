use std::sync::Arc;

use anyhow::Context;
use eco_assistant::{config::AppConfig, routes, state::AppState};
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("eco_assistant=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let state = Arc::new(AppState::from_config(&config).context("failed to load rule tables")?);

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("🚀 eco assistant running at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
