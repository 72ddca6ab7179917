//! Platform Insights API — CI run summaries and todos over REST.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use pi_api::config::ApiConfig;
use pi_api::routes;
use pi_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "pi-api starting");

    let config = ApiConfig::from_env()?;
    if config.auth_tokens.is_empty() {
        tracing::warn!("PI_AUTH_TOKENS not set — todo routes accept guest callers");
    }
    tracing::info!(runs_path = %config.runs_path, "run summaries enabled");

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::from_config(config);
    let app = routes::build_router(state);

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
