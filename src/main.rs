use anyhow::{Context, Result};
use clap::Parser;
use dotenvy::dotenv;
use next_stop::api;
use next_stop::config::Config;
use next_stop::state::AppState;
use next_stop::telemetry::init_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    _ = dotenv();
    let config = Config::parse();
    let _guard = init_tracing(config.log_dir.as_deref());

    let directory = config
        .directory()
        .context("failed to set up the stop and bus directory")?;
    info!("reading from {}", directory.describe());

    let app = api::router(AppState::new(directory));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;

    info!("Server is running on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
