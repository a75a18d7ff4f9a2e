use std::sync::Arc;

use anyhow::Context;
use client::JobsClient;
use server::config::Config;
use server::{AppState, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("server=info".parse()?))
        .with_target(false)
        .init();

    let config = Config::from_env()?;

    let source = JobsClient::new(&config.supabase_url, &config.supabase_key)
        .context("Failed to build jobs client")?;
    info!(table = source.table_url(), "Reading jobs from backend");

    let state = Arc::new(AppState::new(Arc::new(source), config.refresh_after));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;
    info!(addr = %config.addr, "Server running at http://{}", config.addr);

    axum::serve(listener, app).await?;
    Ok(())
}
