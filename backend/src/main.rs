//! Search server entry point.

use anyhow::Context;
use backend::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();
    let app = backend::server::router(&config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Server is running on http://{}", config.bind_addr);
    tracing::info!("CORS origins: {:?}", config.cors_origins);

    axum::serve(listener, app).await.context("server failed")?;
    Ok(())
}
