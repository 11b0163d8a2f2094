//! Groq Playground Server
//!
//! Lists Groq models and proxies chat completions for the browser client

use anyhow::{Context, Result};
use groq_playground::utils::logging::init_logging;
use groq_playground::{create_router, version_info, Settings};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load server settings")?;

    init_logging(&settings.logging)?;
    info!("{}", version_info());

    if !settings.has_api_key() {
        warn!("GROQ_API_KEY is not set, provider requests will be rejected upstream");
    }

    let app = create_router(settings.clone()).await?;

    let addr = settings.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("🚀 Groq Playground server started!");
    info!("📝 Health check: http://{}/api/health", addr);
    info!("🔄 Chat endpoint: http://{}/api/chat", addr);
    if settings.is_production() {
        info!("🌐 Client: http://{}/", addr);
    }

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to start server: {}", e))?;

    Ok(())
}
