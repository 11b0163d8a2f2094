//! HTTP handlers module
//!
//! Contains all HTTP endpoint handling logic

pub mod assets;
pub mod chat;
pub mod health;
pub mod models;

use crate::config::Settings;
use crate::middleware::request_logging_middleware;
use crate::providers::{GroqProvider, Provider};
use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use tracing::info;

/// Application state
///
/// Built once at startup; handlers only ever read it.
#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn Provider>,
}

/// Create application router backed by the Groq provider
pub async fn create_router(settings: Settings) -> Result<Router> {
    let provider = GroqProvider::new(&settings)?;
    create_router_with_provider(settings, Arc::new(provider))
}

/// Create application router with an explicit provider
pub fn create_router_with_provider(settings: Settings, provider: Arc<dyn Provider>) -> Result<Router> {
    let cors_origin = HeaderValue::from_str(&settings.security.cors_origin)
        .context("Invalid CORS origin header value")?;

    let app_state = Arc::new(AppState { provider });

    // Create middleware stack
    let middleware_stack = ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
        // Limit must wrap CORS: the limited body has no Default impl
        .layer(RequestBodyLimitLayer::new(settings.server.max_request_size))
        .layer(
            CorsLayer::new()
                .allow_origin(cors_origin)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers(Any),
        );

    // Create routes
    let mut router = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/models", get(models::list_models))
        .route("/api/chat", post(chat::handle_chat))
        .with_state(app_state);

    if settings.is_production() {
        info!("Serving client assets from {:?}", settings.assets.static_dir);
        router = router.fallback_service(assets::static_assets(&settings.assets.static_dir));
    }

    Ok(router.layer(middleware_stack))
}
