//! Model listing handler

use crate::handlers::AppState;
use crate::models::ModelsResponse;
use crate::utils::error::{AppResult, ErrorContext, MODELS_FAILED};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::debug;

/// List available models
///
/// GET /api/models
///
/// Queries the provider on every call and returns the identifiers sorted ascending
pub async fn list_models(State(state): State<Arc<AppState>>) -> AppResult<Json<ModelsResponse>> {
    let models = state
        .provider
        .list_models()
        .await
        .upstream_context(MODELS_FAILED)?;

    let mut ids: Vec<String> = models.into_iter().map(|m| m.id).collect();
    ids.sort();

    debug!("Returning {} models from {}", ids.len(), state.provider.name());
    Ok(Json(ModelsResponse { models: ids }))
}
