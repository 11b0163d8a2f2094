//! Chat completion handler
//!
//! Validates the playground request, forwards one chat completion to the
//! provider and reshapes the reply with a wall-clock measurement

use crate::handlers::AppState;
use crate::models::groq::{GroqChatRequest, GroqMessage};
use crate::models::ChatResponse;
use crate::utils::error::{helpers::validation_error, AppResult, ErrorContext, CHAT_FAILED};
use crate::utils::logging::create_request_log_summary;
use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Json, Response},
};
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Sampling temperature sent with every completion
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// A request that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedChat {
    pub model: String,
    /// Trimmed prompt text
    pub message: String,
}

/// Handle chat requests
///
/// POST /api/chat
///
/// A missing or malformed JSON body is treated as an empty object, so it
/// fails validation like any other request without a model. A body that
/// cannot be read at all (e.g. over the size limit) keeps its own status.
pub async fn handle_chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Response> {
    let body = match payload {
        Ok(Json(value)) => value,
        Err(JsonRejection::BytesRejection(rejection)) => {
            warn!("Failed to read request body: {}", rejection.body_text());
            return Ok(rejection.into_response());
        }
        Err(_) => Value::Null,
    };

    let chat = validate_chat_request(&body).map_err(|msg| {
        warn!("Request validation failed: {}", msg);
        validation_error(msg)
    })?;

    let request = GroqChatRequest {
        model: chat.model.clone(),
        messages: vec![GroqMessage::user(chat.message)],
        temperature: Some(CHAT_TEMPERATURE),
    };

    if let Ok(summary_json) = serde_json::to_string_pretty(&create_request_log_summary(&request)) {
        debug!("📥 Chat request:\n{}", summary_json);
    }

    let start = Instant::now();
    let result = state.provider.chat_complete(request).await;
    let wall_time_ms = duration_to_ms(start.elapsed());

    let completion = result.upstream_context(CHAT_FAILED)?;

    info!(
        "Chat completion for {} finished in {}ms",
        chat.model, wall_time_ms
    );

    Ok(Json(ChatResponse {
        text: completion.first_text(),
        request_id: completion.request_id(),
        model: completion
            .model
            .filter(|m| !m.is_empty())
            .unwrap_or(chat.model),
        wall_time_ms,
        usage: completion.usage.filter(|u| !u.is_null()),
    })
    .into_response())
}

/// Validate a raw request body
///
/// Returns the error message reported to the client on failure
pub fn validate_chat_request(body: &Value) -> Result<ValidatedChat, &'static str> {
    let model = body
        .get("model")
        .and_then(Value::as_str)
        .filter(|m| !m.trim().is_empty())
        .ok_or("model is required")?;

    let message = body
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .ok_or("message is required")?;

    Ok(ValidatedChat {
        model: model.to_string(),
        message: message.to_string(),
    })
}

/// Round a duration to whole milliseconds
fn duration_to_ms(duration: Duration) -> u64 {
    (duration.as_secs_f64() * 1000.0).round() as u64
}
