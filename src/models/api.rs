//! Playground API data models
//!
//! JSON bodies exchanged between the browser client and the server

use serde::{Deserialize, Serialize};

/// Chat request submitted by the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Selected model identifier
    pub model: String,
    /// Prompt text
    pub message: String,
}

/// Chat response returned to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    /// Model that answered
    pub model: String,
    /// Generated text (possibly empty)
    #[serde(default)]
    pub text: String,
    /// Wall-clock duration of the provider call in milliseconds
    pub wall_time_ms: u64,
    /// Provider usage metrics, relayed as-is
    #[serde(default)]
    pub usage: Option<serde_json::Value>,
    /// Provider request ID
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Model listing response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelsResponse {
    pub models: Vec<String>,
}

/// Liveness response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// Error body (`{ error }` or `{ error, details }`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short error summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Underlying failure message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
