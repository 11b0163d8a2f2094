//! Groq API data models
//!
//! Request and response structures of the OpenAI-compatible Groq endpoints

use serde::{Deserialize, Serialize};

/// Model listing response (`GET /models`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqModelList {
    /// Object type ("list")
    #[serde(default)]
    pub object: Option<String>,
    /// Model descriptors
    #[serde(default)]
    pub data: Vec<GroqModel>,
}

/// Model descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqModel {
    /// Model identifier
    pub id: String,
    /// Owning organisation (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
    /// Whether the model is currently active (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Context window in tokens (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
}

/// Chat completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqChatRequest {
    /// Model identifier
    pub model: String,
    /// Message list
    pub messages: Vec<GroqMessage>,
    /// Sampling temperature (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Role-tagged message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqMessage {
    /// Role (system/user/assistant)
    #[serde(default)]
    pub role: String,
    /// Message content; assistant replies may carry none
    #[serde(default)]
    pub content: Option<String>,
}

impl GroqMessage {
    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: Some(content.into()),
        }
    }
}

/// Chat completion response
///
/// `usage` is kept as raw JSON: it is relayed to the browser untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqChatResponse {
    /// Response ID
    #[serde(default)]
    pub id: Option<String>,
    /// Model that produced the completion
    #[serde(default)]
    pub model: Option<String>,
    /// Choice list
    #[serde(default)]
    pub choices: Vec<GroqChoice>,
    /// Usage and timing metrics
    #[serde(default)]
    pub usage: Option<serde_json::Value>,
    /// Groq-specific metadata
    #[serde(default)]
    pub x_groq: Option<XGroq>,
}

/// Completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqChoice {
    /// Choice index
    #[serde(default)]
    pub index: u32,
    /// Generated message
    pub message: GroqMessage,
    /// Finish reason
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Groq-specific response metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XGroq {
    /// Request ID assigned by Groq
    #[serde(default)]
    pub id: Option<String>,
}

impl GroqChatResponse {
    /// Text of the first choice, empty when the provider returned none
    pub fn first_text(&self) -> String {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }

    /// Groq request identifier, if any
    pub fn request_id(&self) -> Option<String> {
        self.x_groq.as_ref().and_then(|x| x.id.clone())
    }
}

/// Error response body returned by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqErrorResponse {
    pub error: GroqErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqErrorDetail {
    /// Human readable message
    pub message: String,
    /// Error type
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,
    /// Error code
    #[serde(default)]
    pub code: Option<String>,
}
