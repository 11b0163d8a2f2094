//! Playground HTTP client
//!
//! Calls the two server endpoints the browser client uses

use crate::models::{ChatRequest, ChatResponse, ErrorBody, ModelsResponse};
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

/// Fallback when an error response carries no usable message
pub const REQUEST_FAILED: &str = "Request failed";

/// Fallback when a transport error has no message
pub const SOMETHING_WENT_WRONG: &str = "Something went wrong";

/// Client-side errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Server could not be reached
    #[error("{0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("{0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        let message = e.to_string();
        if message.is_empty() {
            ClientError::Network(SOMETHING_WENT_WRONG.to_string())
        } else {
            ClientError::Network(message)
        }
    }
}

/// Pick the user-facing message from an error body: `details`, then `error`
pub fn error_message(body: Option<&ErrorBody>) -> String {
    body.and_then(|b| {
        b.details
            .clone()
            .filter(|d| !d.is_empty())
            .or_else(|| b.error.clone().filter(|e| !e.is_empty()))
    })
    .unwrap_or_else(|| REQUEST_FAILED.to_string())
}

/// HTTP client for the playground server
#[derive(Debug, Clone)]
pub struct PlaygroundClient {
    http: Client,
    base_url: String,
}

impl PlaygroundClient {
    /// Create a client for a server base URL (e.g. `http://localhost:7049`)
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let http = Client::builder()
            .user_agent(concat!("groq-playground-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Server base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/models
    pub async fn list_models(&self) -> Result<Vec<String>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/models", self.base_url))
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = serde_json::from_slice::<ErrorBody>(&bytes).ok();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(body.as_ref()),
            });
        }

        let list: ModelsResponse = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidBody(e.to_string()))?;

        debug!("Loaded {} models", list.models.len());
        Ok(list.models)
    }

    /// POST /api/chat
    pub async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, ClientError> {
        let response = self
            .http
            .post(format!("{}/api/chat", self.base_url))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let body = serde_json::from_slice::<ErrorBody>(&bytes).ok();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(body.as_ref()),
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidBody(e.to_string()))
    }
}
