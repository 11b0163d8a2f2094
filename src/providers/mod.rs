//! Provider module
//!
//! Defines the Provider trait and the Groq implementation

pub mod groq;

use crate::models::groq::{GroqChatRequest, GroqChatResponse, GroqModel};
use anyhow::Result;
use async_trait::async_trait;

/// Provider trait for the upstream LLM API
///
/// One instance is built at startup and shared by every request handler,
/// so implementations must be stateless per call.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name
    fn name(&self) -> &str;

    /// List the models the provider offers
    async fn list_models(&self) -> Result<Vec<GroqModel>>;

    /// Send a single chat completion request
    async fn chat_complete(&self, request: GroqChatRequest) -> Result<GroqChatResponse>;
}

pub use groq::GroqProvider;
