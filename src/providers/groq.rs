//! Groq Provider implementation
//!
//! Talks to Groq's OpenAI-compatible REST API

use super::Provider;
use crate::config::Settings;
use crate::models::groq::*;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error};

/// Groq Provider
#[derive(Debug, Clone)]
pub struct GroqProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GroqProvider {
    /// Create a provider from server settings
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_config(
            &settings.groq.base_url,
            &settings.groq.api_key,
            settings.groq.timeout,
        )
    }

    /// Create a provider with an explicit endpoint, key and timeout
    pub fn with_config(base_url: &str, api_key: &str, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(concat!("groq-playground/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Build an endpoint URL
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Build authorization header value
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Turn a non-success reply into an error carrying the provider's message
    async fn error_from_response(response: Response) -> anyhow::Error {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();

        if let Ok(error_response) = serde_json::from_str::<GroqErrorResponse>(&error_text) {
            error!("Groq API error: {:?}", error_response.error);
            anyhow::anyhow!("{} {}", status, error_response.error.message)
        } else {
            error!("Groq API request failed: {} - {}", status, error_text);
            anyhow::anyhow!("Groq API request failed: {} - {}", status, error_text)
        }
    }
}

#[async_trait]
impl Provider for GroqProvider {
    fn name(&self) -> &str {
        "groq"
    }

    async fn list_models(&self) -> Result<Vec<GroqModel>> {
        debug!("Listing Groq models");

        let response = self
            .client
            .get(self.build_url("models"))
            .header("Authorization", self.auth_header())
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let list: GroqModelList = response
            .json()
            .await
            .context("Failed to parse Groq model list")?;

        debug!("Groq returned {} models", list.data.len());
        Ok(list.data)
    }

    async fn chat_complete(&self, request: GroqChatRequest) -> Result<GroqChatResponse> {
        debug!("Sending Groq chat completion request for model: {}", request.model);

        let response = self
            .client
            .post(self.build_url("chat/completions"))
            .header("Authorization", self.auth_header())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .context("Failed to send request")?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let completion: GroqChatResponse = response
            .json()
            .await
            .context("Failed to parse Groq response")?;

        debug!("Groq request completed successfully");
        Ok(completion)
    }
}
