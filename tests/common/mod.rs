//! Shared test helpers

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use groq_playground::config::Settings;
use groq_playground::models::groq::*;
use groq_playground::providers::Provider;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Build settings from key/value pairs instead of the process environment
pub fn test_settings(pairs: &[(&str, &str)]) -> Settings {
    let mut vars: HashMap<String, String> = HashMap::new();
    vars.insert("GROQ_API_KEY".to_string(), "gsk_test_key".to_string());
    for (k, v) in pairs {
        vars.insert(k.to_string(), v.to_string());
    }
    Settings::from_lookup(|key| vars.get(key).cloned()).expect("Failed to create test settings")
}

/// How the mock answers chat requests
pub enum ChatBehavior {
    Reply(GroqChatResponse),
    Fail(String),
}

/// In-memory provider that records calls
pub struct MockProvider {
    pub models: Result<Vec<String>, String>,
    pub chat: ChatBehavior,
    pub delay: Duration,
    pub model_calls: AtomicUsize,
    pub chat_calls: AtomicUsize,
    pub requests: Mutex<Vec<GroqChatRequest>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            models: Ok(vec!["b-model".to_string(), "a-model".to_string()]),
            chat: ChatBehavior::Reply(sample_completion()),
            delay: Duration::ZERO,
            model_calls: AtomicUsize::new(0),
            chat_calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_models(mut self, models: &[&str]) -> Self {
        self.models = Ok(models.iter().map(|m| m.to_string()).collect());
        self
    }

    pub fn failing_models(mut self, message: &str) -> Self {
        self.models = Err(message.to_string());
        self
    }

    pub fn with_reply(mut self, reply: GroqChatResponse) -> Self {
        self.chat = ChatBehavior::Reply(reply);
        self
    }

    pub fn failing_chat(mut self, message: &str) -> Self {
        self.chat = ChatBehavior::Fail(message.to_string());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn chat_calls(&self) -> usize {
        self.chat_calls.load(Ordering::SeqCst)
    }

    pub fn model_calls(&self) -> usize {
        self.model_calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<GroqChatRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn list_models(&self) -> Result<Vec<GroqModel>> {
        self.model_calls.fetch_add(1, Ordering::SeqCst);
        match &self.models {
            Ok(ids) => Ok(ids
                .iter()
                .map(|id| GroqModel {
                    id: id.clone(),
                    owned_by: None,
                    active: Some(true),
                    context_window: None,
                })
                .collect()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }

    async fn chat_complete(&self, request: GroqChatRequest) -> Result<GroqChatResponse> {
        self.chat_calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        match &self.chat {
            ChatBehavior::Reply(reply) => Ok(reply.clone()),
            ChatBehavior::Fail(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

/// A completion with text, usage and a request id
pub fn sample_completion() -> GroqChatResponse {
    serde_json::from_value(json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "model": "a-model",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": "Hello from the model"},
            "finish_reason": "stop"
        }],
        "usage": {
            "queue_time": 0.01,
            "prompt_tokens": 12,
            "prompt_time": 0.002,
            "completion_tokens": 120,
            "completion_time": 2.0,
            "total_tokens": 132,
            "total_time": 2.002
        },
        "x_groq": {"id": "req_01test"}
    }))
    .expect("valid completion")
}
