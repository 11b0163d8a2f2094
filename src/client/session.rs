//! Client session state machine
//!
//! `Idle` / `Loading` plus the last result and the last error. A submit
//! clears both before the request goes out, so nothing from an earlier
//! response or error survives into the next one.

use super::api::{ClientError, PlaygroundClient};
use super::display::MetricsPanel;
use crate::models::{ChatRequest, ChatResponse};
use tracing::{debug, warn};

/// Message shown when the model list cannot be loaded
pub const MODELS_LOAD_FAILED: &str = "Failed to load models from backend.";

/// Request phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// Key pressed while composing a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComposeKey {
    pub enter: bool,
    pub shift: bool,
}

/// What a key press does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Send the prompt
    Submit,
    /// Insert a line break
    Newline,
    /// Ordinary input
    Input,
}

impl ComposeKey {
    /// Enter sends; Shift+Enter breaks the line
    pub fn action(self) -> KeyAction {
        match (self.enter, self.shift) {
            (true, false) => KeyAction::Submit,
            (true, true) => KeyAction::Newline,
            _ => KeyAction::Input,
        }
    }
}

/// Per-session UI state
#[derive(Debug, Clone)]
pub struct Session {
    models: Vec<String>,
    model: Option<String>,
    prompt: String,
    phase: Phase,
    result: Option<ChatResponse>,
    error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            models: Vec::new(),
            model: None,
            prompt: String::new(),
            phase: Phase::Idle,
            result: None,
            error: None,
        }
    }

    pub fn models(&self) -> &[String] {
        &self.models
    }

    pub fn selected_model(&self) -> Option<&str> {
        self.model.as_deref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<&ChatResponse> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Metrics for the last successful response
    pub fn metrics(&self) -> Option<MetricsPanel> {
        self.result.as_ref().map(MetricsPanel::from_response)
    }

    /// Apply the outcome of the initial model fetch
    pub fn apply_models(&mut self, outcome: Result<Vec<String>, ClientError>) {
        match outcome {
            Ok(models) => {
                self.error = None;
                self.model = models.first().cloned();
                self.models = models;
            }
            Err(e) => {
                warn!("Failed to load models: {}", e);
                self.models.clear();
                self.model = None;
                self.error = Some(MODELS_LOAD_FAILED.to_string());
            }
        }
    }

    /// Select a model from the loaded list
    pub fn select_model(&mut self, model: &str) -> bool {
        if self.models.iter().any(|m| m == model) {
            self.model = Some(model.to_string());
            true
        } else {
            false
        }
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Submit is enabled with a model, a non-blank prompt and nothing in flight
    pub fn can_submit(&self) -> bool {
        self.model.is_some() && !self.prompt.trim().is_empty() && self.phase == Phase::Idle
    }

    /// Enter the loading phase and build the request
    ///
    /// Returns `None` (and changes nothing) when submit is disabled.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }
        let model = self.model.clone()?;

        self.phase = Phase::Loading;
        self.result = None;
        self.error = None;

        Some(ChatRequest {
            model,
            message: self.prompt.trim().to_string(),
        })
    }

    /// Leave the loading phase with the request outcome
    pub fn finish_submit(&mut self, outcome: Result<ChatResponse, ClientError>) {
        match outcome {
            Ok(response) => {
                self.error = None;
                self.result = Some(response);
            }
            Err(e) => {
                self.result = None;
                self.error = Some(e.to_string());
            }
        }
        self.phase = Phase::Idle;
    }

    /// Fetch the model list once
    pub async fn load_models(&mut self, client: &PlaygroundClient) {
        self.error = None;
        let outcome = client.list_models().await;
        self.apply_models(outcome);
    }

    /// Submit the current prompt; returns false when submit was disabled
    pub async fn submit(&mut self, client: &PlaygroundClient) -> bool {
        let Some(request) = self.begin_submit() else {
            debug!("Submit ignored: disabled");
            return false;
        };

        let outcome = client.chat(&request).await;
        self.finish_submit(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(text: &str) -> ChatResponse {
        ChatResponse {
            model: "a-model".to_string(),
            text: text.to_string(),
            wall_time_ms: 100,
            usage: None,
            request_id: Some("req".to_string()),
        }
    }

    fn ready_session() -> Session {
        let mut session = Session::new();
        session.apply_models(Ok(vec!["a-model".to_string(), "b-model".to_string()]));
        session.set_prompt("hello");
        session
    }

    #[test]
    fn test_key_actions() {
        assert_eq!(ComposeKey { enter: true, shift: false }.action(), KeyAction::Submit);
        assert_eq!(ComposeKey { enter: true, shift: true }.action(), KeyAction::Newline);
        assert_eq!(ComposeKey { enter: false, shift: true }.action(), KeyAction::Input);
    }

    #[test]
    fn test_models_preselect_first() {
        let session = ready_session();
        assert_eq!(session.selected_model(), Some("a-model"));
        assert_eq!(session.models().len(), 2);
    }

    #[test]
    fn test_models_failure() {
        let mut session = Session::new();
        session.apply_models(Err(ClientError::Network("connection refused".to_string())));

        assert!(session.models().is_empty());
        assert_eq!(session.selected_model(), None);
        assert_eq!(session.error(), Some(MODELS_LOAD_FAILED));
    }

    #[test]
    fn test_submit_enablement() {
        let mut session = Session::new();
        session.set_prompt("hello");
        assert!(!session.can_submit(), "no model selected");

        let mut session = ready_session();
        session.set_prompt(" \n\t ");
        assert!(!session.can_submit(), "blank prompt");
        assert!(session.begin_submit().is_none());
        assert_eq!(session.phase(), Phase::Idle);

        session.set_prompt("  hello  ");
        let request = session.begin_submit().unwrap();
        assert_eq!(request.message, "hello");
        assert_eq!(session.phase(), Phase::Loading);
        assert!(!session.can_submit(), "already loading");
        assert!(session.begin_submit().is_none());
    }

    #[test]
    fn test_select_model() {
        let mut session = ready_session();
        assert!(session.select_model("b-model"));
        assert_eq!(session.selected_model(), Some("b-model"));
        assert!(!session.select_model("c-model"));
        assert_eq!(session.selected_model(), Some("b-model"));
    }

    #[test]
    fn test_submit_overwrites_previous_outcome() {
        let mut session = ready_session();

        session.begin_submit().unwrap();
        session.finish_submit(Ok(response("first")));
        assert_eq!(session.result().unwrap().text, "first");
        assert!(session.metrics().is_some());

        // A new submit clears the old result before the answer arrives
        session.begin_submit().unwrap();
        assert!(session.result().is_none());
        assert!(session.error().is_none());

        session.finish_submit(Err(ClientError::Api {
            status: 500,
            message: "timed out".to_string(),
        }));
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.error(), Some("timed out"));
        assert!(session.result().is_none());
        assert!(session.metrics().is_none());

        session.begin_submit().unwrap();
        session.finish_submit(Ok(response("second")));
        assert!(session.error().is_none());
        assert_eq!(session.result().unwrap().text, "second");
    }
}
