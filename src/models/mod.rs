//! Data models module
//!
//! Defines the playground API bodies and the Groq wire structures

pub mod api;
pub mod groq;

pub use api::{ChatRequest, ChatResponse, ErrorBody, HealthResponse, ModelsResponse};
