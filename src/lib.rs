//! Groq Playground Library
//!
//! Server side: a thin HTTP layer that lists Groq models and proxies single
//! chat completions, timing each provider call.
//! Client side: a typed client, session state machine and metric formatting
//! shared by the terminal front end.

pub mod client;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod providers;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use handlers::{create_router, create_router_with_provider, AppState};
pub use providers::{GroqProvider, Provider};
pub use utils::error::{AppError, AppResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
