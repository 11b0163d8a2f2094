//! Playground client module
//!
//! HTTP client for the server endpoints, the per-session state machine and
//! the metric formatting shown under each response

pub mod api;
pub mod display;
pub mod session;

pub use api::{ClientError, PlaygroundClient};
pub use display::{MetricsPanel, UsageMetrics};
pub use session::{ComposeKey, KeyAction, Phase, Session};
