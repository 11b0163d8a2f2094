//! Configuration management module
//!
//! Loads server settings from environment variables (and an optional `.env` file)

pub mod settings;

pub use settings::{Environment, Settings};
