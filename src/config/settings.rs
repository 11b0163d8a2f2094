//! Application configuration settings
//!
//! Defines all configuration structures and loading logic

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default provider endpoint (Groq's OpenAI-compatible API)
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Groq API configuration
    pub groq: GroqConfig,
    /// Security configuration
    pub security: SecurityConfig,
    /// Static asset configuration
    pub assets: AssetsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Maximum request body size in bytes
    pub max_request_size: usize,
}

/// Groq API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqConfig {
    /// API key (may be empty; provider calls then fail upstream)
    pub api_key: String,
    /// API base URL
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout: u64,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Allowed origin for CORS (the development client address)
    pub cors_origin: String,
}

/// Deployment mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

/// Static asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Deployment mode; production serves the built client
    pub environment: Environment,
    /// Directory holding the built client
    pub static_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level / filter directive
    pub level: String,
    /// Log format (text/json)
    pub format: String,
}

impl Settings {
    /// Create a new configuration instance from the process environment
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create a configuration instance from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let environment = match get("APP_ENV", "development").to_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };

        let settings = Self {
            server: ServerConfig {
                host: get("SERVER_HOST", "0.0.0.0"),
                port: get("PORT", "7049")
                    .parse()
                    .context("Invalid port number")?,
                max_request_size: get("MAX_REQUEST_SIZE", "1048576")
                    .parse()
                    .context("Invalid maximum request size")?,
            },
            groq: GroqConfig {
                api_key: get("GROQ_API_KEY", ""),
                base_url: get("GROQ_BASE_URL", DEFAULT_GROQ_BASE_URL),
                timeout: get("GROQ_TIMEOUT", "60")
                    .parse()
                    .context("Invalid timeout value")?,
            },
            security: SecurityConfig {
                cors_origin: get("CORS_ORIGIN", "http://localhost:5173"),
            },
            assets: AssetsConfig {
                environment,
                static_dir: PathBuf::from(get("STATIC_DIR", "web")),
            },
            logging: LoggingConfig {
                level: get("RUST_LOG", "info"),
                format: get("LOG_FORMAT", "text"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if self.server.max_request_size == 0 {
            anyhow::bail!("Maximum request size cannot be 0");
        }

        // An empty key is allowed so the UI can still load; every provider call will fail
        if self.groq.api_key.contains(char::is_whitespace) {
            anyhow::bail!("Groq API key cannot contain whitespace characters");
        }

        if !self.groq.base_url.starts_with("http") {
            anyhow::bail!("Invalid Groq base URL format, should start with 'http'");
        }

        if self.groq.timeout == 0 {
            anyhow::bail!("Timeout value cannot be 0");
        }

        if !self.security.cors_origin.starts_with("http") {
            anyhow::bail!("Invalid CORS origin: {}", self.security.cors_origin);
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            anyhow::bail!("Invalid log level '{}': {}", self.logging.level, e);
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!("Invalid log format: {}", self.logging.format);
        }

        Ok(())
    }

    /// Check if built client assets should be served
    pub fn is_production(&self) -> bool {
        self.assets.environment == Environment::Production
    }

    /// Whether a provider credential is configured
    pub fn has_api_key(&self) -> bool {
        !self.groq.api_key.is_empty()
    }

    /// Address the server listens on
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings_from(pairs: &[(&str, &str)]) -> Result<Settings> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.server.port, 7049);
        assert_eq!(settings.server.max_request_size, 1024 * 1024);
        assert_eq!(settings.security.cors_origin, "http://localhost:5173");
        assert_eq!(settings.groq.base_url, DEFAULT_GROQ_BASE_URL);
        assert_eq!(settings.groq.timeout, 60);
        assert!(settings.groq.api_key.is_empty());
        assert!(!settings.is_production());
        assert_eq!(settings.listen_addr(), "0.0.0.0:7049");
    }

    #[test]
    fn test_production_flag() {
        let settings = settings_from(&[("APP_ENV", "Production"), ("STATIC_DIR", "dist")]).unwrap();

        assert!(settings.is_production());
        assert_eq!(settings.assets.static_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_invalid_values() {
        assert!(settings_from(&[("PORT", "0")]).is_err());
        assert!(settings_from(&[("PORT", "not-a-port")]).is_err());
        assert!(settings_from(&[("GROQ_BASE_URL", "ftp://example.com")]).is_err());
        assert!(settings_from(&[("GROQ_TIMEOUT", "0")]).is_err());
        assert!(settings_from(&[("LOG_FORMAT", "xml")]).is_err());
        assert!(settings_from(&[("GROQ_API_KEY", "gsk bad key")]).is_err());
        assert!(settings_from(&[("RUST_LOG", "groq_playground=loud")]).is_err());
        assert!(settings_from(&[("RUST_LOG", "warn,groq_playground=debug")]).is_ok());
    }
}
