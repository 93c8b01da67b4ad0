//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Prefix of every issued short URL (default: `http://localhost:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_BATCH_SIZE` - Maximum URLs per shorten request (default: 1000)
//! - `CODE_MAX_ATTEMPTS` - Code generation attempts per link before giving up (default: 10)
//!
//! All variables are optional; a `.env` file is honoured when present.

use anyhow::{Context, Result};
use std::env;

use crate::application::services::link_service::DEFAULT_MAX_ATTEMPTS;
use crate::application::services::shorten_service::DEFAULT_MAX_BATCH_SIZE;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Externally visible base of short URLs, without trailing slash.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    pub max_batch_size: usize,
    pub code_max_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            base_url: "http://localhost:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            code_max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but not a valid number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let base_url = env::var("BASE_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let max_batch_size =
            parse_var("MAX_BATCH_SIZE")?.unwrap_or(defaults.max_batch_size);
        let code_max_attempts =
            parse_var("CODE_MAX_ATTEMPTS")?.unwrap_or(defaults.code_max_attempts);

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            max_batch_size,
            code_max_attempts,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an http(s) URL
    /// - `log_format` is not `text` or `json`
    /// - `max_batch_size` is outside 1..=100000
    /// - `code_max_attempts` is outside 1..=100
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.max_batch_size == 0 || self.max_batch_size > 100_000 {
            anyhow::bail!(
                "MAX_BATCH_SIZE must be between 1 and 100000, got {}",
                self.max_batch_size
            );
        }

        if self.code_max_attempts == 0 || self.code_max_attempts > 100 {
            anyhow::bail!(
                "CODE_MAX_ATTEMPTS must be between 1 and 100, got {}",
                self.code_max_attempts
            );
        }

        Ok(())
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max batch size: {}", self.max_batch_size);
        tracing::info!("  Code attempts: {}", self.code_max_attempts);
    }
}

/// Reads an optional numeric variable.
fn parse_var(name: &str) -> Result<Option<usize>> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a positive integer, got '{raw}'")),
        Err(_) => Ok(None),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
