//! Notifier configuration
//!
//! All settings come from the environment, read once at startup. The three
//! secrets are required and checked before the loop starts; everything else
//! has defaults.

use std::time::Duration;

use thiserror::Error;

use hwbell_client::DEFAULT_ENDPOINT;

/// Wait between poll cycles when `POLL_INTERVAL` is not set
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(600);

/// Raised when required configuration is absent at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required environment variables are unset or empty
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<String>),
}

/// Notifier configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth token for the homework-review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Destination chat for notifications
    pub telegram_chat_id: String,

    /// Base URL of the homework-review API
    pub endpoint: String,

    /// How often to poll for status updates
    pub poll_interval: Duration,
}

impl Config {
    /// Reads configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: production endpoint)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    ///
    /// A missing secret is recorded as an empty string here so that
    /// [`Config::check_tokens`] can name every absent variable at once.
    pub fn from_env() -> Self {
        Self {
            practicum_token: env_string("PRACTICUM_TOKEN"),
            telegram_token: env_string("TELEGRAM_TOKEN"),
            telegram_chat_id: env_string("TELEGRAM_CHAT_ID"),
            endpoint: std::env::var("PRACTICUM_ENDPOINT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            poll_interval: std::env::var("POLL_INTERVAL")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_POLL_INTERVAL),
        }
    }

    /// Verifies every required secret is present and non-empty
    ///
    /// Runs exactly once, before the polling loop. Failure is fatal and is
    /// never retried per cycle.
    pub fn check_tokens(&self) -> Result<(), ConfigError> {
        let mut missing = Vec::new();

        if self.practicum_token.is_empty() {
            missing.push("PRACTICUM_TOKEN".to_string());
        }
        if self.telegram_token.is_empty() {
            missing.push("TELEGRAM_TOKEN".to_string());
        }
        if self.telegram_chat_id.is_empty() {
            missing.push("TELEGRAM_CHAT_ID".to_string());
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Missing(missing))
        }
    }
}

fn env_string(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}
