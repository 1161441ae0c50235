//! Homework-review API client

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Default production endpoint of the homework-review API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api";

/// HTTP client for the homework-review API
///
/// Authenticates with an OAuth bearer token and exposes the single operation
/// the notifier needs: fetching status updates since a timestamp.
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Base URL of the API (e.g., the production [`DEFAULT_ENDPOINT`])
    base_url: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new homework-review API client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API
    /// * `token` - The OAuth token identifying the student account
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(base_url, token, Client::new())
    }

    /// Create a client with a custom HTTP client
    ///
    /// This allows the caller to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch all homework status updates submitted since `from_date`
    ///
    /// Returns the decoded JSON body as-is; shape validation is the caller's
    /// concern, so that malformed payloads can be reported precisely instead
    /// of as opaque deserialization failures.
    ///
    /// Transport failures map to [`ClientError::Transport`], non-2xx answers
    /// to [`ClientError::UnexpectedStatus`]. No retry happens here.
    pub async fn homework_statuses(&self, from_date: i64) -> Result<Value> {
        let url = format!("{}/homework_statuses/", self.base_url);
        debug!("GET {} from_date={}", url, from_date);
        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::unexpected_status(status.as_u16(), url));
        }

        Ok(response.json().await?)
    }
}
