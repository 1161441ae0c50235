//! Telegram Bot API client

use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use crate::error::{ClientError, Result};

/// Default base URL of the Telegram Bot API
const API_BASE: &str = "https://api.telegram.org";

/// `sendMessage` request body
#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// HTTP client for the Telegram Bot API
///
/// Only `sendMessage` is exposed. Delivery here is plain request/response:
/// the best-effort "never crash the loop over a notification" policy is the
/// caller's, not this client's.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// API base URL, overridable for tests
    api_base: String,
    /// Bot token issued by BotFather
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new Telegram client against the production API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(API_BASE, token)
    }

    /// Create a client against a custom API base URL
    pub fn with_api_base(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        let api_base = api_base.into();
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.into(),
            client: Client::new(),
        }
    }

    /// Deliver a text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - The destination chat identifier
    /// * `text` - The message body
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_base, self.token);
        debug!("sendMessage to chat {}", chat_id);
        let response = self
            .client
            .post(&url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // keep the bot token out of error text
            return Err(ClientError::unexpected_status(
                status.as_u16(),
                format!("{}/bot<redacted>/sendMessage", self.api_base),
            ));
        }

        Ok(())
    }
}
