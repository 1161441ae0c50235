//! Trait seams between the poller and the HTTP clients
//!
//! The poller only sees these two capabilities. Trait-based to enable
//! testing with in-memory fakes.

use async_trait::async_trait;
use serde_json::Value;

use hwbell_client::{ClientError, PracticumClient, TelegramClient};

/// Source of homework status updates
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Fetches all updates submitted since `from_date`
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, ClientError>;
}

#[async_trait]
impl StatusSource for PracticumClient {
    async fn homework_statuses(&self, from_date: i64) -> Result<Value, ClientError> {
        PracticumClient::homework_statuses(self, from_date).await
    }
}

/// Destination for notification messages
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Delivers `text` to `chat_id`
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), ClientError>;
}

#[async_trait]
impl Messenger for TelegramClient {
    async fn send(&self, chat_id: &str, text: &str) -> Result<(), ClientError> {
        self.send_message(chat_id, text).await
    }
}
