//! hwbell HTTP clients
//!
//! Type-safe HTTP clients for the two external services the notifier talks
//! to: the homework-review API (fetch) and the Telegram Bot API (deliver).
//!
//! Both clients are thin wrappers over `reqwest`: one outbound request per
//! call, no internal retries. Retry cadence belongs to the polling loop, not
//! here.

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{DEFAULT_ENDPOINT, PracticumClient};
pub use telegram::TelegramClient;
