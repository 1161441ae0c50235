//! hwbell Notifier
//!
//! Polls the homework-review API on a fixed interval and relays status
//! changes for the most recent submission to a Telegram chat.
//!
//! Architecture:
//! - Configuration: read once from the environment, checked before the loop
//! - Clients: HTTP communication with the two external APIs (hwbell-client)
//! - Poller: the fetch -> validate -> notify cycle and its error containment
//!
//! Normal operation never exits; the process stops via external signal.
//! The only fatal path is a missing secret at startup.

mod config;
mod error;
mod poller;
mod response;
mod service;
mod verdicts;

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::poller::Poller;
use hwbell_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hwbell_notifier=info,hwbell_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting hwbell notifier");

    // Load configuration and check the secrets once, before the loop
    let config = Config::from_env();
    if let Err(e) = config.check_tokens() {
        error!("{}", e);
        return Err(e).context("Configuration check failed");
    }

    info!(
        "Loaded configuration: endpoint={}, poll_interval={:?}",
        config.endpoint, config.poll_interval
    );

    let source = Arc::new(PracticumClient::new(
        config.endpoint.as_str(),
        config.practicum_token.as_str(),
    ));
    let messenger = Arc::new(TelegramClient::new(config.telegram_token.as_str()));

    // The cursor always starts at "now"; it is never persisted
    let start = chrono::Utc::now().timestamp();

    let mut poller = Poller::new(config, source, messenger, start);

    info!("Notifier initialized successfully");
    poller.run().await;

    Ok(())
}
