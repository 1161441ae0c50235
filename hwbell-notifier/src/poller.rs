//! Status poller
//!
//! Runs the fetch -> validate -> notify cycle forever on a fixed interval.
//! Every recoverable error is caught here, reported through the chat channel
//! and the log, and the loop keeps going. The only fatal exit path is the
//! configuration check, which happens before this loop ever starts.

use std::sync::Arc;

use tokio::time;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::CycleError;
use crate::response::check_response;
use crate::service::{Messenger, StatusSource};
use crate::verdicts::parse_status;

/// Poller holding the in-memory cursor and the two external capabilities
pub struct Poller {
    config: Config,
    source: Arc<dyn StatusSource>,
    messenger: Arc<dyn Messenger>,
    /// Timestamp up to which updates have been fetched. Process-lifetime
    /// only; a restart resumes from "now".
    cursor: i64,
}

impl Poller {
    /// Creates a new poller with the cursor at `start`
    pub fn new(
        config: Config,
        source: Arc<dyn StatusSource>,
        messenger: Arc<dyn Messenger>,
        start: i64,
    ) -> Self {
        Self {
            config,
            source,
            messenger,
            cursor: start,
        }
    }

    /// Current cursor position
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Starts the polling loop. Never returns under normal operation;
    /// the process stops only by external termination.
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;

            debug!("Polling for homework status updates");
            self.cycle().await;
        }
    }

    /// Performs one poll cycle, absorbing every recoverable failure
    ///
    /// Errors from fetch, validation, and formatting land here exactly once:
    /// they are logged, wrapped into a failure report, and delivered
    /// best-effort through the same chat channel as regular notifications.
    pub async fn cycle(&mut self) {
        if let Err(e) = self.try_cycle().await {
            match &e {
                CycleError::Client(cause) => error!("Fetch failed: {}", cause),
                CycleError::Shape(what) => error!("Malformed response: {}", what),
                CycleError::UnknownStatus(status) => {
                    error!("Unrecognized homework status: {:?}", status)
                }
            }
            self.notify(&failure_message(&e)).await;
        }
    }

    async fn try_cycle(&mut self) -> Result<(), CycleError> {
        let response = self.source.homework_statuses(self.cursor).await?;
        let page = check_response(&response)?;

        // only the newest submission matters; older entries are ignored
        let Some(newest) = page.homeworks.first() else {
            info!("No new homeworks");
            return Ok(());
        };

        let message = parse_status(newest)?;
        self.notify(&message).await;

        // the cursor advances only on a cycle that actually carried data
        self.cursor = page
            .current_date
            .ok_or(CycleError::Shape("missing current_date"))?;

        Ok(())
    }

    /// Best-effort delivery
    ///
    /// A broken notifier must never take down the loop: this channel is also
    /// how the loop reports its own failures, so delivery errors are logged
    /// and dropped.
    async fn notify(&self, text: &str) {
        match self
            .messenger
            .send(&self.config.telegram_chat_id, text)
            .await
        {
            Ok(()) => debug!("Notification delivered: {}", text),
            Err(e) => error!("Notification not delivered: {}", e),
        }
    }
}

/// Failure report sent through the chat channel
fn failure_message(error: &CycleError) -> String {
    format!("Сбой в работе программы: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verdicts::verdict_for;
    use hwbell_client::ClientError;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use std::time::Duration;

    struct FixedSource(Value);

    #[async_trait::async_trait]
    impl StatusSource for FixedSource {
        async fn homework_statuses(&self, _from_date: i64) -> Result<Value, ClientError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource(u16);

    #[async_trait::async_trait]
    impl StatusSource for FailingSource {
        async fn homework_statuses(&self, _from_date: i64) -> Result<Value, ClientError> {
            Err(ClientError::unexpected_status(self.0, "https://example.com"))
        }
    }

    #[derive(Default)]
    struct RecordingMessenger {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl RecordingMessenger {
        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn texts(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|(_, text)| text.clone())
                .collect()
        }
    }

    #[async_trait::async_trait]
    impl Messenger for RecordingMessenger {
        async fn send(&self, chat_id: &str, text: &str) -> Result<(), ClientError> {
            self.sent
                .lock()
                .unwrap()
                .push((chat_id.to_string(), text.to_string()));
            if self.fail {
                Err(ClientError::unexpected_status(
                    400,
                    "https://api.telegram.org",
                ))
            } else {
                Ok(())
            }
        }
    }

    fn test_config() -> Config {
        Config {
            practicum_token: "practicum".to_string(),
            telegram_token: "telegram".to_string(),
            telegram_chat_id: "42".to_string(),
            endpoint: "https://example.com/api".to_string(),
            poll_interval: Duration::from_secs(600),
        }
    }

    fn poller_with(
        source: impl StatusSource + 'static,
        messenger: Arc<RecordingMessenger>,
        start: i64,
    ) -> Poller {
        Poller::new(test_config(), Arc::new(source), messenger, start)
    }

    #[tokio::test]
    async fn test_new_homework_notifies_and_advances_cursor() {
        let response = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1000,
        });
        let messenger = Arc::new(RecordingMessenger::default());
        let mut poller = poller_with(FixedSource(response), Arc::clone(&messenger), 0);

        poller.cycle().await;

        let texts = messenger.texts();
        assert_eq!(texts.len(), 1);
        assert!(texts[0].contains("hw1"));
        assert!(texts[0].contains(verdict_for("approved").unwrap()));
        assert_eq!(poller.cursor(), 1000);
    }

    #[tokio::test]
    async fn test_empty_homeworks_stays_quiet_and_keeps_cursor() {
        let response = json!({"homeworks": [], "current_date": 2000});
        let messenger = Arc::new(RecordingMessenger::default());
        let mut poller = poller_with(FixedSource(response), Arc::clone(&messenger), 500);

        poller.cycle().await;

        assert!(messenger.texts().is_empty());
        assert_eq!(poller.cursor(), 500);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported_and_loop_survives() {
        let messenger = Arc::new(RecordingMessenger::default());
        let mut poller = poller_with(FailingSource(503), Arc::clone(&messenger), 500);

        poller.cycle().await;

        let texts = messenger.texts();
        assert_eq!(texts.len(), 1);
        assert!(texts[0].contains("Сбой в работе программы"));
        assert!(texts[0].contains("503"));
        assert_eq!(poller.cursor(), 500);
    }

    #[tokio::test]
    async fn test_unknown_status_is_reported_as_failure() {
        let response = json!({
            "homeworks": [{"homework_name": "hw2", "status": "unknown_state"}],
        });
        let messenger = Arc::new(RecordingMessenger::default());
        let mut poller = poller_with(FixedSource(response), Arc::clone(&messenger), 500);

        poller.cycle().await;

        let texts = messenger.texts();
        assert_eq!(texts.len(), 1);
        assert!(texts[0].contains("Сбой в работе программы"));
        assert!(texts[0].contains("unknown_state"));
        assert_eq!(poller.cursor(), 500);
    }

    #[tokio::test]
    async fn test_delivery_failure_never_fails_the_cycle() {
        let response = json!({
            "homeworks": [{"homework_name": "hw1", "status": "reviewing"}],
            "current_date": 3000,
        });
        let messenger = Arc::new(RecordingMessenger::failing());
        let mut poller = poller_with(FixedSource(response), Arc::clone(&messenger), 0);

        poller.cycle().await;

        // the attempt happened, the failure was swallowed, the cycle finished
        assert_eq!(messenger.texts().len(), 1);
        assert_eq!(poller.cursor(), 3000);
    }

    #[tokio::test]
    async fn test_missing_current_date_with_data_reports_after_notifying() {
        let response = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
        });
        let messenger = Arc::new(RecordingMessenger::default());
        let mut poller = poller_with(FixedSource(response), Arc::clone(&messenger), 500);

        poller.cycle().await;

        // the status message went out first, then the cursor advance failed
        let texts = messenger.texts();
        assert_eq!(texts.len(), 2);
        assert!(texts[0].contains("hw1"));
        assert!(texts[1].contains("Сбой в работе программы"));
        assert_eq!(poller.cursor(), 500);
    }

    #[tokio::test]
    async fn test_only_the_newest_record_is_inspected() {
        let response = json!({
            "homeworks": [
                {"homework_name": "hw3", "status": "rejected"},
                {"homework_name": "hw2", "status": "approved"},
            ],
            "current_date": 4000,
        });
        let messenger = Arc::new(RecordingMessenger::default());
        let mut poller = poller_with(FixedSource(response), Arc::clone(&messenger), 0);

        poller.cycle().await;

        let texts = messenger.texts();
        assert_eq!(texts.len(), 1);
        assert!(texts[0].contains("hw3"));
        assert!(!texts[0].contains("hw2"));
    }

    #[test]
    fn test_failure_message_embeds_the_error() {
        let message = failure_message(&CycleError::Shape("missing homeworks"));
        assert!(message.contains("Сбой в работе программы"));
        assert!(message.contains("missing homeworks"));
    }
}
