//! Verdict table and notification formatting
//!
//! The status vocabulary is closed: `approved`, `reviewing`, `rejected`.
//! Anything else is reported as an unknown status rather than guessed at.
//! The verdict sentences and the message template are user-facing text and
//! stay in the deployment's language.

use serde_json::Value;

use crate::error::CycleError;

/// Maps a known review status to its verdict sentence
pub fn verdict_for(status: &str) -> Option<&'static str> {
    match status {
        "approved" => Some("Работа проверена: ревьюеру всё понравилось. Ура!"),
        "reviewing" => Some("Работа взята на проверку ревьюером."),
        "rejected" => Some("Работа проверена: у ревьюера есть замечания."),
        _ => None,
    }
}

/// Builds the status-change notification for one homework record
///
/// The record must be a mapping carrying `status` (a known status string)
/// and `homework_name`. The result is deterministic for a given record.
pub fn parse_status(homework: &Value) -> Result<String, CycleError> {
    let record = homework
        .as_object()
        .ok_or(CycleError::Shape("homework not a mapping"))?;

    let status = record
        .get("status")
        .ok_or(CycleError::Shape("missing status"))?;
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(CycleError::Shape("missing homework_name"))?;
    let status = status
        .as_str()
        .ok_or(CycleError::Shape("status not a string"))?;

    let verdict =
        verdict_for(status).ok_or_else(|| CycleError::UnknownStatus(status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name, verdict
    ))
}
