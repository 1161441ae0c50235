//! Response shape validation
//!
//! The homework API body arrives as raw JSON so that each violated
//! expectation can be reported by name instead of as a generic
//! deserialization failure.

use serde_json::Value;

use crate::error::CycleError;

/// Validated slice of a homework-statuses response
#[derive(Debug, Clone)]
pub struct StatusPage {
    /// Homework records, most recent first
    pub homeworks: Vec<Value>,
    /// Server-side "now", used to advance the cursor
    pub current_date: Option<i64>,
}

/// Checks that a decoded response has the contract shape
///
/// The top level must be a mapping with a `homeworks` list. `current_date`
/// is extracted when present; its absence only matters once there is data to
/// advance the cursor past, so it is not an error here.
pub fn check_response(response: &Value) -> Result<StatusPage, CycleError> {
    let object = response
        .as_object()
        .ok_or(CycleError::Shape("not a mapping"))?;

    let homeworks = object
        .get("homeworks")
        .ok_or(CycleError::Shape("missing homeworks"))?;
    let homeworks = homeworks
        .as_array()
        .ok_or(CycleError::Shape("homeworks not a list"))?;

    let current_date = object.get("current_date").and_then(Value::as_i64);

    Ok(StatusPage {
        homeworks: homeworks.clone(),
        current_date,
    })
}
