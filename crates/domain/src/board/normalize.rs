//! Normalization of records loaded from client storage.
//!
//! Stored records may come from older versions of the board or be edited
//! by hand, so every member is read defensively and missing values are
//! filled in.

use std::cmp::Reverse;

use serde_json::Value;

use super::status::TaskStatus;
use super::task::{BoardTask, BoardTaskId};
use crate::timestamp::Timestamp;

impl BoardTask {
    /// Builds a board task from one stored record.
    ///
    /// - `id`: strings are kept, numbers become their decimal text, anything
    ///   else is replaced by `fresh_id()`
    /// - `title`: strings are kept, anything else becomes empty
    /// - `done`: truthiness of the stored value
    /// - `status`: a known status is kept, otherwise derived from `done`
    /// - `createdAt`: a valid timestamp is kept, otherwise `now`
    #[must_use]
    pub fn normalize(
        record: &Value,
        now: Timestamp,
        fresh_id: impl FnOnce() -> BoardTaskId,
    ) -> Self {
        let id = match record.get("id") {
            Some(Value::String(text)) => BoardTaskId::new(text.clone()),
            Some(Value::Number(number)) => BoardTaskId::new(number.to_string()),
            _ => fresh_id(),
        };
        let title = record
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let done = record.get("done").is_some_and(is_truthy);
        let status = record
            .get("status")
            .and_then(Value::as_str)
            .and_then(|text| text.parse().ok())
            .unwrap_or_else(|| TaskStatus::from_done(done));
        let created_at = record
            .get("createdAt")
            .and_then(Value::as_str)
            .and_then(Timestamp::parse)
            .unwrap_or(now);

        Self {
            id,
            title,
            done,
            status,
            created_at,
        }
    }
}

/// Truthiness of a JSON value as a loosely typed client would see it.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Normalizes every record and orders the result newest first.
pub fn normalize_records(
    records: &[Value],
    now: Timestamp,
    mut fresh_id: impl FnMut() -> BoardTaskId,
) -> Vec<BoardTask> {
    let tasks = records
        .iter()
        .map(|record| BoardTask::normalize(record, now, &mut fresh_id))
        .collect();
    sort_newest_first(tasks)
}

/// Sorts by creation time, newest first; ties keep their stored order.
#[must_use]
pub fn sort_newest_first(mut tasks: Vec<BoardTask>) -> Vec<BoardTask> {
    tasks.sort_by_key(|task| Reverse(task.created_at));
    tasks
}

// =============================================================================
// Tests
// =============================================================================
