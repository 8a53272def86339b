//! Server-side task records.
//!
//! A [`Task`] is one element of the JSON array the server keeps on disk.
//! Elements are kept verbatim. Ids stored as numeric strings still match
//! their number, and ids that are missing or not numeric read as
//! [`TaskId::UNASSIGNED`].

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::timestamp::Timestamp;

const ID: &str = "id";
const TITLE: &str = "title";
const DONE: &str = "done";
const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

/// Largest integer a JSON number can hold without losing precision.
pub const MAX_SAFE_ID: u64 = (1 << 53) - 1;

// =============================================================================
// TaskId
// =============================================================================

/// Positive integer identifier of a server task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TaskId(u64);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid \"id\" param (must be a positive integer)")]
pub struct TaskIdError {
    pub raw: String,
}

impl TaskId {
    /// Id of a stored record whose id was missing or not numeric.
    pub const UNASSIGNED: Self = Self(0);

    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.0 != 0
    }

    /// Parses a route parameter into a strictly positive id.
    ///
    /// Surrounding whitespace is ignored and integral decimals such as
    /// `"3.0"` or `"1e2"` are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIdError`] when the parameter is not a positive integer
    /// no larger than [`MAX_SAFE_ID`].
    pub fn parse_param(raw: &str) -> Result<Self, TaskIdError> {
        numeric_value(raw.trim())
            .filter(|value| *value > 0)
            .map(Self)
            .ok_or_else(|| TaskIdError {
                raw: raw.to_string(),
            })
    }

    /// Reads the lookup key of a stored `id` member.
    ///
    /// Integral numbers and numeric strings yield their value; anything else,
    /// including negative or oversized numbers, is [`TaskId::UNASSIGNED`].
    #[must_use]
    pub fn from_stored(value: &Value) -> Self {
        let key = match value {
            Value::Number(number) => number
                .as_u64()
                .filter(|value| *value <= MAX_SAFE_ID)
                .or_else(|| number.as_f64().and_then(integral_value)),
            Value::String(text) => numeric_value(text.trim()),
            _ => None,
        };
        key.map_or(Self::UNASSIGNED, Self)
    }
}

/// Reads text the way a loose numeric conversion would, keeping only
/// non-negative integers that fit in a JSON number.
fn numeric_value(text: &str) -> Option<u64> {
    if text.is_empty() {
        return None;
    }
    if let Ok(value) = text.parse::<u64>() {
        return (value <= MAX_SAFE_ID).then_some(value);
    }
    text.parse::<f64>().ok().and_then(integral_value)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn integral_value(value: f64) -> Option<u64> {
    let in_range = value.is_finite() && value >= 0.0 && value <= MAX_SAFE_ID as f64;
    (in_range && value.fract() == 0.0).then_some(value as u64)
}

impl fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

// =============================================================================
// Task
// =============================================================================

/// One element of the stored task array.
///
/// The element is kept exactly as it was read, whatever its shape, and is
/// written back unchanged unless a mutation touches it. [`Task::id`] is the
/// lookup key derived from the `id` member.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    record: Value,
}

impl Task {
    /// Creates a fresh, not yet completed task.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>, created_at: Timestamp) -> Self {
        let mut members = Map::new();
        members.insert(ID.to_string(), Value::from(id.value()));
        members.insert(TITLE.to_string(), Value::String(title.into()));
        members.insert(DONE.to_string(), Value::Bool(false));
        members.insert(CREATED_AT.to_string(), Value::String(created_at.to_string()));
        Self {
            id,
            record: Value::Object(members),
        }
    }

    #[must_use]
    pub fn from_record(record: Value) -> Self {
        let id = record
            .get(ID)
            .map_or(TaskId::UNASSIGNED, TaskId::from_stored);
        Self { id, record }
    }

    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.record.get(TITLE).and_then(Value::as_str)
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.record.get(DONE) == Some(&Value::Bool(true))
    }

    /// `None` when absent or not a valid timestamp.
    #[must_use]
    pub fn created_at(&self) -> Option<Timestamp> {
        self.timestamp(CREATED_AT)
    }

    #[must_use]
    pub fn updated_at(&self) -> Option<Timestamp> {
        self.timestamp(UPDATED_AT)
    }

    fn timestamp(&self, member: &str) -> Option<Timestamp> {
        self.record
            .get(member)
            .and_then(Value::as_str)
            .and_then(Timestamp::parse)
    }

    #[must_use]
    pub const fn record(&self) -> &Value {
        &self.record
    }

    #[must_use]
    pub fn into_record(self) -> Value {
        self.record
    }

    /// Merges the supplied changes and stamps `updatedAt`.
    ///
    /// Members absent from `changes` keep their stored value and position.
    #[must_use]
    pub fn apply_changes(self, changes: TaskChanges, updated_at: Timestamp) -> Self {
        let Self { id, mut record } = self;
        if let Value::Object(members) = &mut record {
            if let Some(title) = changes.title {
                members.insert(TITLE.to_string(), Value::String(title));
            }
            if let Some(done) = changes.done {
                members.insert(DONE.to_string(), Value::Bool(done));
            }
            members.insert(UPDATED_AT.to_string(), Value::String(updated_at.to_string()));
        }
        Self { id, record }
    }
}

impl Serialize for Task {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Task {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_record)
    }
}

// =============================================================================
// TaskChanges
// =============================================================================

/// Partial update of a task; `None` means "leave as is".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub done: Option<bool>,
}

impl TaskChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.done.is_none()
    }
}

// =============================================================================
// Id allocation
// =============================================================================

/// Returns the id the next created task receives.
///
/// This is 1 for an empty collection and the largest existing id plus one
/// otherwise. Unassigned ids count as 0. Returns `None` once that id would
/// exceed [`MAX_SAFE_ID`].
#[must_use]
pub fn next_task_id(tasks: &[Task]) -> Option<TaskId> {
    let highest = tasks.iter().map(|task| task.id.value()).max().unwrap_or(0);
    let next = highest + 1;
    (next <= MAX_SAFE_ID).then_some(TaskId(next))
}

// =============================================================================
// Tests
// =============================================================================
