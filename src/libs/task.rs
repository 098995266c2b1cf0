//! Task entity and raw feed record conversion.
//!
//! The remote feed delivers untyped JSON objects. Records are only converted
//! into a [`TaskRecord`] once their `completed` flag has been found truthy;
//! everything else is dropped before reaching storage. Conversion failures
//! are typed so the store layer can abort the whole batch on a malformed
//! record.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while reading fields out of a raw feed record.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("record is missing required field `{0}`")]
    MissingField(&'static str),
    #[error("record field `{0}` has an unexpected type")]
    InvalidType(&'static str),
}

/// Persisted form of a fetched task item.
///
/// `id` is supplied by the upstream feed and acts as the primary key; the
/// table never holds more than one row per `id`. `owner_id` mirrors the
/// feed's `userId` with no referential constraint enforced locally.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRecord {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub completed: bool,
}

impl TaskRecord {
    pub fn new(id: i64, owner_id: i64, title: &str, completed: bool) -> Self {
        TaskRecord {
            id,
            owner_id,
            title: title.to_string(),
            completed,
        }
    }
}

/// Evaluates the truthiness of a record's `completed` flag.
///
/// Only JSON `true` counts as completed; `false` and `null` do not. A record
/// without the `completed` key at all (including non-object array elements)
/// is malformed and faults rather than being silently skipped.
pub fn is_completed(record: &Value) -> Result<bool, RecordError> {
    match record.get("completed") {
        Some(value) => Ok(value.as_bool().unwrap_or(false)),
        None => Err(RecordError::MissingField("completed")),
    }
}

impl TryFrom<&Value> for TaskRecord {
    type Error = RecordError;

    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        let id = require_i64(record, "id")?;
        let owner_id = require_i64(record, "userId")?;
        let title = require_str(record, "title")?;
        let completed = is_completed(record)?;

        Ok(TaskRecord::new(id, owner_id, title, completed))
    }
}

fn require_i64(record: &Value, field: &'static str) -> Result<i64, RecordError> {
    let value = record.get(field).ok_or(RecordError::MissingField(field))?;
    value.as_i64().ok_or(RecordError::InvalidType(field))
}

fn require_str<'a>(record: &'a Value, field: &'static str) -> Result<&'a str, RecordError> {
    let value = record.get(field).ok_or(RecordError::MissingField(field))?;
    value.as_str().ok_or(RecordError::InvalidType(field))
}

/// Query filters for reading persisted tasks back out of the store.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    ByOwner(i64),
}
