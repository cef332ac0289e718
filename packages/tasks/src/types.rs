// ABOUTME: Task type definitions
// ABOUTME: Structures for task records and create/update inputs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single to-do item as stored and served over the API.
///
/// Timestamps are local date-times without an offset and serialize as
/// ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDateTime,
    #[serde(rename = "completedAt")]
    pub completed_at: Option<NaiveDateTime>,
}

/// Fields a client may supply when creating a task. The id and creation
/// timestamp are always assigned by the storage layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreateInput {
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    pub completed_at: Option<NaiveDateTime>,
}

/// Fields overwritten by an update. Everything else on the stored record
/// is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUpdateInput {
    pub title: String,
    pub description: Option<String>,
    pub done: bool,
    pub completed_at: Option<NaiveDateTime>,
}

impl Task {
    /// Overwrite the client-editable fields from an update payload.
    /// The id and created_at are deliberately untouched.
    pub fn apply_update(&mut self, input: TaskUpdateInput) {
        self.title = input.title;
        self.description = input.description;
        self.done = input.done;
        self.completed_at = input.completed_at;
    }
}
