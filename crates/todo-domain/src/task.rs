use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TaskId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Ids are UUIDv7, so they sort by creation time and never repeat
    /// within a process.
    pub fn new(text: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }
}
