use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId};

/// A task that was completed when it was removed from the active list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivedTask {
    pub task: Task,
    pub archived_at: DateTime<Utc>,
}

impl ArchivedTask {
    pub fn new(task: Task) -> Self {
        Self {
            task,
            archived_at: Utc::now(),
        }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    pub fn task_ref(&self) -> &Task {
        &self.task
    }
}
