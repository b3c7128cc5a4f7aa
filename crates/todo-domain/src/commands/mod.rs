use todo_core::TodoResult;

pub mod task_commands;
pub mod view_commands;

pub use task_commands::*;
pub use view_commands::*;

use crate::{TaskId, TaskListStore};

/// Trait for commands that mutate the task list.
/// Commands represent user intent and are executed against a [`CommandContext`].
pub trait Command: Send + Sync {
    /// Execute this command, mutating the store
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}

/// Context passed to commands for mutation
pub struct CommandContext<'a> {
    pub store: &'a mut TaskListStore,
    /// Set by [`AddTask`] when a task was actually created.
    pub created: Option<TaskId>,
}

impl<'a> CommandContext<'a> {
    pub fn new(store: &'a mut TaskListStore) -> Self {
        Self {
            store,
            created: None,
        }
    }
}
