use todo_core::TodoResult;
use todo_domain::commands::{Command, CommandContext};
use todo_domain::{TaskId, TaskListStore};

/// Runs commands against the store and logs each one.
///
/// Every mutation the UI makes goes through [`StateManager::execute`], so the
/// debug log holds a complete trail of user actions.
#[derive(Debug, Default)]
pub struct StateManager;

impl StateManager {
    pub fn new() -> Self {
        Self
    }

    /// Returns the id of the task the command created, if any.
    pub fn execute(
        &mut self,
        store: &mut TaskListStore,
        command: &dyn Command,
    ) -> TodoResult<Option<TaskId>> {
        tracing::debug!("Executing: {}", command.description());
        let mut context = CommandContext::new(store);
        command.execute(&mut context)?;
        Ok(context.created)
    }
}
