use super::{Command, CommandContext};
use crate::TaskId;
use todo_core::TodoResult;

/// Append a task to the active list
pub struct AddTask {
    pub text: String,
}

impl Command for AddTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.created = context.store.add(&self.text);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add task: '{}'", self.text)
    }
}

/// Flip a task's completed flag
pub struct ToggleTask {
    pub task_id: TaskId,
}

impl Command for ToggleTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.store.toggle_complete(self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Toggle task {}", self.task_id)
    }
}

/// Start fading a task out of the active list
pub struct BeginRemoveTask {
    pub task_id: TaskId,
}

impl Command for BeginRemoveTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.store.begin_remove(self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Begin removing task {}", self.task_id)
    }
}

/// Finish removing a task (archive if completed, otherwise discard)
pub struct CommitRemoveTask {
    pub task_id: TaskId,
}

impl Command for CommitRemoveTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.store.commit_remove(self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove task {}", self.task_id)
    }
}

/// Permanently delete an archived task
pub struct DeleteArchivedTask {
    pub task_id: TaskId,
}

impl Command for DeleteArchivedTask {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.store.permanently_delete(self.task_id);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Permanently delete task {}", self.task_id)
    }
}
