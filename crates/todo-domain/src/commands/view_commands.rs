use super::{Command, CommandContext};
use crate::ViewMode;
use todo_core::TodoResult;

/// Switch between the active list and the archive
pub struct SetViewMode {
    pub view_mode: ViewMode,
}

impl Command for SetViewMode {
    fn execute(&self, context: &mut CommandContext) -> TodoResult<()> {
        context.store.set_view_mode(self.view_mode);
        Ok(())
    }

    fn description(&self) -> String {
        format!("Show {:?} tasks", self.view_mode)
    }
}
