pub mod archived_task;
pub mod commands;
pub mod store;
pub mod task;
pub mod view_mode;

pub use archived_task::ArchivedTask;
pub use store::TaskListStore;
pub use task::{Task, TaskId};
pub use view_mode::ViewMode;
