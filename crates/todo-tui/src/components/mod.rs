pub mod panel;
pub mod task_list_item;

pub use panel::*;
pub use task_list_item::*;
