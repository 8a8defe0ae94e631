//! Domain model for task lists.

mod ids;
mod task_list;

pub use ids::TaskListId;
pub use task_list::{PersistedTaskListData, TaskList};
