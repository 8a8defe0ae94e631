//! Domain model for tasks.
//!
//! The task domain owns the status state machine and the closed set of
//! orderings used when listing tasks, keeping all infrastructure concerns
//! outside of the domain boundary.

mod error;
mod ids;
mod ordering;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use ordering::{SortDirection, TaskOrdering, TaskSortKey, sort_tasks};
pub use status::{StatusChange, TaskStatus};
pub use task::{NewTask, PersistedTaskData, Task, TaskDetailsUpdate};
