//! In-memory adapters for task list ports.

mod task_list;

pub use task_list::InMemoryTaskListRepository;
