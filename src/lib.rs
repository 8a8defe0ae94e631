//! Taskhub: collaborative task-management backend core.
//!
//! Users own task lists and tasks, label tasks with tags, discuss them in
//! comments, and share individual tasks with other users. The crate holds
//! the rules every transport layer relies on: who may act on a task, how
//! access grants are validated, how task status may move, and how
//! colliding list and tag titles are resolved.
//!
//! # Architecture
//!
//! Taskhub follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Async repository traits, one per aggregate
//! - **Adapters**: Concrete implementations of ports (thread-safe in-memory
//!   stores)
//! - **Services**: Orchestration called by command handlers
//!
//! # Modules
//!
//! - [`user`]: User registration and lookup
//! - [`task_list`]: Task lists with per-owner unique titles
//! - [`task`]: Tasks and the forward-only status lifecycle
//! - [`tag`]: Per-owner tags attached to tasks
//! - [`comment`]: Comments on tasks
//! - [`sharing`]: Access decisions and sharing grants
//! - [`naming`]: Titles and collision disambiguation

pub mod comment;
pub mod naming;
pub mod sharing;
pub mod tag;
pub mod task;
pub mod task_list;
pub mod user;
