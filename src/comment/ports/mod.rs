//! Port contracts for comments.

pub mod repository;

pub use repository::{CommentRepository, CommentRepositoryError, CommentRepositoryResult};
