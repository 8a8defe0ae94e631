//! Application services for comments.

mod thread;

pub use thread::{CommentService, CommentServiceError, CommentServiceResult};
