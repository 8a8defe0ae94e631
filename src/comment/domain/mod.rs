//! Domain model for task comments.

mod comment;
mod error;
mod ids;

pub use comment::{Comment, CommentText, PersistedCommentData};
pub use error::CommentDomainError;
pub use ids::CommentId;
