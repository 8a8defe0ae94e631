//! In-memory adapters for comment ports.

mod comment;

pub use comment::InMemoryCommentRepository;
