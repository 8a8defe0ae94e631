//! Port contracts for tags.

pub mod repository;

pub use repository::{TagRepository, TagRepositoryError, TagRepositoryResult};
