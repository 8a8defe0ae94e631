//! Application services for tags.

mod labels;

pub use labels::{TagService, TagServiceError, TagServiceResult};
