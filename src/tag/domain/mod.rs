//! Domain model for tags.

mod ids;
mod tag;

pub use ids::TagId;
pub use tag::{PersistedTagData, Tag};
