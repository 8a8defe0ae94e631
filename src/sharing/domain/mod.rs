//! Domain model for task sharing.

mod rejection;
mod share;

pub use rejection::SharingRejection;
pub use share::TaskShare;
