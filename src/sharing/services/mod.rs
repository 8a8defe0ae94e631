//! Application services for task access control and sharing.

mod authority;
mod policy;
mod service;

pub use authority::{AccessError, AccessResult, TaskAccessAuthority};
pub use policy::{SharingError, SharingPolicy, SharingResult};
pub use service::{SharingService, SharingServiceError, SharingServiceResult};
