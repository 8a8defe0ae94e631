//! Application services for user accounts.

mod directory;

pub use directory::{RegisterUserRequest, UserDirectory, UserDirectoryError, UserDirectoryResult};
