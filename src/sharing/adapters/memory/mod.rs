//! In-memory adapters for sharing ports.

mod share;

pub use share::InMemoryTaskShareRepository;
