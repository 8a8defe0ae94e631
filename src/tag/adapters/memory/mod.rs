//! In-memory adapters for tag ports.

mod tag;

pub use tag::InMemoryTagRepository;
