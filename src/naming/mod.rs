//! Per-owner title handling for task lists and tags.
//!
//! Task list titles and tag names share one validated value type,
//! [`Title`], and one collision strategy, [`TitleDisambiguator`], which
//! appends an incrementing ` (n)` suffix until a caller-supplied probe
//! reports the candidate as free. The disambiguator never touches storage;
//! it only decides which string the caller should persist.

mod disambiguator;
mod error;
mod title;

pub use disambiguator::{
    DisambiguationConfig, TitleDisambiguator, TitleKind, resolve_unique_title,
};
pub use error::{DisambiguationError, TitleError};
pub use title::Title;
pub(crate) use title::uniqueness_key;

#[cfg(test)]
mod tests;
