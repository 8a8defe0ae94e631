//! Collision resolution for per-owner unique titles.

use super::{DisambiguationError, Title};
use std::fmt;
use std::future::Future;
use tracing::debug;

/// Entity whose title namespace is being probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TitleKind {
    /// Task list titles, unique per owner.
    TaskList,
    /// Tag names, unique per owner.
    Tag,
}

impl TitleKind {
    /// Returns a stable label for logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TaskList => "task_list",
            Self::Tag => "tag",
        }
    }
}

impl fmt::Display for TitleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Limits applied while searching for a free title.
///
/// # Examples
///
/// ```
/// use taskhub::naming::DisambiguationConfig;
///
/// let config = DisambiguationConfig::default();
/// assert_eq!(config.max_attempts, Some(1000));
///
/// let unbounded = DisambiguationConfig::unbounded();
/// assert!(unbounded.max_attempts.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisambiguationConfig {
    /// Maximum number of existence probes, or `None` for no cap.
    pub max_attempts: Option<u32>,
}

impl Default for DisambiguationConfig {
    fn default() -> Self {
        Self {
            max_attempts: Some(1000),
        }
    }
}

impl DisambiguationConfig {
    /// Creates a configuration that probes until a free title is found.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Creates a configuration with a low probe cap.
    ///
    /// Useful where each probe is an expensive round trip.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_attempts: Some(25),
        }
    }
}

/// Appends ` (n)` suffixes to a desired title until the probe reports it
/// free.
///
/// Probes are awaited one at a time; the first candidate is always the
/// desired title itself, then `"<title> (1)"`, `"<title> (2)"` and so on.
/// When a suffixed candidate would exceed the length limit, the base is cut
/// short by characters so the suffix still fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TitleDisambiguator {
    config: DisambiguationConfig,
    max_length: usize,
}

impl Default for TitleDisambiguator {
    fn default() -> Self {
        Self::with_config(DisambiguationConfig::default())
    }
}

impl TitleDisambiguator {
    /// Creates a disambiguator with the default probe cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a disambiguator with custom limits.
    ///
    /// Candidates are kept within [`Title::MAX_LENGTH`] characters.
    #[must_use]
    pub const fn with_config(config: DisambiguationConfig) -> Self {
        Self {
            config,
            max_length: Title::MAX_LENGTH,
        }
    }

    /// Overrides the character limit applied to suffixed candidates.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &DisambiguationConfig {
        &self.config
    }

    /// Resolves the first candidate title for which `exists` returns `false`.
    ///
    /// # Errors
    ///
    /// Returns [`DisambiguationError::Probe`] when the probe fails and
    /// [`DisambiguationError::Exhausted`] when the configured cap is reached
    /// without finding a free title.
    pub async fn resolve<F, Fut, E>(
        &self,
        kind: TitleKind,
        desired: &str,
        mut exists: F,
    ) -> Result<String, DisambiguationError<E>>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = Result<bool, E>>,
    {
        let mut candidate = desired.to_owned();
        let mut attempts: u32 = 0;

        loop {
            if self.config.max_attempts.is_some_and(|max| attempts >= max) {
                debug!(%kind, title = desired, attempts, "title disambiguation exhausted");
                return Err(DisambiguationError::Exhausted {
                    title: desired.to_owned(),
                    attempts,
                });
            }

            attempts = attempts.saturating_add(1);
            let taken = exists(candidate.clone())
                .await
                .map_err(DisambiguationError::Probe)?;
            if !taken {
                return Ok(candidate);
            }

            debug!(%kind, candidate = %candidate, "title already taken");
            candidate = suffixed(desired, attempts, self.max_length);
        }
    }
}

fn suffixed(desired: &str, n: u32, max_length: usize) -> String {
    let suffix = format!(" ({n})");
    let budget = max_length.saturating_sub(suffix.chars().count());
    if desired.chars().count() <= budget {
        return format!("{desired}{suffix}");
    }

    let base: String = desired.chars().take(budget).collect();
    format!("{}{suffix}", base.trim_end())
}

/// Resolves a unique title with the default [`TitleDisambiguator`].
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use std::convert::Infallible;
/// use taskhub::naming::{TitleKind, resolve_unique_title};
///
/// # tokio::runtime::Builder::new_current_thread().build().expect("runtime").block_on(async {
/// let taken: HashSet<String> = ["Work".to_owned(), "Work (1)".to_owned()].into();
/// let title = resolve_unique_title(TitleKind::TaskList, "Work", |candidate| {
///     let hit = taken.contains(&candidate);
///     async move { Ok::<_, Infallible>(hit) }
/// })
/// .await
/// .expect("probe cannot fail");
/// assert_eq!(title, "Work (2)");
/// # });
/// ```
///
/// # Errors
///
/// See [`TitleDisambiguator::resolve`].
pub async fn resolve_unique_title<F, Fut, E>(
    kind: TitleKind,
    desired: &str,
    exists: F,
) -> Result<String, DisambiguationError<E>>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    TitleDisambiguator::new().resolve(kind, desired, exists).await
}
