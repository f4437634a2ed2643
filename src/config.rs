//! Environment-driven configuration.
//!
//! Everything is read once at startup into a [`Config`] value and handed to
//! the collector, so the collection logic itself never touches the process
//! environment. Environment access goes through an injected lookup function,
//! which lets tests supply fake environments without mutating global state.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Reproducibility anchor: integer seconds since the Unix epoch. When set,
/// the build timestamp is pinned to this instant instead of the wall clock.
pub const SOURCE_DATE_EPOCH: &str = "SOURCE_DATE_EPOCH";

/// Revision source selector: `git` (default) or `keyword`.
pub const REVISION_SOURCE: &str = "MKVERSION_REVISION_SOURCE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SOURCE_DATE_EPOCH is not an integer: {0:?}")]
    InvalidEpoch(String),
    #[error("SOURCE_DATE_EPOCH is out of range: {0}")]
    EpochOutOfRange(i64),
    #[error("unknown revision source {0:?}, expected \"git\" or \"keyword\"")]
    UnknownRevisionSource(String),
}

/// How the build revision is looked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionStrategy {
    /// Ask the git client for the working-copy revision.
    Git,
    /// Extract digits from the keyword-substitution marker in the source.
    Keyword,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Pinned build instant, if `SOURCE_DATE_EPOCH` was set.
    pub timestamp_override: Option<DateTime<Utc>>,
    pub revision_strategy: RevisionStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let timestamp_override = match lookup(SOURCE_DATE_EPOCH) {
            Some(raw) => {
                let secs: i64 = raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEpoch(raw.clone()))?;
                let instant = DateTime::from_timestamp(secs, 0)
                    .ok_or(ConfigError::EpochOutOfRange(secs))?;
                Some(instant)
            }
            None => None,
        };

        let revision_strategy = match lookup(REVISION_SOURCE).as_deref() {
            None | Some("git") => RevisionStrategy::Git,
            Some("keyword") => RevisionStrategy::Keyword,
            Some(other) => return Err(ConfigError::UnknownRevisionSource(other.to_string())),
        };

        Ok(Self {
            timestamp_override,
            revision_strategy,
        })
    }
}
