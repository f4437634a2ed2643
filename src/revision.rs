//! Revision lookup strategies.
//!
//! A missing or broken revision must never block a build, so every source
//! returns `Option<String>` and the collector downgrades `None` to an empty
//! field.

use std::path::PathBuf;
use std::process::Command;

use crate::config::RevisionStrategy;

/// Keyword-substitution marker. A checkout with keyword expansion enabled
/// rewrites this to carry the revision number; an unexpanded checkout leaves
/// it as-is and the extracted revision is empty.
const REVISION_KEYWORD: &str = "$Revision$";

pub trait RevisionSource {
    fn revision(&self) -> Option<String>;
}

pub fn for_strategy(strategy: RevisionStrategy) -> Box<dyn RevisionSource> {
    match strategy {
        RevisionStrategy::Git => Box::new(GitRevision::current_dir()),
        RevisionStrategy::Keyword => Box::new(KeywordRevision::embedded()),
    }
}

/// Queries the git client for the short revision of a working copy. Blocking
/// call with no timeout; if git hangs, the generator hangs.
pub struct GitRevision {
    work_dir: PathBuf,
}

impl GitRevision {
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    pub fn current_dir() -> Self {
        Self::new(".")
    }
}

impl RevisionSource for GitRevision {
    fn revision(&self) -> Option<String> {
        Command::new("git")
            .args(["rev-parse", "--short", "HEAD"])
            .current_dir(&self.work_dir)
            .output()
            .ok()
            .filter(|output| output.status.success())
            .map(|output| String::from_utf8_lossy(&output.stdout).trim_end().to_string())
            .filter(|s| !s.is_empty())
    }
}

/// Extracts the digit characters, in order, from a keyword-substitution
/// marker.
pub struct KeywordRevision {
    marker: String,
}

impl KeywordRevision {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Uses the marker embedded in the generator source.
    pub fn embedded() -> Self {
        Self::new(REVISION_KEYWORD)
    }
}

impl RevisionSource for KeywordRevision {
    fn revision(&self) -> Option<String> {
        let digits: String = self
            .marker
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        if digits.is_empty() {
            None
        } else {
            Some(digits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsubstituted_marker_yields_nothing() {
        assert!(KeywordRevision::embedded().revision().is_none());
    }

    #[test]
    fn substituted_marker_keeps_digits_in_order() {
        let source = KeywordRevision::new("$Revision: 1a2b34 $");
        assert_eq!(source.revision().as_deref(), Some("1234"));
    }

    #[test]
    fn git_outside_a_repository_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let source = GitRevision::new(dir.path());
        assert!(source.revision().is_none());
    }
}
