//! Build metadata collection.

use chrono::{Local, NaiveDateTime};
use sysinfo::System;
use tracing::{debug, warn};

use crate::config::Config;
use crate::revision::RevisionSource;

/// Version triple of the library release this generator ships with.
pub const MAJOR_VERSION: u32 = 5;
pub const MINOR_VERSION: u32 = 2;
pub const MICRO_VERSION: u32 = 127;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M:%S";

/// Placeholder for platform fields the host cannot report.
const UNKNOWN: &str = "unknown";

/// Everything the renderer needs, captured once per invocation and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildMetadata {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    pub build_date: String,
    pub build_time: String,
    pub build_system: String,
    pub build_machine: String,
    pub build_revision: String,
}

/// Collects a complete [`BuildMetadata`]. Platform and revision lookups
/// degrade to placeholders rather than failing; a broken version string must
/// never block a build.
pub fn collect(config: &Config, revision: &dyn RevisionSource) -> BuildMetadata {
    let instant = build_instant(config);
    let build_date = instant.format(DATE_FORMAT).to_string();
    let build_time = instant.format(TIME_FORMAT).to_string();

    let build_system = System::name()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| {
            warn!("platform name unavailable, using placeholder");
            UNKNOWN.to_string()
        });
    let build_machine = System::cpu_arch()
        .filter(|arch| !arch.is_empty())
        .unwrap_or_else(|| {
            warn!("machine architecture unavailable, using placeholder");
            UNKNOWN.to_string()
        });

    let build_revision = revision.revision().unwrap_or_else(|| {
        warn!("revision unavailable, emitting empty revision");
        String::new()
    });

    debug!(%build_date, %build_time, %build_system, %build_machine, "collected build metadata");

    BuildMetadata {
        major: MAJOR_VERSION,
        minor: MINOR_VERSION,
        micro: MICRO_VERSION,
        build_date,
        build_time,
        build_system,
        build_machine,
        build_revision,
    }
}

/// Date and time fields are both formatted from this one instant, so the two
/// can never skew. A pinned anchor is rendered in UTC, the wall clock in
/// local time.
fn build_instant(config: &Config) -> NaiveDateTime {
    match config.timestamp_override {
        Some(anchor) => anchor.naive_utc(),
        None => Local::now().naive_local(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, RevisionStrategy};

    struct FixedRevision(Option<&'static str>);

    impl RevisionSource for FixedRevision {
        fn revision(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    fn anchored(secs: i64) -> Config {
        Config {
            timestamp_override: chrono::DateTime::from_timestamp(secs, 0),
            revision_strategy: RevisionStrategy::Git,
        }
    }

    #[test]
    fn anchored_timestamps_are_reproducible() {
        let config = anchored(946684800);
        let first = collect(&config, &FixedRevision(Some("1234")));
        let second = collect(&config, &FixedRevision(Some("1234")));
        assert_eq!(first, second);
        assert_eq!(first.build_date, "2000-01-01");
        assert_eq!(first.build_time, "00:00:00");
    }

    #[test]
    fn version_triple_is_carried_verbatim() {
        let meta = collect(&anchored(0), &FixedRevision(Some("1")));
        assert_eq!(
            (meta.major, meta.minor, meta.micro),
            (MAJOR_VERSION, MINOR_VERSION, MICRO_VERSION)
        );
    }

    #[test]
    fn missing_revision_degrades_to_empty() {
        let meta = collect(&anchored(0), &FixedRevision(None));
        assert_eq!(meta.build_revision, "");
        assert!(!meta.build_date.is_empty());
        assert!(!meta.build_time.is_empty());
    }

    #[test]
    fn platform_fields_are_never_empty() {
        let meta = collect(&anchored(0), &FixedRevision(Some("1")));
        assert!(!meta.build_system.is_empty());
        assert!(!meta.build_machine.is_empty());
    }
}
