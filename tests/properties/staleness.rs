//! Property tests for the staleness rule.

use std::time::{Duration, SystemTime};

use proptest::prelude::*;

use shader_watch::is_stale_at;

fn at(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An artifact strictly newer than its source is never rebuilt.
    #[test]
    fn property_newer_artifact_is_fresh(
        source in 0u64..1_000_000,
        gap in 1u64..1_000_000
    ) {
        prop_assert!(!is_stale_at(at(source), Some(at(source + gap))));
    }

    /// PROPERTY: An artifact no newer than its source is always rebuilt.
    #[test]
    fn property_older_or_equal_artifact_is_stale(
        artifact in 0u64..1_000_000,
        gap in 0u64..1_000_000
    ) {
        prop_assert!(is_stale_at(at(artifact + gap), Some(at(artifact))));
    }

    /// PROPERTY: A missing artifact is stale whatever the source time.
    #[test]
    fn property_missing_artifact_is_stale(source in 0u64..u32::MAX as u64) {
        prop_assert!(is_stale_at(at(source), None));
    }
}
