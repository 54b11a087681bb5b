//! Shared test utilities for `roadnet-core`.

use proptest::test_runner::Config as ProptestConfig;
use roadnet_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::network::{Network, Road};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// Keeps every property suite aligned on the same `PROGTEST_CASES` and
/// `ROADNET_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a network from `(source, destination, cost)` triples.
#[must_use]
pub(crate) fn network<const D: usize, const R: usize>(
    districts: [&str; D],
    roads: [(&str, &str, i64); R],
) -> Network {
    Network::new(districts, roads.map(Road::from))
}
