//! Test-only utilities for `procura-router`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use procura_core::Waypoint;

pub use procura_core::test_support::{payloads, stop};

/// Stops strung along the equator, `spacing_deg` degrees of longitude apart.
///
/// Payloads run `0..count` from west to east, so the nearest-neighbour order
/// from stop `0` is the identity.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "longitudes are derived from the stop index"
)]
pub fn equator_stops(count: u32, spacing_deg: f64) -> Vec<Waypoint<u64>> {
    (0..count)
        .map(|index| stop(u64::from(index), 0.0, f64::from(index) * spacing_deg))
        .collect()
}
