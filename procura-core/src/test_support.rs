//! Test-only builders shared by unit, behaviour, and property tests.

use crate::{Route, Waypoint};

/// Build a waypoint whose payload is a numeric stop identifier.
#[must_use]
pub const fn stop(id: u64, latitude: f64, longitude: f64) -> Waypoint<u64> {
    Waypoint::from_lat_lon(latitude, longitude, id)
}

/// Collect the payloads of a route in visiting order.
#[must_use]
pub fn payloads<T: Clone>(route: &Route<T>) -> Vec<T> {
    route
        .stops()
        .iter()
        .map(|waypoint| waypoint.payload.clone())
        .collect()
}
