//! Ordered visiting sequences.
//!
//! Wraps the waypoints produced by an optimiser with distance helpers.

use crate::{Waypoint, haversine_km};

/// An ordered path through waypoints.
///
/// # Examples
/// ```
/// use procura_core::{Route, Waypoint};
///
/// let route = Route::new(vec![
///     Waypoint::from_lat_lon(0.0, 0.0, 'a'),
///     Waypoint::from_lat_lon(0.0, 1.0, 'b'),
/// ]);
///
/// assert_eq!(route.len(), 2);
/// assert!(route.total_distance_km() > 111.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<T> {
    /// Waypoints in visiting order.
    pub stops: Vec<Waypoint<T>>,
}

impl<T> Route<T> {
    /// Construct a route from waypoints already in visiting order.
    #[must_use]
    pub const fn new(stops: Vec<Waypoint<T>>) -> Self {
        Self { stops }
    }

    /// Construct an empty route.
    ///
    /// # Examples
    /// ```
    /// use procura_core::Route;
    ///
    /// let route: Route<()> = Route::empty();
    /// assert!(route.is_empty());
    /// assert_eq!(route.total_distance_km(), 0.0);
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Borrow the waypoints in visiting order.
    #[must_use]
    pub const fn stops(&self) -> &[Waypoint<T>] {
        self.stops.as_slice()
    }

    /// Consume the route and return its waypoints.
    #[must_use]
    pub fn into_stops(self) -> Vec<Waypoint<T>> {
        self.stops
    }

    /// Number of waypoints on the route.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.stops.len()
    }

    /// Report whether the route has no waypoints.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Sum of the haversine legs between consecutive waypoints.
    #[must_use]
    pub fn total_distance_km(&self) -> f64 {
        self.stops
            .iter()
            .zip(self.stops.iter().skip(1))
            .map(|(from, to)| haversine_km(from.location, to.location))
            .sum()
    }
}
