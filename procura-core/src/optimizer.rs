//! Route optimisation contract.
//!
//! Defines the [`RouteOptimizer`] trait and the coordinate checks every
//! optimiser runs before ordering stops.

use thiserror::Error;

use crate::{Route, Waypoint};

/// Errors returned by [`RouteOptimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A waypoint's latitude or longitude was NaN or infinite.
    #[error("waypoint {index} has a non-finite coordinate")]
    NonFiniteCoordinate {
        /// Position of the waypoint in the input sequence.
        index: usize,
    },
}

/// Order waypoints into a visiting sequence.
///
/// Implementations must return a permutation of the input: every waypoint
/// exactly once, payloads untouched. Optimisers are `Send + Sync` so one
/// instance can plan routes for concurrent callers.
///
/// # Examples
/// ```rust
/// use procura_core::{Route, RouteError, RouteOptimizer, Waypoint};
///
/// struct AsGiven;
///
/// impl RouteOptimizer for AsGiven {
///     fn optimize<T>(&self, waypoints: Vec<Waypoint<T>>) -> Result<Route<T>, RouteError> {
///         procura_core::validate_waypoints(&waypoints)?;
///         Ok(Route::new(waypoints))
///     }
/// }
///
/// let route = AsGiven
///     .optimize(vec![Waypoint::from_lat_lon(0.0, 0.0, 1)])
///     .expect("finite input");
/// assert_eq!(route.len(), 1);
/// ```
pub trait RouteOptimizer: Send + Sync {
    /// Reorder `waypoints` into a route.
    ///
    /// # Errors
    /// Returns [`RouteError`] when a coordinate is not a finite number.
    fn optimize<T>(&self, waypoints: Vec<Waypoint<T>>) -> Result<Route<T>, RouteError>;
}

/// Reject waypoints whose coordinates are not finite.
///
/// # Errors
/// Returns [`RouteError::NonFiniteCoordinate`] for the first offending index.
pub fn validate_waypoints<T>(waypoints: &[Waypoint<T>]) -> Result<(), RouteError> {
    waypoints
        .iter()
        .position(|waypoint| !waypoint.is_finite())
        .map_or(Ok(()), |index| {
            Err(RouteError::NonFiniteCoordinate { index })
        })
}
