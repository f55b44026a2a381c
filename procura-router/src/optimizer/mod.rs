//! `NearestNeighbourOptimizer` implementation.

use geo::Coord;
use procura_core::{Route, RouteError, RouteOptimizer, Waypoint, haversine_km, validate_waypoints};

/// Routes of this many stops or fewer admit only the order they arrive in.
const TRIVIAL_ROUTE_LEN: usize = 2;

/// Greedy nearest-neighbour route construction.
///
/// The route is seeded with the first waypoint. Each following stop is the
/// unvisited waypoint nearest to the last one placed; an incumbent is only
/// displaced by a strictly shorter distance, so ties resolve to the lowest
/// input index.
///
/// # Examples
/// ```
/// use procura_core::{RouteOptimizer, Waypoint};
/// use procura_router::NearestNeighbourOptimizer;
///
/// let stops = vec![
///     Waypoint::from_lat_lon(0.0, 0.0, "depot"),
///     Waypoint::from_lat_lon(0.0, 2.0, "far"),
///     Waypoint::from_lat_lon(0.0, 1.0, "near"),
/// ];
/// let route = NearestNeighbourOptimizer.optimize(stops).expect("finite stops");
/// let order: Vec<_> = route.stops().iter().map(|stop| stop.payload).collect();
/// assert_eq!(order, ["depot", "near", "far"]);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NearestNeighbourOptimizer;

impl RouteOptimizer for NearestNeighbourOptimizer {
    fn optimize<T>(&self, waypoints: Vec<Waypoint<T>>) -> Result<Route<T>, RouteError> {
        validate_waypoints(&waypoints)?;
        if waypoints.len() <= TRIVIAL_ROUTE_LEN {
            return Ok(Route::new(waypoints));
        }

        let count = waypoints.len();
        let route = Route::new(nearest_neighbour_order(waypoints));
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "ordered {count} waypoints into a {:.3} km route",
                route.total_distance_km()
            );
        }
        Ok(route)
    }
}

/// Order `waypoints` with the default [`NearestNeighbourOptimizer`].
///
/// # Errors
/// Returns [`RouteError::NonFiniteCoordinate`] when a waypoint has a NaN or
/// infinite coordinate.
pub fn optimize<T>(waypoints: Vec<Waypoint<T>>) -> Result<Route<T>, RouteError> {
    NearestNeighbourOptimizer.optimize(waypoints)
}

fn nearest_neighbour_order<T>(mut pool: Vec<Waypoint<T>>) -> Vec<Waypoint<T>> {
    let mut route = Vec::with_capacity(pool.len());
    if pool.is_empty() {
        return route;
    }

    // `Vec::remove` shifts the tail left, so the pool keeps input order and
    // the lowest pool position is always the lowest original index.
    let seed = pool.remove(0);
    let mut current = seed.location;
    route.push(seed);

    while let Some(position) = nearest_position(current, &pool) {
        let next = pool.remove(position);
        current = next.location;
        route.push(next);
    }
    route
}

fn nearest_position<T>(from: Coord<f64>, pool: &[Waypoint<T>]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (position, candidate) in pool.iter().enumerate() {
        let distance = leg_km(from, candidate.location);
        if best.is_none_or(|(_, incumbent)| distance < incumbent) {
            best = Some((position, distance));
        }
    }
    best.map(|(position, _)| position)
}

/// Haversine leg length with NaN treated as unreachable.
///
/// Exact antipodes can round the haversine term just past one, which yields
/// NaN; ranking those legs last keeps the scan's tie rule intact.
fn leg_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let distance = haversine_km(from, to);
    if distance.is_nan() {
        f64::INFINITY
    } else {
        distance
    }
}
