//! Stops carried through route optimisation.

use geo::Coord;

/// A stop on a transport route.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The
/// payload is opaque to optimisers and travels with the coordinate through
/// any reordering.
///
/// # Examples
/// ```
/// use procura_core::Waypoint;
///
/// let stop = Waypoint::from_lat_lon(-1.2921, 36.8219, "request-17");
///
/// assert_eq!(stop.latitude(), -1.2921);
/// assert_eq!(stop.longitude(), 36.8219);
/// assert_eq!(stop.payload, "request-17");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint<T> {
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Caller data carried alongside the position.
    pub payload: T,
}

impl<T> Waypoint<T> {
    /// Construct a waypoint from a `geo` coordinate.
    #[must_use]
    pub const fn new(location: Coord<f64>, payload: T) -> Self {
        Self { location, payload }
    }

    /// Construct a waypoint from latitude and longitude in decimal degrees.
    #[must_use]
    pub const fn from_lat_lon(latitude: f64, longitude: f64, payload: T) -> Self {
        Self::new(
            Coord {
                x: longitude,
                y: latitude,
            },
            payload,
        )
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Report whether both components are finite.
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.location.x.is_finite() && self.location.y.is_finite()
    }
}
