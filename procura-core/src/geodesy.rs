//! Great-circle distance between WGS84 coordinates.
//!
//! Coordinates follow the `geo` convention: `x` is longitude and `y` is
//! latitude, both in decimal degrees.

use geo::Coord;

/// Radius of the spherical earth model in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two coordinates.
///
/// Uses a sphere of radius [`EARTH_RADIUS_KM`]. The result is symmetric and
/// zero for identical points. Non-finite input yields NaN; validate
/// coordinates before calling when that matters.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use procura_core::haversine_km;
///
/// let nairobi = Coord { x: 36.8219, y: -1.2921 };
/// let mombasa = Coord { x: 39.6682, y: -4.0435 };
/// let km = haversine_km(nairobi, mombasa);
/// assert!((km - 440.0).abs() < 5.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "the haversine formula is inherently floating-point"
)]
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let d_lat = (to.y - from.y).to_radians();
    let d_lon = (to.x - from.x).to_radians();
    let half_chord = (d_lat / 2.0).sin().powi(2)
        + from.y.to_radians().cos() * to.y.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());
    EARTH_RADIUS_KM * angle
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const TOLERANCE_KM: f64 = 1e-9;

    #[rstest]
    #[case(Coord { x: 0.0, y: 0.0 })]
    #[case(Coord { x: 36.8219, y: -1.2921 })]
    #[case(Coord { x: -179.5, y: 89.9 })]
    fn identical_points_are_zero_apart(#[case] point: Coord<f64>) {
        assert!(haversine_km(point, point).abs() <= TOLERANCE_KM);
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "expected distance derives from the earth radius"
    )]
    fn one_degree_of_latitude_matches_arc_length() {
        let km = haversine_km(Coord { x: 0.0, y: 0.0 }, Coord { x: 0.0, y: 1.0 });
        let expected = EARTH_RADIUS_KM * 1.0_f64.to_radians();
        assert!((km - expected).abs() <= TOLERANCE_KM, "got {km}");
    }

    #[rstest]
    #[expect(
        clippy::float_arithmetic,
        reason = "antipodal distance is half the circumference"
    )]
    fn antipodal_points_span_half_the_globe() {
        let km = haversine_km(Coord { x: 0.0, y: 0.0 }, Coord { x: 180.0, y: 0.0 });
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI;
        assert!((km - expected).abs() <= 1e-6, "got {km}");
    }

    #[rstest]
    fn non_finite_coordinates_produce_nan() {
        let km = haversine_km(Coord { x: f64::NAN, y: 0.0 }, Coord { x: 0.0, y: 0.0 });
        assert!(km.is_nan());
    }
}
