//! Great-circle distance on a spherical Earth.

use crate::models::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points, in kilometers.
///
/// Symmetric and non-negative; zero when both points coincide. Behavior for
/// NaN or out-of-range coordinates is unspecified.
///
/// # Examples
///
/// ```
/// use delivery_route::distance::haversine;
/// use delivery_route::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(0.0, 1.0);
/// // One degree of arc along the equator.
/// assert!((haversine(a, b) - 111.195).abs() < 1e-3);
/// ```
pub fn haversine(a: Point, b: Point) -> f64 {
    let d_lat = (b.lat() - a.lat()).to_radians();
    let d_lon = (b.lon() - a.lon()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat().to_radians().cos() * b.lat().to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
