//! Geographic point type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::haversine;

/// A latitude/longitude pair in degrees.
///
/// A point has no identity of its own; within a location set it is referred
/// to by its index.
///
/// # Examples
///
/// ```
/// use delivery_route::models::Point;
///
/// let depot = Point::new(51.5074, -0.1278);
/// assert_eq!(depot.lat(), 51.5074);
/// assert_eq!(depot.lon(), -0.1278);
/// assert_eq!(depot.distance_to(&depot), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    lat: f64,
    lon: f64,
}

impl Point {
    /// Creates a point from latitude and longitude in degrees.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to another point, in kilometers.
    pub fn distance_to(&self, other: &Point) -> f64 {
        haversine(*self, *other)
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(51.3, -0.2);
        assert_eq!(p.lat(), 51.3);
        assert_eq!(p.lon(), -0.2);
    }

    #[test]
    fn test_point_from_tuple() {
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(51.5, -0.125).to_string(), "51.500000,-0.125000");
    }

    #[test]
    fn test_point_json() {
        let p: Point = serde_json::from_str(r#"{"lat": 51.5, "lon": 0.1}"#).expect("valid json");
        assert_eq!(p, Point::new(51.5, 0.1));
    }
}
