//! Latitude/longitude rectangle used for random location generation.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An axis-aligned lat/lon rectangle, degrees, bounds inclusive.
///
/// Defaults to the Central London area.
///
/// # Examples
///
/// ```
/// use delivery_route::models::{Bounds, Point};
///
/// let london = Bounds::default();
/// assert!(london.contains(&Point::new(51.5074, -0.1278)));
/// assert!(!london.contains(&Point::new(48.8566, 2.3522)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_lat: 51.3,
            max_lat: 51.7,
            min_lon: -0.2,
            max_lon: 0.2,
        }
    }
}

impl Bounds {
    /// Creates a validated rectangle.
    pub fn new(min_lat: f64, max_lat: f64, min_lon: f64, max_lon: f64) -> Result<Self> {
        let bounds = Self {
            min_lat,
            max_lat,
            min_lon,
            max_lon,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks that every edge is finite, on the globe and ordered.
    pub fn validate(&self) -> Result<()> {
        let edges = [self.min_lat, self.max_lat, self.min_lon, self.max_lon];
        if edges.iter().any(|v| !v.is_finite()) {
            return Err(Error::invalid_bounds("edges must be finite"));
        }
        if self.min_lat < -90.0 || self.max_lat > 90.0 {
            return Err(Error::invalid_bounds(format!(
                "latitude range [{}, {}] exceeds [-90, 90]",
                self.min_lat, self.max_lat
            )));
        }
        if self.min_lon < -180.0 || self.max_lon > 180.0 {
            return Err(Error::invalid_bounds(format!(
                "longitude range [{}, {}] exceeds [-180, 180]",
                self.min_lon, self.max_lon
            )));
        }
        if self.min_lat > self.max_lat || self.min_lon > self.max_lon {
            return Err(Error::invalid_bounds("minimum edge above maximum edge"));
        }
        Ok(())
    }

    /// Returns `true` if the point lies inside the rectangle.
    pub fn contains(&self, point: &super::Point) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat())
            && (self.min_lon..=self.max_lon).contains(&point.lon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_london() {
        let b = Bounds::default();
        assert_eq!((b.min_lat, b.max_lat), (51.3, 51.7));
        assert_eq!((b.min_lon, b.max_lon), (-0.2, 0.2));
        assert!(b.validate().is_ok());
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        assert!(matches!(
            Bounds::new(52.0, 51.0, 0.0, 1.0),
            Err(Error::InvalidBounds(_))
        ));
        assert!(Bounds::new(51.0, 52.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_out_of_globe_rejected() {
        assert!(Bounds::new(-91.0, 0.0, 0.0, 1.0).is_err());
        assert!(Bounds::new(0.0, 1.0, 0.0, 181.0).is_err());
        assert!(Bounds::new(0.0, f64::NAN, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_degenerate_rectangle_allowed() {
        assert!(Bounds::new(10.0, 10.0, 20.0, 20.0).is_ok());
    }
}
