//! Planner configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::evaluation::DEFAULT_SPEED_KMH;
use crate::generation::MAX_LOCATIONS;
use crate::models::Bounds;
use crate::units::DistanceUnit;

/// Settings shared by location generation, evaluation and reporting.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```
/// use delivery_route::config::Config;
/// use delivery_route::units::DistanceUnit;
///
/// let config = Config::from_json(r#"{"unit": "Miles", "count": 12}"#).unwrap();
/// assert_eq!(config.unit, DistanceUnit::Miles);
/// assert_eq!(config.count, 12);
/// assert_eq!(config.speed_kmh, 30.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Rectangle random locations are drawn from.
    pub bounds: Bounds,
    /// Number of locations to generate.
    pub count: usize,
    /// Unit used in reports.
    pub unit: DistanceUnit,
    /// Assumed average speed for travel time estimates, km/h.
    pub speed_kmh: f64,
    /// Seed for reproducible generation; entropy-seeded when absent.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            count: 5,
            unit: DistanceUnit::Kilometers,
            speed_kmh: DEFAULT_SPEED_KMH,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.bounds.validate()?;
        if self.count == 0 || self.count > MAX_LOCATIONS {
            return Err(Error::InvalidCount {
                count: self.count,
                max: MAX_LOCATIONS,
            });
        }
        if !self.speed_kmh.is_finite() || self.speed_kmh <= 0.0 {
            return Err(Error::InvalidSpeed(self.speed_kmh));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Config::from_json("{}").expect("valid"), Config::default());
    }

    #[test]
    fn test_partial_bounds_rejected() {
        assert!(matches!(
            Config::from_json(r#"{"bounds": {"min_lat": 1.0}}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(Config::from_json(r#"{"colour": "blue"}"#).is_err());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            Config::from_json(r#"{"count": 0}"#),
            Err(Error::InvalidCount { .. })
        ));
        assert!(matches!(
            Config::from_json(r#"{"speed_kmh": -1.0}"#),
            Err(Error::InvalidSpeed(_))
        ));
    }
}
