//! Distance units for reporting.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Miles per kilometer.
pub const MILES_PER_KM: f64 = 0.621371;

/// Unit in which distances are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DistanceUnit {
    #[default]
    Kilometers,
    Miles,
}

impl DistanceUnit {
    /// Short suffix used when printing values.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceUnit::Kilometers => f.write_str("Kilometers"),
            DistanceUnit::Miles => f.write_str("Miles"),
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kilometers" | "kilometres" | "km" => Ok(DistanceUnit::Kilometers),
            "miles" | "mi" => Ok(DistanceUnit::Miles),
            other => Err(Error::invalid_input(format!("unknown distance unit: {other}"))),
        }
    }
}

/// Converts a distance in kilometers into `unit`.
///
/// # Examples
///
/// ```
/// use delivery_route::units::{convert_distance, DistanceUnit};
///
/// assert_eq!(convert_distance(10.0, DistanceUnit::Kilometers), 10.0);
/// assert_eq!(convert_distance(10.0, DistanceUnit::Miles), 10.0 * 0.621371);
/// ```
pub fn convert_distance(distance_km: f64, unit: DistanceUnit) -> f64 {
    match unit {
        DistanceUnit::Kilometers => distance_km,
        DistanceUnit::Miles => distance_km * MILES_PER_KM,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_unit() {
        assert_eq!("Kilometers".parse::<DistanceUnit>().ok(), Some(DistanceUnit::Kilometers));
        assert_eq!("km".parse::<DistanceUnit>().ok(), Some(DistanceUnit::Kilometers));
        assert_eq!("Miles".parse::<DistanceUnit>().ok(), Some(DistanceUnit::Miles));
        assert_eq!(" MI ".parse::<DistanceUnit>().ok(), Some(DistanceUnit::Miles));
        assert!("furlongs".parse::<DistanceUnit>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for unit in [DistanceUnit::Kilometers, DistanceUnit::Miles] {
            assert_eq!(unit.to_string().parse::<DistanceUnit>().ok(), Some(unit));
        }
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert_distance(0.0, DistanceUnit::Miles), 0.0);
        assert_eq!(convert_distance(42.5, DistanceUnit::Kilometers), 42.5);
        assert!((convert_distance(100.0, DistanceUnit::Miles) - 62.1371).abs() < 1e-9);
    }
}
