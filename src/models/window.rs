//! Delivery window type.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The interval during which a delivery location accepts a drop-off.
///
/// Units are left to the caller (minutes since shift start, hours of day, ...);
/// only the ordering of values matters.
///
/// # Examples
///
/// ```
/// use delivery_route::models::DeliveryWindow;
///
/// let w = DeliveryWindow::new(9.0, 12.0).unwrap();
/// assert!(w.contains(10.5));
/// assert!(!w.contains(12.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryWindow {
    start: f64,
    end: f64,
}

impl DeliveryWindow {
    /// Creates a new window.
    ///
    /// Fails if `start > end` or either value is non-finite.
    pub fn new(start: f64, end: f64) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() || start > end {
            return Err(Error::invalid_input(format!(
                "delivery window [{start}, {end}] is not a finite, ordered interval"
            )));
        }
        Ok(Self { start, end })
    }

    /// Opening time.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Closing time.
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Returns `true` if `time` falls within the window, bounds included.
    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_valid() {
        let w = DeliveryWindow::new(10.0, 20.0).expect("valid");
        assert_eq!(w.start(), 10.0);
        assert_eq!(w.end(), 20.0);
    }

    #[test]
    fn test_window_invalid() {
        assert!(DeliveryWindow::new(20.0, 10.0).is_err());
        assert!(DeliveryWindow::new(f64::NAN, 10.0).is_err());
        assert!(DeliveryWindow::new(10.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_window_contains() {
        let w = DeliveryWindow::new(10.0, 20.0).expect("valid");
        assert!(w.contains(10.0));
        assert!(w.contains(15.0));
        assert!(w.contains(20.0));
        assert!(!w.contains(9.9));
        assert!(!w.contains(20.1));
    }
}
