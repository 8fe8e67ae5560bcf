//! Route evaluator computing distance, travel time and delivery-window fit.

use std::time::Duration;

use serde::Serialize;

use crate::distance::haversine;
use crate::error::{Error, Result};
use crate::models::{DeliveryWindow, Point, Route};

/// Assumed average speed of a delivery vehicle in an urban area, km/h.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

/// Sums the haversine distance over consecutive legs of `route`, in km.
///
/// Zero for the degenerate single-location route `[0, 0]`.
///
/// # Panics
///
/// Panics if the route references an index outside `locations`.
///
/// # Examples
///
/// ```
/// use delivery_route::models::{Point, Route};
/// use delivery_route::evaluation::total_distance;
///
/// let locations = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)];
/// let route = Route::from_indices(vec![0, 1, 0]);
/// assert!((total_distance(&route, &locations) - 222.39).abs() < 0.01);
/// ```
pub fn total_distance(route: &Route, locations: &[Point]) -> f64 {
    route
        .legs()
        .map(|(from, to)| haversine(locations[from], locations[to]))
        .sum()
}

/// Time needed to cover `distance_km` at a constant `speed_kmh`.
///
/// # Errors
///
/// Returns [`Error::InvalidSpeed`] unless the speed is finite and positive,
/// and [`Error::InvalidInput`] when the distance is not finite or the travel
/// time does not fit in a [`Duration`].
pub fn estimated_travel_time(distance_km: f64, speed_kmh: f64) -> Result<Duration> {
    if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
        return Err(Error::InvalidSpeed(speed_kmh));
    }
    if !distance_km.is_finite() {
        return Err(Error::invalid_input(format!("distance {distance_km} km is not finite")));
    }
    let hours = distance_km.max(0.0) / speed_kmh;
    Duration::try_from_secs_f64(hours * 3600.0).map_err(|_| {
        Error::invalid_input(format!(
            "travel time for {distance_km} km at {speed_kmh} km/h is out of range"
        ))
    })
}

/// Checks whether consecutive stops have compatible delivery windows.
///
/// For every leg `(i, j)` of the route the opening of `j`'s window must fall
/// within `i`'s window. This is a feasibility indicator only; the route is
/// never reordered to satisfy it.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] unless there is exactly one window per
/// location, i.e. `route.len() - 1` windows for a closed route.
pub fn fits_delivery_windows(route: &Route, windows: &[DeliveryWindow]) -> Result<bool> {
    let n = route.len().saturating_sub(1);
    if windows.len() != n {
        return Err(Error::invalid_input(format!(
            "expected {n} delivery windows, got {}",
            windows.len()
        )));
    }
    if let Some(&idx) = route.indices().iter().find(|&&idx| idx >= n) {
        return Err(Error::invalid_input(format!(
            "no delivery window for location {idx} ({n} windows given)"
        )));
    }
    Ok(route
        .legs()
        .all(|(from, to)| windows[from].contains(windows[to].start())))
}

/// Summary metrics for a single constructed route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMetrics {
    /// Total closed-loop distance in kilometers.
    pub total_distance_km: f64,
    /// Wall-clock time spent constructing the route.
    pub execution_time: Duration,
    /// Estimated driving time for the whole loop.
    pub eta: Duration,
    /// Delivery-window compatibility, when windows were supplied.
    pub fits_windows: Option<bool>,
    /// Number of vehicle trips; always one for a single closed tour.
    pub num_routes: usize,
}

/// Evaluates routes over a fixed location set.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use delivery_route::models::{Point, Route};
/// use delivery_route::evaluation::RouteEvaluator;
///
/// let locations = vec![Point::new(0.0, 0.0), Point::new(0.0, 1.0)];
/// let evaluator = RouteEvaluator::new(&locations, 60.0).unwrap();
/// let route = Route::from_indices(vec![0, 1, 0]);
/// let metrics = evaluator.evaluate(&route, Duration::ZERO, None).unwrap();
/// assert_eq!(metrics.num_routes, 1);
/// assert!(metrics.eta > Duration::from_secs(3 * 3600));
/// ```
pub struct RouteEvaluator<'a> {
    locations: &'a [Point],
    speed_kmh: f64,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates an evaluator assuming the given average speed.
    pub fn new(locations: &'a [Point], speed_kmh: f64) -> Result<Self> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(Error::InvalidSpeed(speed_kmh));
        }
        Ok(Self {
            locations,
            speed_kmh,
        })
    }

    /// Assumed average speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Validates `route` against the location set and computes its metrics.
    pub fn evaluate(
        &self,
        route: &Route,
        execution_time: Duration,
        windows: Option<&[DeliveryWindow]>,
    ) -> Result<RouteMetrics> {
        route.validate(self.locations.len())?;

        let total_distance_km = total_distance(route, self.locations);
        let eta = estimated_travel_time(total_distance_km, self.speed_kmh)?;
        let fits_windows = windows
            .map(|w| fits_delivery_windows(route, w))
            .transpose()?;

        Ok(RouteMetrics {
            total_distance_km,
            execution_time,
            eta,
            fits_windows,
            num_routes: 1,
        })
    }
}
