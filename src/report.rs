//! Presentation-ready view of an optimized route.
//!
//! A [`RouteReport`] carries everything a map, table or playback layer needs:
//! the visiting order, the closed coordinate path and the headline metrics.
//! It owns copies of its data, so consumers cannot affect the location set or
//! route it was built from.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::error::Result;
use crate::evaluation::RouteMetrics;
use crate::models::{Point, Route};
use crate::units::{convert_distance, DistanceUnit};

/// One row of the route table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stop {
    /// Position in the visiting order, starting at 0.
    pub order: usize,
    /// Index into the location set.
    pub location: usize,
    /// Human-facing label, 1-based ("Location 1" is index 0).
    pub label: String,
    pub point: Point,
    /// Distance from the previous stop in the report's unit.
    pub leg_distance: f64,
}

/// Mean latitude/longitude of a location set, used to center a map view.
pub fn map_center(locations: &[Point]) -> Option<Point> {
    if locations.is_empty() {
        return None;
    }
    let n = locations.len() as f64;
    let (lat, lon) = locations
        .iter()
        .fold((0.0, 0.0), |(lat, lon), p| (lat + p.lat(), lon + p.lon()));
    Some(Point::new(lat / n, lon / n))
}

/// Coordinates of the route in visit order, ending back at the start.
pub fn route_path(route: &Route, locations: &[Point]) -> Vec<Point> {
    route.indices().iter().map(|&i| locations[i]).collect()
}

pub fn location_label(index: usize) -> String {
    format!("Location {}", index + 1)
}

/// Route, path and metrics expressed in a chosen distance unit.
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    pub route: Route,
    pub stops: Vec<Stop>,
    pub path: Vec<Point>,
    pub center: Option<Point>,
    pub unit: DistanceUnit,
    pub total_distance: f64,
    pub execution_time: Duration,
    pub eta: Duration,
    pub fits_windows: Option<bool>,
    pub num_routes: usize,
}

impl RouteReport {
    /// Builds a report for a validated route.
    pub fn new(
        route: &Route,
        locations: &[Point],
        metrics: &RouteMetrics,
        unit: DistanceUnit,
    ) -> Result<Self> {
        route.validate(locations.len())?;

        let path = route_path(route, locations);
        let mut stops = Vec::with_capacity(path.len());
        let mut prev: Option<Point> = None;
        for (order, (&location, &point)) in route.indices().iter().zip(&path).enumerate() {
            let leg_km = prev.map_or(0.0, |p| p.distance_to(&point));
            stops.push(Stop {
                order,
                location,
                label: location_label(location),
                point,
                leg_distance: convert_distance(leg_km, unit),
            });
            prev = Some(point);
        }

        Ok(Self {
            route: route.clone(),
            stops,
            path,
            center: map_center(locations),
            unit,
            total_distance: convert_distance(metrics.total_distance_km, unit),
            execution_time: metrics.execution_time,
            eta: metrics.eta,
            fits_windows: metrics.fits_windows,
            num_routes: metrics.num_routes,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    format!("{}h {:02}m {:02}s", total / 3600, (total % 3600) / 60, total % 60)
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = self.unit.abbreviation();
        writeln!(f, "Optimized Route:")?;
        writeln!(
            f,
            "{:>5}  {:<13} {:>10} {:>11} {:>10}",
            "Order", "Location", "Latitude", "Longitude", "Leg"
        )?;
        for stop in &self.stops {
            writeln!(
                f,
                "{:>5}  {:<13} {:>10.5} {:>11.5} {:>7.2} {unit}",
                stop.order,
                stop.label,
                stop.point.lat(),
                stop.point.lon(),
                stop.leg_distance
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Route: {}", self.route)?;
        writeln!(f, "Total Distance: {:.2} {unit}", self.total_distance)?;
        writeln!(f, "Estimated Travel Time: {}", format_duration(self.eta))?;
        writeln!(
            f,
            "Execution Time: {:.2} seconds",
            self.execution_time.as_secs_f64()
        )?;
        if let Some(fits) = self.fits_windows {
            writeln!(
                f,
                "Adaptability to Constraints: {}",
                if fits { "Yes" } else { "No" }
            )?;
        }
        write!(f, "Number of Routes/Trips: {}", self.num_routes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<Point>, Route, RouteMetrics) {
        let locations = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let route = Route::from_indices(vec![0, 1, 2, 0]);
        let metrics = RouteMetrics {
            total_distance_km: 100.0,
            execution_time: Duration::from_millis(1),
            eta: Duration::from_secs(3 * 3600 + 20 * 60 + 5),
            fits_windows: None,
            num_routes: 1,
        };
        (locations, route, metrics)
    }

    #[test]
    fn test_path_is_closed() {
        let (locations, route, metrics) = sample();
        let report = RouteReport::new(&route, &locations, &metrics, DistanceUnit::Kilometers)
            .expect("valid route");
        assert_eq!(report.path.len(), 4);
        assert_eq!(report.path.first(), report.path.last());
        assert_eq!(report.stops[0].leg_distance, 0.0);
        assert_eq!(report.stops[1].label, "Location 2");
    }

    #[test]
    fn test_units_applied() {
        let (locations, route, metrics) = sample();
        let report = RouteReport::new(&route, &locations, &metrics, DistanceUnit::Miles)
            .expect("valid route");
        assert!((report.total_distance - 62.1371).abs() < 1e-9);
        let legs: f64 = report.stops.iter().map(|s| s.leg_distance).sum();
        assert!(legs > 0.0);
    }

    #[test]
    fn test_rejects_mismatched_route() {
        let (locations, _, metrics) = sample();
        let route = Route::from_indices(vec![0, 1, 0]);
        assert!(RouteReport::new(&route, &locations, &metrics, DistanceUnit::Kilometers).is_err());
    }

    #[test]
    fn test_map_center() {
        assert_eq!(map_center(&[]), None);
        let c = map_center(&[Point::new(0.0, 0.0), Point::new(2.0, 4.0)]).expect("non-empty");
        assert_eq!(c, Point::new(1.0, 2.0));
    }

    #[test]
    fn test_display() {
        let (locations, route, metrics) = sample();
        let report = RouteReport::new(&route, &locations, &metrics, DistanceUnit::Kilometers)
            .expect("valid route");
        let text = report.to_string();
        assert!(text.contains("Total Distance: 100.00 km"), "{text}");
        assert!(text.contains("Estimated Travel Time: 3h 20m 05s"), "{text}");
        assert!(text.contains("Route: 0 -> 1 -> 2 -> 0"), "{text}");
        assert!(!text.contains("Adaptability"));
    }

    #[test]
    fn test_json() {
        let (locations, route, metrics) = sample();
        let report = RouteReport::new(&route, &locations, &metrics, DistanceUnit::Kilometers)
            .expect("valid route");
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json().expect("serialize")).expect("parse");
        assert_eq!(value["route"], serde_json::json!([0, 1, 2, 0]));
        assert_eq!(value["unit"], "Kilometers");
    }
}
