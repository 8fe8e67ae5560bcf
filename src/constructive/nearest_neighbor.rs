//! Nearest-neighbor tour construction.
//!
//! Builds a closed tour greedily: starting from location 0, always move to the
//! nearest location not yet visited, then return to the start.
//!
//! # Complexity
//!
//! O(n²) distance evaluations where n = number of locations.
//!
//! # Reference
//!
//! The simplest constructive heuristic for the TSP. Tours are typically
//! 15-25% longer than optimal; there is no optimality guarantee.

use std::time::{Duration, Instant};

use log::debug;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{Point, Route, START};

/// Constructs a closed tour over `locations` using the nearest-neighbor
/// heuristic, returning the route together with the time spent building it.
///
/// Distances come from a haversine [`DistanceMatrix`]. Unvisited locations
/// are scanned in ascending index order and the first minimum wins, so
/// equidistant candidates resolve to the lower index. The result is fully
/// deterministic for a given input order.
///
/// # Errors
///
/// Returns [`Error::EmptyLocations`] if `locations` is empty.
///
/// # Examples
///
/// ```
/// use delivery_route::models::Point;
/// use delivery_route::constructive::build_route;
///
/// let locations = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 3.0),
///     Point::new(0.0, 1.0),
///     Point::new(0.0, 2.0),
/// ];
/// let (route, _elapsed) = build_route(&locations).unwrap();
/// assert_eq!(route.indices(), &[0, 2, 3, 1, 0]);
/// ```
pub fn build_route(locations: &[Point]) -> Result<(Route, Duration)> {
    let started = Instant::now();
    let n = locations.len();
    if n == 0 {
        return Err(Error::EmptyLocations);
    }

    let distances = DistanceMatrix::from_points(locations);
    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != START).collect();

    let mut indices = Vec::with_capacity(n + 1);
    indices.push(START);
    let mut current = START;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        // `unvisited` stays sorted, so the first minimum is the lowest index.
        unvisited.retain(|&i| i != next);
        indices.push(next);
        current = next;
    }
    indices.push(START);

    let elapsed = started.elapsed();
    debug!("nearest neighbor: n={n} time={:.3}ms", elapsed.as_secs_f64() * 1e3);

    Ok((Route::from_indices(indices), elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::haversine;

    fn line_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 3.0),
        ]
    }

    #[test]
    fn test_line_visits_in_order() {
        let (route, _) = build_route(&line_points()).expect("non-empty");
        assert_eq!(route.indices(), &[0, 1, 2, 3, 0]);
        assert!(route.validate(4).is_ok());
    }

    #[test]
    fn test_single_point() {
        let (route, elapsed) = build_route(&[Point::new(51.5, -0.1)]).expect("non-empty");
        assert_eq!(route.indices(), &[0, 0]);
        assert!(elapsed >= Duration::ZERO);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(build_route(&[]), Err(Error::EmptyLocations)));
    }

    #[test]
    fn test_chooses_nearest() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let first = if haversine(points[0], points[1]) <= haversine(points[0], points[2]) {
            1
        } else {
            2
        };
        let (route, _) = build_route(&points).expect("non-empty");
        assert_eq!(route.indices()[1], first);
        assert!(route.validate(3).is_ok());
    }

    #[test]
    fn test_far_then_near() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 10.0),
            Point::new(0.0, 1.0),
        ];
        let (route, _) = build_route(&points).expect("non-empty");
        assert_eq!(route.indices(), &[0, 2, 1, 0]);
    }

    #[test]
    fn test_tie_goes_to_lower_index() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, -1.0),
            Point::new(0.0, 1.0),
        ];
        let (route, _) = build_route(&points).expect("non-empty");
        assert_eq!(route.indices(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_duplicate_points() {
        let p = Point::new(51.5, -0.1);
        let (route, _) = build_route(&[p, p, p]).expect("non-empty");
        assert_eq!(route.indices(), &[0, 1, 2, 0]);
    }

    #[test]
    fn test_deterministic() {
        let points = vec![
            Point::new(51.51, -0.12),
            Point::new(51.45, 0.03),
            Point::new(51.62, -0.18),
            Point::new(51.38, 0.11),
            Point::new(51.55, 0.00),
        ];
        let (a, _) = build_route(&points).expect("non-empty");
        let (b, _) = build_route(&points).expect("non-empty");
        assert_eq!(a, b);
        assert!(a.validate(points.len()).is_ok());
    }
}
