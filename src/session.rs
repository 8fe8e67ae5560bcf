//! Caller-owned planning state.
//!
//! A [`Session`] holds the current location set between interactions. The
//! algorithms themselves stay stateless; they borrow the locations for the
//! duration of a call and hand back owned results.

use log::info;
use rand::Rng;

use crate::config::Config;
use crate::constructive::build_route;
use crate::error::{Error, Result};
use crate::evaluation::RouteEvaluator;
use crate::generation::generate_locations;
use crate::models::{DeliveryWindow, Point};
use crate::report::RouteReport;

/// Current locations plus the configuration used to process them.
///
/// # Examples
///
/// ```
/// use delivery_route::config::Config;
/// use delivery_route::generation::seeded_rng;
/// use delivery_route::session::Session;
///
/// let mut session = Session::new(Config::default());
/// assert!(session.optimize().is_err());
///
/// session.generate(&mut seeded_rng(Some(3))).unwrap();
/// let report = session.optimize().unwrap();
/// assert_eq!(report.route.len(), session.locations().len() + 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: Config,
    locations: Vec<Point>,
    windows: Option<Vec<DeliveryWindow>>,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            locations: Vec::new(),
            windows: None,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn locations(&self) -> &[Point] {
        &self.locations
    }

    /// Replaces the location set with `config.count` random points.
    ///
    /// Any delivery windows from a previous set are dropped.
    pub fn generate<R: Rng>(&mut self, rng: &mut R) -> Result<&[Point]> {
        let points = generate_locations(self.config.count, &self.config.bounds, rng)?;
        info!(
            "{} locations generated within lat [{}, {}] lon [{}, {}]",
            points.len(),
            self.config.bounds.min_lat,
            self.config.bounds.max_lat,
            self.config.bounds.min_lon,
            self.config.bounds.max_lon
        );
        self.set_locations(points);
        Ok(&self.locations)
    }

    /// Replaces the location set with user-supplied points.
    pub fn set_locations(&mut self, points: Vec<Point>) {
        self.locations = points;
        self.windows = None;
    }

    /// Attaches one delivery window per location for the constraint check.
    pub fn set_windows(&mut self, windows: Vec<DeliveryWindow>) -> Result<()> {
        if windows.len() != self.locations.len() {
            return Err(Error::invalid_input(format!(
                "expected {} delivery windows, got {}",
                self.locations.len(),
                windows.len()
            )));
        }
        self.windows = Some(windows);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.locations.clear();
        self.windows = None;
    }

    /// Builds, evaluates and reports a nearest-neighbor route over the
    /// current locations.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyLocations`] when no locations have been loaded.
    pub fn optimize(&self) -> Result<RouteReport> {
        if self.locations.is_empty() {
            return Err(Error::EmptyLocations);
        }

        let (route, elapsed) = build_route(&self.locations)?;
        let evaluator = RouteEvaluator::new(&self.locations, self.config.speed_kmh)?;
        let metrics = evaluator.evaluate(&route, elapsed, self.windows.as_deref())?;
        info!(
            "route over {} locations: {:.2} km in {:.3}s",
            self.locations.len(),
            metrics.total_distance_km,
            elapsed.as_secs_f64()
        );

        RouteReport::new(&route, &self.locations, &metrics, self.config.unit)
    }
}
