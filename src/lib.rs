//! # delivery-route
//!
//! Delivery route planning over geographic points: haversine distances,
//! nearest-neighbor tour construction, route metrics, and presentation-ready
//! reports.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Route, Bounds, DeliveryWindow)
//! - [`distance`] — Haversine metric and distance matrix
//! - [`constructive`] — Nearest-neighbor tour builder
//! - [`evaluation`] — Total distance, travel time, delivery-window check
//! - [`units`] — Kilometer/mile conversion
//! - [`generation`] — Random locations within a lat/lon rectangle
//! - [`input`] — Parsing user-supplied locations
//! - [`report`] — Route table, map path and metrics for display
//! - [`session`] — Caller-owned state across interactions
//! - [`config`] — Planner settings
//! - [`logging`] — stderr logger setup for binaries

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod generation;
pub mod input;
pub mod logging;
pub mod models;
pub mod report;
pub mod session;
pub mod units;

pub use error::{Error, Result};
