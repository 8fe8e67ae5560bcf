//! Domain model types for delivery route planning.
//!
//! Points are plain lat/lon pairs identified by their index in a location
//! set; a route is a closed sequence of those indices starting at index 0.

mod bounds;
mod point;
mod route;
mod window;

pub use bounds::Bounds;
pub use point::Point;
pub use route::{Route, START};
pub use window::DeliveryWindow;
