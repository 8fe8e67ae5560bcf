//! Distance computations over geographic points.
//!
//! Provides the haversine great-circle metric and a dense distance matrix
//! built on top of it.

mod haversine;
mod matrix;

pub use haversine::{haversine, EARTH_RADIUS_KM};
pub use matrix::DistanceMatrix;
