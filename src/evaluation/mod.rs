//! Route evaluation: distance, travel time and delivery-window checks.

mod evaluator;

pub use evaluator::{
    estimated_travel_time, fits_delivery_windows, total_distance, RouteEvaluator, RouteMetrics,
    DEFAULT_SPEED_KMH,
};
