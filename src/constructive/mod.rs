//! Constructive heuristics for building delivery tours.
//!
//! - [`build_route`] — Greedy nearest-neighbor closed tour, O(n²)

mod nearest_neighbor;

pub use nearest_neighbor::build_route;
