//! Distance and path cost.
//!
//! Provides the Euclidean metric and the disruption-adjusted cost of an
//! ordered sequence of points.

mod cost;

pub use cost::{distance, segment_cost};
