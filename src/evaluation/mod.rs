//! Route pricing and metric aggregation.
//!
//! - [`RouteEvaluator`] — Disruption-aware distance, time, and fuel per route
//! - [`aggregate`] — Sums routes into [`OptimizationMetrics`](crate::models::OptimizationMetrics)

mod evaluator;
mod metrics;

pub use evaluator::{CostRates, RouteEvaluator};
pub use metrics::aggregate;
