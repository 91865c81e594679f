//! Aggregation of route figures into dashboard metrics.

use crate::models::{OptimizationMetrics, Route};

/// The simulated baseline is this much worse than the computed routes.
const BASELINE_FACTOR: f64 = 1.2;

/// Kilograms of CO2 per distance unit.
const CARBON_PER_DISTANCE: f64 = 0.21;

/// Sums route figures and compares them against the simulated baseline.
///
/// Every figure is rounded to the nearest integer; savings, carbon, and
/// efficiency are derived from the unrounded sums. Efficiency is 0 when the
/// baseline distance is 0.
///
/// # Examples
///
/// ```
/// use smart_route::evaluation::{aggregate, CostRates, RouteEvaluator};
/// use smart_route::models::DeliveryPoint;
///
/// let eval = RouteEvaluator::new(&[], CostRates::new(2.5, 0.15));
/// let route = eval.build_route(
///     "v",
///     vec![DeliveryPoint::new("a", "", 0.0, 0.0), DeliveryPoint::new("b", "", 100.0, 0.0)],
/// );
/// let metrics = aggregate(&[route]);
/// assert_eq!(metrics.total_distance, 100.0);
/// assert_eq!(metrics.carbon_reduction, 4.0);
/// assert_eq!(metrics.efficiency, 17.0);
/// ```
pub fn aggregate(routes: &[Route]) -> OptimizationMetrics {
    let total_distance: f64 = routes.iter().map(|r| r.total_distance()).sum();
    let total_time: f64 = routes.iter().map(|r| r.estimated_time()).sum();
    let total_fuel: f64 = routes.iter().map(|r| r.fuel_cost()).sum();

    let baseline_distance = total_distance * BASELINE_FACTOR;
    let baseline_fuel = total_fuel * BASELINE_FACTOR;

    let efficiency = if baseline_distance == 0.0 {
        0.0
    } else {
        ((baseline_distance - total_distance) / baseline_distance * 100.0).round()
    };

    OptimizationMetrics {
        total_distance: total_distance.round(),
        total_time: total_time.round(),
        fuel_savings: (baseline_fuel - total_fuel).round(),
        carbon_reduction: ((baseline_distance - total_distance) * CARBON_PER_DISTANCE).round(),
        efficiency,
    }
}
