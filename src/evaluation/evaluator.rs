//! Route evaluator that prices an ordered point sequence.

use crate::distance::segment_cost;
use crate::models::{DeliveryPoint, Disruption, Route};

/// Per-distance rates used to derive time and fuel from route distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRates {
    /// Minutes per distance unit.
    pub time_per_distance: f64,
    /// Fuel cost per distance unit.
    pub fuel_per_distance: f64,
}

impl CostRates {
    pub const fn new(time_per_distance: f64, fuel_per_distance: f64) -> Self {
        Self {
            time_per_distance,
            fuel_per_distance,
        }
    }
}

/// Builds priced routes: distance from [`segment_cost`] under the active
/// disruptions, time and fuel as fixed multiples of that distance.
///
/// # Examples
///
/// ```
/// use smart_route::evaluation::{CostRates, RouteEvaluator};
/// use smart_route::models::DeliveryPoint;
///
/// let evaluator = RouteEvaluator::new(&[], CostRates::new(2.5, 0.15));
/// let route = evaluator.build_route(
///     "vehicle-1",
///     vec![
///         DeliveryPoint::new("a", "", 0.0, 0.0),
///         DeliveryPoint::new("b", "", 3.0, 4.0),
///     ],
/// );
/// assert!((route.total_distance() - 5.0).abs() < 1e-10);
/// assert!((route.estimated_time() - 12.5).abs() < 1e-10);
/// assert!((route.fuel_cost() - 0.75).abs() < 1e-10);
/// ```
pub struct RouteEvaluator<'a> {
    disruptions: &'a [Disruption],
    rates: CostRates,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given disruptions and rates.
    pub fn new(disruptions: &'a [Disruption], rates: CostRates) -> Self {
        Self { disruptions, rates }
    }

    /// Disruption-adjusted distance of visiting `points` in order.
    pub fn distance(&self, points: &[DeliveryPoint]) -> f64 {
        segment_cost(points, self.disruptions)
    }

    /// Builds a priced route for a vehicle from points in visiting order.
    pub fn build_route(&self, vehicle_id: &str, points: Vec<DeliveryPoint>) -> Route {
        let distance = self.distance(&points);
        let mut route = Route::new(vehicle_id, points);
        route.set_total_distance(distance);
        route.set_estimated_time(distance * self.rates.time_per_distance);
        route.set_fuel_cost(distance * self.rates.fuel_per_distance);
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, DisruptionKind, Severity};

    fn square() -> Vec<DeliveryPoint> {
        vec![
            DeliveryPoint::new("a", "", 0.0, 0.0),
            DeliveryPoint::new("b", "", 10.0, 0.0),
            DeliveryPoint::new("c", "", 10.0, 10.0),
        ]
    }

    #[test]
    fn test_build_route_empty() {
        let eval = RouteEvaluator::new(&[], CostRates::new(2.0, 0.12));
        let route = eval.build_route("v", Vec::new());
        assert!(route.is_empty());
        assert_eq!(route.total_distance(), 0.0);
        assert_eq!(route.estimated_time(), 0.0);
        assert_eq!(route.fuel_cost(), 0.0);
    }

    #[test]
    fn test_build_route_single() {
        let eval = RouteEvaluator::new(&[], CostRates::new(2.0, 0.12));
        let route = eval.build_route("v", vec![DeliveryPoint::new("a", "", 1.0, 1.0)]);
        assert_eq!(route.len(), 1);
        assert_eq!(route.total_distance(), 0.0);
    }

    #[test]
    fn test_build_route_keeps_order() {
        let eval = RouteEvaluator::new(&[], CostRates::new(1.8, 0.11));
        let route = eval.build_route("v", square());
        assert_eq!(route.point_ids(), vec!["a", "b", "c"]);
        assert!((route.total_distance() - 20.0).abs() < 1e-10);
        assert!((route.estimated_time() - 36.0).abs() < 1e-10);
        assert!((route.fuel_cost() - 2.2).abs() < 1e-10);
    }

    #[test]
    fn test_build_route_with_disruption() {
        let zone = vec![Disruption::new(
            "d",
            DisruptionKind::Weather,
            Severity::High,
            Coordinates::new(10.0, 0.0),
            1.0,
            3.0,
            30,
        )];
        let eval = RouteEvaluator::new(&zone, CostRates::new(1.0, 1.0));
        let route = eval.build_route("v", square());
        // b→c starts in the zone
        assert!((route.total_distance() - 40.0).abs() < 1e-10);
        assert!((route.fuel_cost() - 40.0).abs() < 1e-10);
    }
}
