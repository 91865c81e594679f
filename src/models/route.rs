//! Route type.

use serde::{Deserialize, Serialize};

use super::DeliveryPoint;

/// An ordered sequence of delivery points assigned to one vehicle, plus its
/// derived cost figures.
///
/// Routes are transient: every optimization run builds a fresh set through
/// [`RouteEvaluator`](crate::evaluation::RouteEvaluator).
///
/// # Examples
///
/// ```
/// use smart_route::models::{DeliveryPoint, Route};
///
/// let route = Route::new("vehicle-1", vec![DeliveryPoint::new("a", "", 0.0, 0.0)]);
/// assert_eq!(route.len(), 1);
/// assert_eq!(route.total_distance(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    vehicle_id: String,
    points: Vec<DeliveryPoint>,
    total_distance: f64,
    estimated_time: f64,
    fuel_cost: f64,
}

impl Route {
    /// Creates a route with zeroed cost figures.
    pub fn new(vehicle_id: impl Into<String>, points: Vec<DeliveryPoint>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            points,
            total_distance: 0.0,
            estimated_time: 0.0,
            fuel_cost: 0.0,
        }
    }

    pub fn vehicle_id(&self) -> &str {
        &self.vehicle_id
    }

    /// Points in visiting order.
    pub fn points(&self) -> &[DeliveryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point IDs in visiting order.
    pub fn point_ids(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.id()).collect()
    }

    /// Disruption-adjusted distance (set by evaluator).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Estimated driving time in minutes (set by evaluator).
    pub fn estimated_time(&self) -> f64 {
        self.estimated_time
    }

    /// Fuel cost (set by evaluator).
    pub fn fuel_cost(&self) -> f64 {
        self.fuel_cost
    }

    /// Sets the total distance (used by evaluator).
    pub fn set_total_distance(&mut self, d: f64) {
        self.total_distance = d;
    }

    /// Sets the estimated time (used by evaluator).
    pub fn set_estimated_time(&mut self, t: f64) {
        self.estimated_time = t;
    }

    /// Sets the fuel cost (used by evaluator).
    pub fn set_fuel_cost(&mut self, c: f64) {
        self.fuel_cost = c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_empty() {
        let r = Route::new("v", Vec::new());
        assert!(r.is_empty());
        assert_eq!(r.vehicle_id(), "v");
        assert_eq!(r.estimated_time(), 0.0);
        assert_eq!(r.fuel_cost(), 0.0);
    }

    #[test]
    fn test_route_point_ids() {
        let r = Route::new(
            "v",
            vec![
                DeliveryPoint::new("b", "", 0.0, 0.0),
                DeliveryPoint::new("a", "", 1.0, 0.0),
            ],
        );
        assert_eq!(r.point_ids(), vec!["b", "a"]);
    }

    #[test]
    fn test_route_setters() {
        let mut r = Route::new("v", Vec::new());
        r.set_total_distance(10.0);
        r.set_estimated_time(25.0);
        r.set_fuel_cost(1.5);
        assert_eq!(r.total_distance(), 10.0);
        assert_eq!(r.estimated_time(), 25.0);
        assert_eq!(r.fuel_cost(), 1.5);
        let json = serde_json::to_value(&r).expect("serializable");
        assert_eq!(json["vehicleId"], "v");
        assert_eq!(json["totalDistance"], 10.0);
    }
}
