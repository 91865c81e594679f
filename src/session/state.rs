//! Dashboard state and its update function.

use serde::Serialize;

use crate::data::sample_vehicles;
use crate::models::{
    AlgorithmResult, DeliveryPoint, Disruption, OptimizationMetrics, Vehicle,
};

/// A state change requested by the user or by the expiry schedule.
#[derive(Debug, Clone)]
pub enum Action {
    AddPoint(DeliveryPoint),
    RemovePoint(String),
    /// Replaces every point.
    ImportPoints(Vec<DeliveryPoint>),
    AddDisruption(Disruption),
    RemoveDisruption(String),
    /// Fired by the expiry schedule. A no-op if the disruption is gone.
    ExpireDisruption(String),
    ApplyResult(AlgorithmResult),
    Reset,
}

/// Everything the dashboard displays.
///
/// States are values: [`DashboardState::apply`] consumes one and returns the
/// next, so no update can be observed half-done.
///
/// # Examples
///
/// ```
/// use smart_route::models::DeliveryPoint;
/// use smart_route::session::{Action, DashboardState};
///
/// let state = DashboardState::new()
///     .apply(Action::AddPoint(DeliveryPoint::new("a", "Pier 4", 10.0, 10.0)))
///     .apply(Action::AddPoint(DeliveryPoint::new("b", "Pier 5", 20.0, 10.0)))
///     .apply(Action::RemovePoint("a".into()));
/// assert_eq!(state.points().len(), 1);
/// assert_eq!(state.vehicles().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    points: Vec<DeliveryPoint>,
    vehicles: Vec<Vehicle>,
    disruptions: Vec<Disruption>,
    metrics: OptimizationMetrics,
    result: Option<AlgorithmResult>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// Initial state: the sample fleet, no points, no disruptions, zeroed
    /// metrics, no result.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            vehicles: sample_vehicles(),
            disruptions: Vec::new(),
            metrics: OptimizationMetrics::default(),
            result: None,
        }
    }

    /// Applies one action, returning the next state.
    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::AddPoint(point) => {
                let mut points = self.points;
                points.push(point);
                Self { points, ..self }
            }
            Action::RemovePoint(id) => Self {
                points: self.points.into_iter().filter(|p| p.id() != id).collect(),
                ..self
            },
            Action::ImportPoints(points) => Self { points, ..self },
            Action::AddDisruption(disruption) => {
                let mut disruptions = self.disruptions;
                disruptions.push(disruption);
                Self {
                    disruptions,
                    ..self
                }
            }
            Action::RemoveDisruption(id) | Action::ExpireDisruption(id) => Self {
                disruptions: self
                    .disruptions
                    .into_iter()
                    .filter(|d| d.id() != id)
                    .collect(),
                ..self
            },
            Action::ApplyResult(result) => Self {
                vehicles: dispatch(&self.vehicles, &result),
                metrics: result.metrics,
                result: Some(result),
                ..self
            },
            Action::Reset => Self::new(),
        }
    }

    pub fn points(&self) -> &[DeliveryPoint] {
        &self.points
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Active (not yet expired or removed) disruptions.
    pub fn disruptions(&self) -> &[Disruption] {
        &self.disruptions
    }

    pub fn metrics(&self) -> &OptimizationMetrics {
        &self.metrics
    }

    /// The latest optimization result, if any.
    pub fn result(&self) -> Option<&AlgorithmResult> {
        self.result.as_ref()
    }
}

/// Puts each vehicle on its route from `result`.
///
/// Vehicles without a route, or with an empty one, are returned unchanged.
pub fn dispatch(vehicles: &[Vehicle], result: &AlgorithmResult) -> Vec<Vehicle> {
    vehicles
        .iter()
        .map(|vehicle| match result.route_for(vehicle.id()) {
            Some(route) if !route.is_empty() => vehicle.assign_route(route.points().to_vec()),
            _ => vehicle.clone(),
        })
        .collect()
}
