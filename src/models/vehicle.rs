//! Vehicle type with status, position, and assigned route.

use serde::{Deserialize, Serialize};

use super::{Coordinates, DeliveryPoint};

/// What a vehicle is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    #[default]
    Idle,
    Delivering,
    Returning,
}

/// A vehicle of the delivery fleet.
///
/// The route is replaced wholesale after every optimization run; see
/// [`Vehicle::assign_route`].
///
/// # Examples
///
/// ```
/// use smart_route::models::{Vehicle, VehicleStatus};
///
/// let v = Vehicle::new("vehicle-1", "Truck Alpha", 50)
///     .with_position(100.0, 100.0)
///     .with_color("#3B82F6");
/// assert_eq!(v.capacity(), 50);
/// assert_eq!(v.status(), VehicleStatus::Idle);
/// assert!(v.route().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    id: String,
    name: String,
    capacity: u32,
    current_load: u32,
    status: VehicleStatus,
    position: Coordinates,
    route: Vec<DeliveryPoint>,
    color: String,
}

impl Vehicle {
    /// Creates an idle, empty vehicle at the origin.
    pub fn new(id: impl Into<String>, name: impl Into<String>, capacity: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            current_load: 0,
            status: VehicleStatus::Idle,
            position: Coordinates::default(),
            route: Vec::new(),
            color: String::new(),
        }
    }

    /// Sets the map position.
    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Coordinates::new(x, y);
        self
    }

    /// Sets the display color (CSS hex string).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn current_load(&self) -> u32 {
        self.current_load
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn position(&self) -> Coordinates {
        self.position
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    /// Points assigned by the last optimization run, in visiting order.
    pub fn route(&self) -> &[DeliveryPoint] {
        &self.route
    }

    /// Total estimated service time of the assigned route, in minutes.
    pub fn service_minutes(&self) -> f64 {
        self.route.iter().map(|p| p.estimated_duration()).sum()
    }

    /// Returns a copy of this vehicle dispatched on the given route.
    ///
    /// The simulated load is five units per stop.
    pub fn assign_route(&self, points: Vec<DeliveryPoint>) -> Self {
        Self {
            current_load: points.len() as u32 * 5,
            status: VehicleStatus::Delivering,
            route: points,
            ..self.clone()
        }
    }
}
