//! Delivery point, coordinate, and priority types.

use serde::{Deserialize, Serialize};

/// A position on the dashboard map.
///
/// # Examples
///
/// ```
/// use smart_route::models::Coordinates;
///
/// let a = Coordinates::new(0.0, 0.0);
/// let b = Coordinates::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

impl Coordinates {
    /// Creates a coordinate pair.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Delivery priority. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Numeric weight used when ranking points (high = 3, medium = 2, low = 1).
    pub fn weight(self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

/// Requested delivery window, kept as the clock strings the operator entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: String,
    pub end: String,
}

impl TimeWindow {
    /// Creates a window from two clock strings such as `"09:00"`.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

/// A stop that has to be served by some vehicle.
///
/// Points are immutable once created; the session only ever adds or removes
/// them.
///
/// # Examples
///
/// ```
/// use smart_route::models::{DeliveryPoint, Priority};
///
/// let p = DeliveryPoint::new("p-1", "Riverside Shopping Mall", 10.0, 20.0)
///     .with_priority(Priority::High)
///     .with_estimated_duration(25.0);
/// assert_eq!(p.id(), "p-1");
/// assert_eq!(p.priority(), Priority::High);
/// assert_eq!(p.estimated_duration(), 25.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryPoint {
    id: String,
    address: String,
    coordinates: Coordinates,
    priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_window: Option<TimeWindow>,
    estimated_duration: f64,
}

impl DeliveryPoint {
    /// Creates a point with medium priority, no time window, and a
    /// 15-minute service estimate.
    pub fn new(id: impl Into<String>, address: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            coordinates: Coordinates::new(x, y),
            priority: Priority::Medium,
            time_window: None,
            estimated_duration: 15.0,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the delivery window.
    pub fn with_time_window(mut self, window: TimeWindow) -> Self {
        self.time_window = Some(window);
        self
    }

    /// Sets the estimated service duration in minutes. Fractions are kept.
    pub fn with_estimated_duration(mut self, minutes: f64) -> Self {
        self.estimated_duration = minutes;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn time_window(&self) -> Option<&TimeWindow> {
        self.time_window.as_ref()
    }

    /// Estimated service duration in minutes.
    pub fn estimated_duration(&self) -> f64 {
        self.estimated_duration
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &DeliveryPoint) -> f64 {
        self.coordinates.distance_to(&other.coordinates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::High.weight(), 3);
        assert_eq!(Priority::Low.weight(), 1);
    }

    #[test]
    fn test_point_defaults() {
        let p = DeliveryPoint::new("a", "Somewhere", 1.0, 2.0);
        assert_eq!(p.priority(), Priority::Medium);
        assert_eq!(p.estimated_duration(), 15.0);
        assert!(p.time_window().is_none());
        assert_eq!(p.coordinates(), Coordinates::new(1.0, 2.0));
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = DeliveryPoint::new("a", "", 1.0, 2.0);
        let b = DeliveryPoint::new("b", "", 4.0, 6.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-10);
    }

    #[test]
    fn test_point_json_shape() {
        let p = DeliveryPoint::new("sample-1", "123 Commerce St, Downtown", 200.0, 150.0)
            .with_priority(Priority::High)
            .with_estimated_duration(20.0);
        let json = serde_json::to_value(&p).expect("serializable");
        assert_eq!(json["coordinates"]["x"], 200.0);
        assert_eq!(json["priority"], "high");
        assert_eq!(json["estimatedDuration"], 20.0);
        assert!(json.get("timeWindow").is_none());
    }

    #[test]
    fn test_point_with_time_window() {
        let p = DeliveryPoint::new("a", "", 0.0, 0.0)
            .with_time_window(TimeWindow::new("09:00", "11:30"));
        let json = serde_json::to_value(&p).expect("serializable");
        assert_eq!(json["timeWindow"]["start"], "09:00");
        assert_eq!(json["timeWindow"]["end"], "11:30");
    }
}
