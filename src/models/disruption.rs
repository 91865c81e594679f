//! Disruptions: transient zones that inflate travel cost.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Coordinates;

/// Cause of a disruption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisruptionKind {
    Traffic,
    Weather,
    RoadClosure,
}

/// How strongly a disruption affects travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Radius of the affected zone for a disruption of this severity.
    pub fn radius(self) -> f64 {
        match self {
            Severity::Low => 30.0,
            Severity::Medium => 50.0,
            Severity::High => 80.0,
        }
    }

    /// Cost multiplier applied inside the zone.
    pub fn impact(self) -> f64 {
        match self {
            Severity::Low => 1.3,
            Severity::Medium => 1.8,
            Severity::High => 2.5,
        }
    }
}

/// Unit in which a disruption's `duration` is interpreted when scheduling
/// its expiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Minutes,
    Seconds,
}

impl DurationUnit {
    /// Converts a raw duration value into wall time.
    pub fn to_duration(self, value: u32) -> Duration {
        match self {
            DurationUnit::Minutes => Duration::from_secs(u64::from(value) * 60),
            DurationUnit::Seconds => Duration::from_secs(u64::from(value)),
        }
    }
}

/// A circular zone of increased travel cost with a limited lifetime.
///
/// # Examples
///
/// ```
/// use smart_route::models::{Coordinates, Disruption, DisruptionKind, Severity};
///
/// let d = Disruption::with_severity(
///     "d-1", DisruptionKind::Weather, Severity::High, 200.0, 300.0, 45,
/// );
/// assert_eq!(d.radius(), 80.0);
/// assert_eq!(d.impact(), 2.5);
/// assert!(d.covers(&Coordinates::new(250.0, 300.0)));
/// assert!(!d.covers(&Coordinates::new(281.0, 300.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Disruption {
    id: String,
    #[serde(rename = "type")]
    kind: DisruptionKind,
    severity: Severity,
    location: Coordinates,
    radius: f64,
    duration: u32,
    impact: f64,
}

impl Disruption {
    /// Creates a disruption with an explicit radius and impact.
    pub fn new(
        id: impl Into<String>,
        kind: DisruptionKind,
        severity: Severity,
        location: Coordinates,
        radius: f64,
        impact: f64,
        duration: u32,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            severity,
            location,
            radius,
            duration,
            impact,
        }
    }

    /// Creates a disruption whose radius and impact follow its severity.
    pub fn with_severity(
        id: impl Into<String>,
        kind: DisruptionKind,
        severity: Severity,
        x: f64,
        y: f64,
        duration: u32,
    ) -> Self {
        Self::new(
            id,
            kind,
            severity,
            Coordinates::new(x, y),
            severity.radius(),
            severity.impact(),
            duration,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> DisruptionKind {
        self.kind
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn location(&self) -> Coordinates {
        self.location
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Lifetime in minutes, as entered.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn impact(&self) -> f64 {
        self.impact
    }

    /// Returns `true` if `at` lies inside the zone (boundary inclusive).
    pub fn covers(&self, at: &Coordinates) -> bool {
        at.distance_to(&self.location) <= self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_presets() {
        assert_eq!(Severity::Low.radius(), 30.0);
        assert_eq!(Severity::Medium.radius(), 50.0);
        assert_eq!(Severity::Medium.impact(), 1.8);
        assert_eq!(Severity::Low.impact(), 1.3);
    }

    #[test]
    fn test_covers_boundary() {
        let d = Disruption::new(
            "d",
            DisruptionKind::Traffic,
            Severity::Medium,
            Coordinates::new(0.0, 0.0),
            50.0,
            2.0,
            60,
        );
        assert!(d.covers(&Coordinates::new(30.0, 40.0)));
        assert!(!d.covers(&Coordinates::new(30.0, 40.1)));
    }

    #[test]
    fn test_duration_unit() {
        assert_eq!(DurationUnit::Minutes.to_duration(2), Duration::from_secs(120));
        assert_eq!(DurationUnit::Seconds.to_duration(2), Duration::from_secs(2));
        assert_eq!(DurationUnit::default(), DurationUnit::Minutes);
    }

    #[test]
    fn test_disruption_json_shape() {
        let kind = DisruptionKind::RoadClosure;
        let d = Disruption::with_severity("d", kind, Severity::Low, 1.0, 2.0, 60);
        let json = serde_json::to_value(&d).expect("serializable");
        assert_eq!(json["type"], "road_closure");
        assert_eq!(json["severity"], "low");
        assert_eq!(json["radius"], 30.0);
    }
}
