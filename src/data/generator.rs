//! Seed data and user-created entities.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use crate::models::{
    Coordinates, DeliveryPoint, Disruption, DisruptionKind, Priority, Severity, Vehicle,
};

const SAMPLE_ADDRESSES: [&str; 8] = [
    "Downtown Business Center",
    "Riverside Shopping Mall",
    "Tech Campus North",
    "Industrial District",
    "Suburban Plaza",
    "Airport Commerce Hub",
    "University District",
    "Medical Center Complex",
];

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// The three-vehicle demo fleet, idle with empty routes.
pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new("vehicle-1", "Truck Alpha", 50)
            .with_position(100.0, 100.0)
            .with_color("#3B82F6"),
        Vehicle::new("vehicle-2", "Van Beta", 30)
            .with_position(150.0, 150.0)
            .with_color("#10B981"),
        Vehicle::new("vehicle-3", "Truck Gamma", 45)
            .with_position(200.0, 120.0)
            .with_color("#F59E0B"),
    ]
}

/// Eight demo points laid out on a jittered 3-column grid.
///
/// Priorities cycle low, medium, high; service estimates are 10–29 minutes.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use smart_route::data::sample_points;
///
/// let points = sample_points(&mut StdRng::seed_from_u64(3));
/// assert_eq!(points.len(), 8);
/// assert_eq!(points[0].id(), "point-1");
/// assert_eq!(points[7].address(), "Medical Center Complex");
/// ```
pub fn sample_points<R: Rng>(rng: &mut R) -> Vec<DeliveryPoint> {
    let priorities = [Priority::Low, Priority::Medium, Priority::High];

    SAMPLE_ADDRESSES
        .iter()
        .enumerate()
        .map(|(index, address)| {
            let x = 150.0 + (index % 3) as f64 * 200.0 + rng.random_range(0.0..100.0);
            let y = 150.0 + (index / 3) as f64 * 150.0 + rng.random_range(0.0..80.0);
            DeliveryPoint::new(format!("point-{}", index + 1), *address, x, y)
                .with_priority(priorities[index % 3])
                .with_estimated_duration(f64::from(10 + rng.random_range(0u32..20)))
        })
        .collect()
}

/// The fixed five-point set offered by the bulk-import button.
pub fn bulk_import_sample() -> Vec<DeliveryPoint> {
    vec![
        DeliveryPoint::new("sample-1", "123 Commerce St, Downtown", 200.0, 150.0)
            .with_priority(Priority::High)
            .with_estimated_duration(20.0),
        DeliveryPoint::new("sample-2", "456 Business Ave, Midtown", 400.0, 300.0)
            .with_priority(Priority::Medium)
            .with_estimated_duration(15.0),
        DeliveryPoint::new("sample-3", "789 Industrial Blvd, Suburbs", 600.0, 450.0)
            .with_priority(Priority::Low)
            .with_estimated_duration(10.0),
        DeliveryPoint::new("sample-4", "321 Tech Park Dr, North", 300.0, 100.0)
            .with_priority(Priority::High)
            .with_estimated_duration(25.0),
        DeliveryPoint::new("sample-5", "654 Retail Plaza, East", 500.0, 200.0)
            .with_priority(Priority::Medium)
            .with_estimated_duration(18.0),
    ]
}

/// A random position inside the map's usable area, `[50, 750) × [50, 550)`.
pub fn random_location<R: Rng>(rng: &mut R) -> Coordinates {
    Coordinates::new(
        rng.random_range(0.0..700.0) + 50.0,
        rng.random_range(0.0..500.0) + 50.0,
    )
}

/// Generates an id of the form `<prefix>-<unix millis>-<9 base-36 chars>`.
pub fn generate_id<R: Rng>(prefix: &str, rng: &mut R) -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let suffix: String = (0..9)
        .map(|_| ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("{prefix}-{millis}-{suffix}")
}

/// Creates a point from the add-point form at a random location.
///
/// Returns `None` when the address is blank.
pub fn new_point<R: Rng>(
    address: &str,
    priority: Priority,
    estimated_duration: f64,
    rng: &mut R,
) -> Option<DeliveryPoint> {
    let address = address.trim();
    if address.is_empty() {
        return None;
    }
    let at = random_location(rng);
    Some(
        DeliveryPoint::new(generate_id("point", rng), address, at.x, at.y)
            .with_priority(priority)
            .with_estimated_duration(estimated_duration),
    )
}

/// Creates a medium-priority, 15-minute point at a clicked map location.
pub fn point_at<R: Rng>(at: Coordinates, rng: &mut R) -> DeliveryPoint {
    let address = format!("Custom Location ({}, {})", at.x.round(), at.y.round());
    DeliveryPoint::new(generate_id("point", rng), address, at.x, at.y)
}

/// Creates a disruption at a random location; radius and impact follow the
/// severity.
pub fn new_disruption<R: Rng>(
    kind: DisruptionKind,
    severity: Severity,
    duration: u32,
    rng: &mut R,
) -> Disruption {
    let at = random_location(rng);
    Disruption::with_severity(
        generate_id("disruption", rng),
        kind,
        severity,
        at.x,
        at.y,
        duration,
    )
}
