//! Euclidean distance and disruption-adjusted path cost.

use crate::models::{Coordinates, DeliveryPoint, Disruption};

/// Euclidean distance between two positions.
///
/// # Examples
///
/// ```
/// use smart_route::distance::distance;
/// use smart_route::models::Coordinates;
///
/// let d = distance(&Coordinates::new(1.0, 1.0), &Coordinates::new(4.0, 5.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn distance(a: &Coordinates, b: &Coordinates) -> f64 {
    a.distance_to(b)
}

/// Total cost of visiting `points` in order, inflated by disruptions.
///
/// Each segment `i → i+1` costs its Euclidean length, multiplied by the
/// impact of every disruption whose zone covers the segment's start point.
/// Overlapping disruptions compound, applied in list order. Fewer than two
/// points cost nothing.
///
/// # Examples
///
/// ```
/// use smart_route::distance::segment_cost;
/// use smart_route::models::{Coordinates, DeliveryPoint, Disruption, DisruptionKind, Severity};
///
/// let points = vec![
///     DeliveryPoint::new("a", "", 0.0, 0.0),
///     DeliveryPoint::new("b", "", 3.0, 4.0),
///     DeliveryPoint::new("c", "", 3.0, 10.0),
/// ];
/// assert!((segment_cost(&points, &[]) - 11.0).abs() < 1e-10);
///
/// let jam = Disruption::new(
///     "d", DisruptionKind::Traffic, Severity::Medium,
///     Coordinates::new(0.0, 0.0), 1.0, 2.0, 60,
/// );
/// // only the first segment starts inside the zone
/// assert!((segment_cost(&points, &[jam]) - 16.0).abs() < 1e-10);
/// ```
pub fn segment_cost(points: &[DeliveryPoint], disruptions: &[Disruption]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|pair| {
            let start = pair[0].coordinates();
            let mut d = distance(&start, &pair[1].coordinates());
            for disruption in disruptions {
                if disruption.covers(&start) {
                    d *= disruption.impact();
                }
            }
            d
        })
        .sum()
}
