//! Nearest-neighbor ordering heuristic.
//!
//! Orders a vehicle's stops greedily: starting from the first stop, always
//! visit the nearest stop not yet visited.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.

use crate::models::DeliveryPoint;

/// Reorders points by the nearest-neighbor heuristic.
///
/// The first point stays first. Each following point is the remaining point
/// closest to the previously appended one; ties go to the point that came
/// earliest among those remaining. The result is always a permutation of the
/// input, and 0 or 1 points are returned unchanged.
///
/// # Examples
///
/// ```
/// use smart_route::constructive::nearest_neighbor_order;
/// use smart_route::models::DeliveryPoint;
///
/// let points = vec![
///     DeliveryPoint::new("start", "", 0.0, 0.0),
///     DeliveryPoint::new("far", "", 10.0, 0.0),
///     DeliveryPoint::new("near", "", 1.0, 0.0),
/// ];
/// let ordered = nearest_neighbor_order(&points);
/// let ids: Vec<_> = ordered.iter().map(|p| p.id()).collect();
/// assert_eq!(ids, vec!["start", "near", "far"]);
/// ```
pub fn nearest_neighbor_order(points: &[DeliveryPoint]) -> Vec<DeliveryPoint> {
    if points.len() <= 1 {
        return points.to_vec();
    }

    let mut ordered = Vec::with_capacity(points.len());
    ordered.push(points[0].clone());
    let mut remaining: Vec<&DeliveryPoint> = points[1..].iter().collect();

    while !remaining.is_empty() {
        let current = ordered[ordered.len() - 1].coordinates();

        let mut nearest = 0;
        let mut nearest_distance = current.distance_to(&remaining[0].coordinates());
        for (i, candidate) in remaining.iter().enumerate().skip(1) {
            let d = current.distance_to(&candidate.coordinates());
            if d < nearest_distance {
                nearest_distance = d;
                nearest = i;
            }
        }

        ordered.push(remaining.remove(nearest).clone());
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn ids(points: &[DeliveryPoint]) -> Vec<&str> {
        points.iter().map(|p| p.id()).collect()
    }

    #[test]
    fn test_nn_identity_for_small_inputs() {
        assert!(nearest_neighbor_order(&[]).is_empty());
        let one = vec![DeliveryPoint::new("a", "", 3.0, 3.0)];
        assert_eq!(nearest_neighbor_order(&one), one);
    }

    #[test]
    fn test_nn_keeps_first_point() {
        let points = vec![
            DeliveryPoint::new("c", "", 3.0, 0.0),
            DeliveryPoint::new("a", "", 1.0, 0.0),
            DeliveryPoint::new("b", "", 2.0, 0.0),
        ];
        assert_eq!(ids(&nearest_neighbor_order(&points)), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_nn_tie_goes_to_earliest() {
        let points = vec![
            DeliveryPoint::new("o", "", 0.0, 0.0),
            DeliveryPoint::new("left", "", -1.0, 0.0),
            DeliveryPoint::new("right", "", 1.0, 0.0),
        ];
        assert_eq!(
            ids(&nearest_neighbor_order(&points)),
            vec!["o", "left", "right"]
        );
    }

    #[test]
    fn test_nn_duplicate_positions_kept() {
        let points = vec![
            DeliveryPoint::new("a", "", 0.0, 0.0),
            DeliveryPoint::new("b", "", 5.0, 5.0),
            DeliveryPoint::new("c", "", 5.0, 5.0),
        ];
        assert_eq!(ids(&nearest_neighbor_order(&points)), vec!["a", "b", "c"]);
    }

    proptest! {
        #[test]
        fn prop_nn_is_permutation(
            coords in prop::collection::vec((0.0..800.0f64, 0.0..600.0f64), 0..40)
        ) {
            let points: Vec<DeliveryPoint> = coords
                .iter()
                .enumerate()
                .map(|(i, &(x, y))| DeliveryPoint::new(format!("p{i}"), "", x, y))
                .collect();
            let ordered = nearest_neighbor_order(&points);
            prop_assert_eq!(ordered.len(), points.len());
            if let Some(first) = points.first() {
                prop_assert_eq!(ordered[0].id(), first.id());
            }
            let mut got: Vec<String> = ordered.iter().map(|p| p.id().to_string()).collect();
            let mut want: Vec<String> = points.iter().map(|p| p.id().to_string()).collect();
            got.sort();
            want.sort();
            prop_assert_eq!(got, want);
        }
    }
}
