//! Assignment of delivery points to vehicles.
//!
//! Every function here returns one bucket per vehicle, in vehicle order, and
//! every input point lands in exactly one bucket.

use crate::models::DeliveryPoint;

/// Number of points each vehicle receives under a contiguous split.
fn chunk_size(num_points: usize, num_vehicles: usize) -> usize {
    num_points.div_ceil(num_vehicles)
}

/// Splits points into contiguous chunks of `⌈n/v⌉`, first vehicle first.
///
/// Trailing vehicles receive empty buckets when the chunks run out.
///
/// # Examples
///
/// ```
/// use smart_route::constructive::contiguous_split;
/// use smart_route::models::DeliveryPoint;
///
/// let points: Vec<_> = (0..5)
///     .map(|i| DeliveryPoint::new(format!("p{i}"), "", i as f64, 0.0))
///     .collect();
/// let buckets = contiguous_split(&points, 2);
/// assert_eq!(buckets[0].len(), 3);
/// assert_eq!(buckets[1].len(), 2);
/// ```
pub fn contiguous_split(
    points: &[DeliveryPoint],
    num_vehicles: usize,
) -> Vec<Vec<DeliveryPoint>> {
    if num_vehicles == 0 {
        return Vec::new();
    }
    let mut buckets = vec![Vec::new(); num_vehicles];
    if points.is_empty() {
        return buckets;
    }

    let chunk = chunk_size(points.len(), num_vehicles);
    for (bucket, slice) in buckets.iter_mut().zip(points.chunks(chunk)) {
        bucket.extend_from_slice(slice);
    }
    buckets
}

/// Returns the contiguous block of points owned by vehicle `index`:
/// `[index·chunk, min((index+1)·chunk, n))`, or an empty slice past the end.
pub fn block_slice(
    points: &[DeliveryPoint],
    num_vehicles: usize,
    index: usize,
) -> &[DeliveryPoint] {
    if num_vehicles == 0 {
        return &[];
    }
    let chunk = chunk_size(points.len(), num_vehicles);
    let start = (index * chunk).min(points.len());
    let end = (start + chunk).min(points.len());
    &points[start..end]
}

/// Deals points to vehicles in turn: point `i` goes to vehicle `i mod v`.
///
/// # Examples
///
/// ```
/// use smart_route::constructive::round_robin;
/// use smart_route::models::DeliveryPoint;
///
/// let points: Vec<_> = (0..5)
///     .map(|i| DeliveryPoint::new(format!("p{i}"), "", 0.0, 0.0))
///     .collect();
/// let buckets = round_robin(&points, 2);
/// let ids: Vec<_> = buckets[1].iter().map(|p| p.id()).collect();
/// assert_eq!(ids, vec!["p1", "p3"]);
/// ```
pub fn round_robin(points: &[DeliveryPoint], num_vehicles: usize) -> Vec<Vec<DeliveryPoint>> {
    if num_vehicles == 0 {
        return Vec::new();
    }
    let mut buckets = vec![Vec::new(); num_vehicles];
    for (i, point) in points.iter().enumerate() {
        buckets[i % num_vehicles].push(point.clone());
    }
    buckets
}

/// Sorts points by priority weight, high first. Equal priorities keep their
/// order.
pub fn by_priority(points: &[DeliveryPoint]) -> Vec<DeliveryPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| std::cmp::Reverse(p.priority().weight()));
    sorted
}
