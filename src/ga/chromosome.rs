//! Random partition chromosome for the genetic variant.
//!
//! A partition is built by shuffling every point and dealing the shuffled
//! sequence to vehicles round-robin. Its fitness is `1 / (1 + d)` where `d`
//! is the summed disruption-adjusted distance of all buckets, so shorter
//! partitions score higher.

use rand::Rng;

use crate::constructive::round_robin;
use crate::distance::segment_cost;
use crate::models::{DeliveryPoint, Disruption};

/// One candidate assignment of points to vehicles, with its cached score.
///
/// # Examples
///
/// ```
/// use smart_route::ga::Partition;
/// use smart_route::models::DeliveryPoint;
///
/// let buckets = vec![vec![
///     DeliveryPoint::new("a", "", 0.0, 0.0),
///     DeliveryPoint::new("b", "", 3.0, 4.0),
/// ]];
/// let partition = Partition::new(buckets, &[]);
/// assert!((partition.total_distance() - 5.0).abs() < 1e-10);
/// assert!((partition.fitness() - 1.0 / 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Partition {
    buckets: Vec<Vec<DeliveryPoint>>,
    total_distance: f64,
    fitness: f64,
}

impl Partition {
    /// Scores an explicit assignment (one bucket per vehicle).
    pub fn new(buckets: Vec<Vec<DeliveryPoint>>, disruptions: &[Disruption]) -> Self {
        let total_distance: f64 = buckets.iter().map(|b| segment_cost(b, disruptions)).sum();
        Self {
            buckets,
            total_distance,
            fitness: 1.0 / (1.0 + total_distance),
        }
    }

    /// Shuffles all points and deals them round-robin to `num_vehicles`.
    pub fn random<R: Rng>(
        points: &[DeliveryPoint],
        num_vehicles: usize,
        disruptions: &[Disruption],
        rng: &mut R,
    ) -> Self {
        let mut shuffled = points.to_vec();

        // Fisher-Yates shuffle
        for i in (1..shuffled.len()).rev() {
            let j = rng.random_range(0..=i);
            shuffled.swap(i, j);
        }

        Self::new(round_robin(&shuffled, num_vehicles), disruptions)
    }

    /// Per-vehicle point sequences, in vehicle order.
    pub fn buckets(&self) -> &[Vec<DeliveryPoint>] {
        &self.buckets
    }

    /// Consumes the partition, returning its buckets.
    pub fn into_buckets(self) -> Vec<Vec<DeliveryPoint>> {
        self.buckets
    }

    /// Summed disruption-adjusted distance of all buckets.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// `1 / (1 + total_distance)`. Higher is better.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }
}
