//! Generational random search over partitions.
//!
//! Each generation samples a fresh population of random partitions; nothing
//! is inherited between generations. The best partition seen so far is kept,
//! and a later generation only replaces it on a strictly higher fitness.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DeliveryPoint, Disruption};

use super::chromosome::Partition;

/// Size of the genetic search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneticParams {
    /// Number of generations sampled.
    pub generations: usize,
    /// Random partitions per generation.
    pub population_size: usize,
}

impl Default for GeneticParams {
    fn default() -> Self {
        Self {
            generations: 50,
            population_size: 20,
        }
    }
}

impl GeneticParams {
    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the population size per generation.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }
}

/// Runs the search and returns the fittest partition found.
///
/// With zero generations or an empty population a single random partition is
/// returned.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use smart_route::ga::{evolve, GeneticParams};
/// use smart_route::models::DeliveryPoint;
///
/// let points: Vec<_> = (0..6)
///     .map(|i| DeliveryPoint::new(format!("p{i}"), "", i as f64, 0.0))
///     .collect();
/// let mut rng = StdRng::seed_from_u64(1);
/// let best = evolve(&points, 2, &[], &GeneticParams::default(), &mut rng);
/// assert_eq!(best.buckets().len(), 2);
/// assert_eq!(best.buckets().iter().map(|b| b.len()).sum::<usize>(), 6);
/// ```
pub fn evolve<R: Rng>(
    points: &[DeliveryPoint],
    num_vehicles: usize,
    disruptions: &[Disruption],
    params: &GeneticParams,
    rng: &mut R,
) -> Partition {
    let mut incumbent: Option<Partition> = None;

    for generation in 0..params.generations {
        let fittest = (0..params.population_size)
            .map(|_| Partition::random(points, num_vehicles, disruptions, rng))
            .reduce(|best, current| {
                if current.fitness() > best.fitness() {
                    current
                } else {
                    best
                }
            });

        let Some(fittest) = fittest else {
            break;
        };

        let improved = incumbent
            .as_ref()
            .map_or(true, |best| fittest.fitness() > best.fitness());
        if improved {
            debug!(
                generation,
                total_distance = fittest.total_distance(),
                "genetic search improved"
            );
            incumbent = Some(fittest);
        }
    }

    incumbent.unwrap_or_else(|| Partition::random(points, num_vehicles, disruptions, rng))
}
