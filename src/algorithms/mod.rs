//! The four optimization variants offered by the dashboard.
//!
//! The names are labels, not the algorithms they suggest. Each variant is an
//! assignment heuristic followed by optional nearest-neighbor ordering, and
//! routes are priced with variant-specific time and fuel rates:
//!
//! | Variant | Assignment | Ordering | Time × | Fuel × |
//! |---|---|---|---|---|
//! | [`dijkstra`] | contiguous ⌈n/v⌉ split | none | 2.5 | 0.15 |
//! | [`astar`] | priority sort, round-robin | nearest-neighbor | 2.2 | 0.14 |
//! | [`genetic`] | fittest random partition | none | 2.0 | 0.12 |
//! | [`ml_adaptive`] | contiguous block slices | nearest-neighbor | 1.8 | 0.11 |
//!
//! Callers skip the run when there are no points or no vehicles; see
//! [`Session::optimize`](crate::session::Session::optimize).

mod variants;

use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::evaluation::{aggregate, CostRates};
use crate::ga::GeneticParams;
use crate::models::{Algorithm, AlgorithmResult, DeliveryPoint, Disruption, Vehicle};

pub use variants::{astar, dijkstra, genetic, ml_adaptive};

impl Algorithm {
    /// Time and fuel rates used to price this variant's routes.
    pub fn rates(self) -> CostRates {
        match self {
            Algorithm::Dijkstra => CostRates::new(2.5, 0.15),
            Algorithm::Astar => CostRates::new(2.2, 0.14),
            Algorithm::Genetic => CostRates::new(2.0, 0.12),
            Algorithm::MlAdaptive => CostRates::new(1.8, 0.11),
        }
    }
}

/// Runs one variant and packages its routes, metrics, and wall-clock time.
///
/// `rng` is only drawn from by [`Algorithm::Genetic`].
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use smart_route::algorithms::optimize;
/// use smart_route::ga::GeneticParams;
/// use smart_route::models::{Algorithm, DeliveryPoint, Vehicle};
///
/// let points = vec![
///     DeliveryPoint::new("a", "", 0.0, 0.0),
///     DeliveryPoint::new("b", "", 30.0, 40.0),
/// ];
/// let vehicles = vec![Vehicle::new("vehicle-1", "Truck Alpha", 50)];
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let result = optimize(
///     Algorithm::Dijkstra, &points, &vehicles, &[], &GeneticParams::default(), &mut rng,
/// );
/// assert_eq!(result.routes.len(), 1);
/// assert_eq!(result.metrics.total_distance, 50.0);
/// assert_eq!(result.metrics.total_time, 125.0);
/// ```
pub fn optimize<R: Rng>(
    algorithm: Algorithm,
    points: &[DeliveryPoint],
    vehicles: &[Vehicle],
    disruptions: &[Disruption],
    genetic_params: &GeneticParams,
    rng: &mut R,
) -> AlgorithmResult {
    let start = Instant::now();

    let routes = match algorithm {
        Algorithm::Dijkstra => dijkstra(points, vehicles, disruptions),
        Algorithm::Astar => astar(points, vehicles, disruptions),
        Algorithm::Genetic => genetic(points, vehicles, disruptions, genetic_params, rng),
        Algorithm::MlAdaptive => ml_adaptive(points, vehicles, disruptions),
    };
    let metrics = aggregate(&routes);
    let computation_time = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        %algorithm,
        points = points.len(),
        vehicles = vehicles.len(),
        disruptions = disruptions.len(),
        total_distance = metrics.total_distance,
        computation_ms = computation_time,
        "optimization finished"
    );

    AlgorithmResult {
        algorithm,
        routes,
        metrics,
        computation_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, DisruptionKind, Priority, Severity};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scenario() -> (Vec<DeliveryPoint>, Vec<Vehicle>) {
        let priorities = [Priority::Low, Priority::Medium, Priority::High];
        let points = (0..8)
            .map(|i| {
                DeliveryPoint::new(
                    format!("point-{}", i + 1),
                    format!("Stop {i}"),
                    150.0 + (i % 3) as f64 * 200.0,
                    150.0 + (i / 3) as f64 * 150.0,
                )
                .with_priority(priorities[i % 3])
            })
            .collect();
        let vehicles = vec![
            Vehicle::new("vehicle-1", "Truck Alpha", 50),
            Vehicle::new("vehicle-2", "Van Beta", 30),
            Vehicle::new("vehicle-3", "Truck Gamma", 45),
        ];
        (points, vehicles)
    }

    #[test]
    fn test_rates_table() {
        assert_eq!(Algorithm::Dijkstra.rates(), CostRates::new(2.5, 0.15));
        assert_eq!(Algorithm::Astar.rates(), CostRates::new(2.2, 0.14));
        assert_eq!(Algorithm::Genetic.rates(), CostRates::new(2.0, 0.12));
        assert_eq!(Algorithm::MlAdaptive.rates(), CostRates::new(1.8, 0.11));
    }

    #[test]
    fn test_every_variant_partitions_points() {
        let (points, vehicles) = scenario();
        let jam = Disruption::with_severity(
            "jam",
            DisruptionKind::Traffic,
            Severity::High,
            350.0,
            300.0,
            60,
        );
        let mut rng = StdRng::seed_from_u64(2024);
        for algorithm in Algorithm::ALL {
            let result = optimize(
                algorithm,
                &points,
                &vehicles,
                std::slice::from_ref(&jam),
                &GeneticParams::default(),
                &mut rng,
            );
            assert_eq!(result.algorithm, algorithm);
            assert_eq!(result.routes.len(), vehicles.len());
            let mut ids: Vec<&str> = result
                .routes
                .iter()
                .flat_map(|r| r.point_ids())
                .collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), points.len(), "{algorithm} dropped or duplicated points");
            assert!(result.computation_time >= 0.0);
        }
    }

    #[test]
    fn test_metrics_match_routes() {
        let (points, vehicles) = scenario();
        let mut rng = StdRng::seed_from_u64(1);
        let result = optimize(
            Algorithm::Astar,
            &points,
            &vehicles,
            &[],
            &GeneticParams::default(),
            &mut rng,
        );
        let sum: f64 = result.routes.iter().map(|r| r.total_distance()).sum();
        assert_eq!(result.metrics.total_distance, sum.round());
        assert_eq!(result.metrics.efficiency, 17.0);
    }

    #[test]
    fn test_disruption_doubles_segment_end_to_end() {
        let points = vec![
            DeliveryPoint::new("a", "", 0.0, 0.0),
            DeliveryPoint::new("b", "", 100.0, 0.0),
            DeliveryPoint::new("c", "", 100.0, 100.0),
        ];
        let vehicles = vec![Vehicle::new("vehicle-1", "Truck Alpha", 50)];
        let zone = Disruption::new(
            "zone",
            DisruptionKind::RoadClosure,
            Severity::Medium,
            Coordinates::new(100.0, 0.0),
            50.0,
            2.0,
            60,
        );
        let mut rng = StdRng::seed_from_u64(0);
        let params = GeneticParams::default();
        let clear = optimize(Algorithm::Dijkstra, &points, &vehicles, &[], &params, &mut rng);
        let jammed = optimize(Algorithm::Dijkstra, &points, &vehicles, &[zone], &params, &mut rng);
        // b→c (100) starts inside the zone and is counted twice
        assert!((clear.metrics.total_distance - 200.0).abs() < 1e-10);
        assert!((jammed.metrics.total_distance - 300.0).abs() < 1e-10);
    }
}
