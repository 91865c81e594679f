//! The four assignment variants.

use rand::Rng;
use tracing::debug;

use crate::constructive::{
    block_slice, by_priority, contiguous_split, nearest_neighbor_order, round_robin,
};
use crate::evaluation::RouteEvaluator;
use crate::ga::{evolve, GeneticParams};
use crate::models::{Algorithm, DeliveryPoint, Disruption, Route, Vehicle};

/// Prices one bucket per vehicle, pairing buckets with vehicles in order.
fn price(
    algorithm: Algorithm,
    vehicles: &[Vehicle],
    buckets: impl IntoIterator<Item = Vec<DeliveryPoint>>,
    disruptions: &[Disruption],
) -> Vec<Route> {
    let evaluator = RouteEvaluator::new(disruptions, algorithm.rates());
    vehicles
        .iter()
        .zip(buckets)
        .map(|(vehicle, points)| {
            let route = evaluator.build_route(vehicle.id(), points);
            debug!(
                %algorithm,
                vehicle = vehicle.id(),
                stops = route.len(),
                distance = route.total_distance(),
                "priced route"
            );
            route
        })
        .collect()
}

/// Contiguous ⌈n/v⌉ split in input order, no reordering.
pub fn dijkstra(
    points: &[DeliveryPoint],
    vehicles: &[Vehicle],
    disruptions: &[Disruption],
) -> Vec<Route> {
    let buckets = contiguous_split(points, vehicles.len());
    price(Algorithm::Dijkstra, vehicles, buckets, disruptions)
}

/// High priorities first, dealt round-robin, each route nearest-neighbor ordered.
pub fn astar(
    points: &[DeliveryPoint],
    vehicles: &[Vehicle],
    disruptions: &[Disruption],
) -> Vec<Route> {
    let buckets = round_robin(&by_priority(points), vehicles.len())
        .into_iter()
        .map(|bucket| nearest_neighbor_order(&bucket));
    price(Algorithm::Astar, vehicles, buckets, disruptions)
}

/// Fittest random round-robin partition found by [`evolve`], no reordering.
pub fn genetic<R: Rng>(
    points: &[DeliveryPoint],
    vehicles: &[Vehicle],
    disruptions: &[Disruption],
    params: &GeneticParams,
    rng: &mut R,
) -> Vec<Route> {
    let best = evolve(points, vehicles.len(), disruptions, params, rng);
    price(Algorithm::Genetic, vehicles, best.into_buckets(), disruptions)
}

/// Contiguous blocks sliced per vehicle, each nearest-neighbor ordered.
pub fn ml_adaptive(
    points: &[DeliveryPoint],
    vehicles: &[Vehicle],
    disruptions: &[Disruption],
) -> Vec<Route> {
    let buckets = (0..vehicles.len())
        .map(|index| nearest_neighbor_order(block_slice(points, vehicles.len(), index)));
    price(Algorithm::MlAdaptive, vehicles, buckets, disruptions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, DisruptionKind, Priority, Severity};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fleet(n: usize) -> Vec<Vehicle> {
        (0..n)
            .map(|i| Vehicle::new(format!("vehicle-{}", i + 1), format!("Truck {i}"), 50))
            .collect()
    }

    fn five_points() -> Vec<DeliveryPoint> {
        vec![
            DeliveryPoint::new("a", "", 0.0, 0.0),
            DeliveryPoint::new("b", "", 30.0, 40.0),
            DeliveryPoint::new("c", "", 30.0, 0.0),
            DeliveryPoint::new("d", "", 60.0, 40.0),
            DeliveryPoint::new("e", "", 0.0, 40.0),
        ]
    }

    #[test]
    fn test_dijkstra_single_vehicle_keeps_order() {
        let routes = dijkstra(&five_points(), &fleet(1), &[]);
        assert_eq!(routes.len(), 1);
        let route = &routes[0];
        assert_eq!(route.point_ids(), vec!["a", "b", "c", "d", "e"]);
        // 50 + 40 + 50 + 60
        assert!((route.total_distance() - 200.0).abs() < 1e-10);
        assert!((route.estimated_time() - 500.0).abs() < 1e-10);
        assert!((route.fuel_cost() - 30.0).abs() < 1e-10);
    }

    #[test]
    fn test_dijkstra_disruption_doubles_segments_in_zone() {
        let points = five_points();
        let vehicles = fleet(1);
        let zone = Disruption::new(
            "d",
            DisruptionKind::Traffic,
            Severity::Medium,
            Coordinates::new(0.0, 0.0),
            50.0,
            2.0,
            60,
        );
        let clear = dijkstra(&points, &vehicles, &[]);
        let jammed = dijkstra(&points, &vehicles, &[zone]);
        // the zone covers a (0) and b (50, on the boundary), c (30) too;
        // a→b, b→c, c→d all start inside it
        let extra = jammed[0].total_distance() - clear[0].total_distance();
        assert!((extra - (50.0 + 40.0 + 50.0)).abs() < 1e-10);
    }

    #[test]
    fn test_dijkstra_splits_across_vehicles() {
        let routes = dijkstra(&five_points(), &fleet(2), &[]);
        assert_eq!(routes[0].point_ids(), vec!["a", "b", "c"]);
        assert_eq!(routes[1].point_ids(), vec!["d", "e"]);
        assert_eq!(routes[1].vehicle_id(), "vehicle-2");
    }

    #[test]
    fn test_astar_prioritizes_and_orders() {
        let points = vec![
            DeliveryPoint::new("l", "", 100.0, 0.0).with_priority(Priority::Low),
            DeliveryPoint::new("h1", "", 0.0, 0.0).with_priority(Priority::High),
            DeliveryPoint::new("m", "", 50.0, 0.0).with_priority(Priority::Medium),
            DeliveryPoint::new("h2", "", 10.0, 0.0).with_priority(Priority::High),
        ];
        // sorted: h1, h2, m, l → vehicle 0: h1, m; vehicle 1: h2, l
        let routes = astar(&points, &fleet(2), &[]);
        assert_eq!(routes[0].point_ids(), vec!["h1", "m"]);
        assert_eq!(routes[1].point_ids(), vec!["h2", "l"]);
        assert!((routes[0].estimated_time() - 50.0 * 2.2).abs() < 1e-10);
        assert!((routes[1].fuel_cost() - 90.0 * 0.14).abs() < 1e-10);
    }

    #[test]
    fn test_astar_reorders_by_nearest_neighbor() {
        let points = vec![
            DeliveryPoint::new("a", "", 0.0, 0.0),
            DeliveryPoint::new("far", "", 100.0, 0.0),
            DeliveryPoint::new("near", "", 10.0, 0.0),
        ];
        let routes = astar(&points, &fleet(1), &[]);
        assert_eq!(routes[0].point_ids(), vec!["a", "near", "far"]);
        assert!((routes[0].total_distance() - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_ml_adaptive_blocks_and_orders() {
        let points = vec![
            DeliveryPoint::new("a", "", 0.0, 0.0),
            DeliveryPoint::new("b", "", 20.0, 0.0),
            DeliveryPoint::new("c", "", 10.0, 0.0),
            DeliveryPoint::new("d", "", 0.0, 5.0),
        ];
        let routes = ml_adaptive(&points, &fleet(2), &[]);
        assert_eq!(routes[0].point_ids(), vec!["a", "b"]);
        assert_eq!(routes[1].point_ids(), vec!["c", "d"]);

        let routes = ml_adaptive(&points, &fleet(1), &[]);
        assert_eq!(routes[0].point_ids(), vec!["a", "d", "c", "b"]);
        assert!((routes[0].estimated_time() - routes[0].total_distance() * 1.8).abs() < 1e-10);
    }

    #[test]
    fn test_extra_vehicles_get_empty_routes() {
        let points = five_points()[..2].to_vec();
        for routes in [
            dijkstra(&points, &fleet(4), &[]),
            ml_adaptive(&points, &fleet(4), &[]),
        ] {
            assert_eq!(routes.len(), 4);
            assert!(routes[2].is_empty());
            assert_eq!(routes[3].total_distance(), 0.0);
        }
    }

    #[test]
    fn test_genetic_partitions_all_points() {
        let mut rng = StdRng::seed_from_u64(42);
        let params = GeneticParams::default().with_generations(10);
        let routes = genetic(&five_points(), &fleet(2), &[], &params, &mut rng);
        assert_eq!(routes.len(), 2);
        assert_eq!(routes.iter().map(|r| r.len()).sum::<usize>(), 5);
        for route in &routes {
            assert!((route.fuel_cost() - route.total_distance() * 0.12).abs() < 1e-10);
            assert!((route.estimated_time() - route.total_distance() * 2.0).abs() < 1e-10);
        }
    }
}
