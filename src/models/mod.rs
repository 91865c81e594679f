//! Domain model types for the delivery dashboard.
//!
//! Provides delivery points with priorities and optional time windows,
//! vehicles with their assigned routes, disruptions that inflate travel cost
//! inside a circular zone, and the result records produced by an
//! optimization run.

mod disruption;
mod point;
mod result;
mod route;
mod vehicle;

pub use disruption::{Disruption, DisruptionKind, DurationUnit, Severity};
pub use point::{Coordinates, DeliveryPoint, Priority, TimeWindow};
pub use result::{Algorithm, AlgorithmResult, OptimizationMetrics};
pub use route::Route;
pub use vehicle::{Vehicle, VehicleStatus};
