//! Seed data, user-created entities, and JSON interchange.
//!
//! - [`sample_vehicles`] / [`sample_points`] / [`bulk_import_sample`] — Demo data
//! - [`new_point`] / [`point_at`] / [`new_disruption`] — Entities created from user input
//! - [`import_points`] / [`export_points`] — `delivery-points.json` format

mod exchange;
mod generator;

pub use exchange::{export_points, import_points, read_points, write_export, EXPORT_FILE_NAME};
pub use generator::{
    bulk_import_sample, generate_id, new_disruption, new_point, point_at, random_location,
    sample_points, sample_vehicles,
};
