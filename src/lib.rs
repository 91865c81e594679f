//! # smart-route
//!
//! Delivery routing core for the SmartRoute dashboard: delivery points and
//! a small fleet on a 2-D map, transient traffic/weather/road-closure
//! disruptions that inflate travel cost, four simplified assignment variants,
//! and aggregate efficiency metrics.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (DeliveryPoint, Vehicle, Disruption, Route, AlgorithmResult)
//! - [`distance`] — Euclidean distance and disruption-adjusted path cost
//! - [`constructive`] — Point-to-vehicle assignment and nearest-neighbor ordering
//! - [`evaluation`] — Per-route pricing and aggregate metrics
//! - [`ga`] — Random-partition genetic search
//! - [`algorithms`] — The four optimization variants and their dispatcher
//! - [`data`] — Sample data, user-created entities, JSON import/export
//! - [`session`] — Dashboard state, actions, and disruption expiry
//! - [`config`] — Session configuration
//! - [`logging`] — Tracing subscriber setup

pub mod algorithms;
pub mod config;
pub mod constructive;
pub mod data;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod logging;
pub mod models;
pub mod session;

pub use error::{Error, Result};
