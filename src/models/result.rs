//! Optimization result and metrics types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Route;
use crate::error::Error;

/// The four route-assignment variants offered by the dashboard.
///
/// The names are cosmetic; see [`crate::algorithms`] for what each one does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Dijkstra,
    Astar,
    Genetic,
    MlAdaptive,
}

impl Algorithm {
    /// All variants, in dashboard order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::Astar,
        Algorithm::Genetic,
        Algorithm::MlAdaptive,
    ];

    /// Wire name (`"dijkstra"`, `"astar"`, `"genetic"`, `"ml_adaptive"`).
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
            Algorithm::Genetic => "genetic",
            Algorithm::MlAdaptive => "ml_adaptive",
        }
    }

    /// Parses a wire name, falling back to [`Algorithm::MlAdaptive`] for
    /// anything unrecognized.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or(Algorithm::MlAdaptive)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}

/// Aggregate figures for a set of routes, compared against a simulated
/// baseline 20% worse than the computed routes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationMetrics {
    /// Sum of route distances, rounded.
    pub total_distance: f64,
    /// Sum of route times in minutes, rounded.
    pub total_time: f64,
    /// Rounded fuel cost saved against the baseline.
    pub fuel_savings: f64,
    /// Rounded kilograms of CO2 saved against the baseline.
    pub carbon_reduction: f64,
    /// Rounded percentage of baseline distance saved.
    pub efficiency: f64,
}

impl OptimizationMetrics {
    /// Distance saved, derived from fuel savings at 0.15 per km.
    pub fn distance_saved_km(&self) -> f64 {
        (self.fuel_savings / 0.15).round()
    }

    /// Total time in whole hours.
    pub fn total_hours(&self) -> f64 {
        (self.total_time / 60.0).round()
    }
}

/// Output of one optimize call. Replaces the previous result entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    pub algorithm: Algorithm,
    pub routes: Vec<Route>,
    pub metrics: OptimizationMetrics,
    /// Wall-clock computation time in milliseconds.
    pub computation_time: f64,
}

impl AlgorithmResult {
    /// Returns the route assigned to the given vehicle, if any.
    pub fn route_for(&self, vehicle_id: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.vehicle_id() == vehicle_id)
    }

    /// Number of points served across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(|r| r.len()).sum()
    }
}
