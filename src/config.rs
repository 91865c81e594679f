//! Session configuration.
//!
//! Defaults reproduce the dashboard: a 1.5–2.5 s simulated processing delay,
//! disruption durations in minutes, 50 generations of 20 partitions, and an
//! unseeded RNG. A config can be loaded from JSON; missing keys keep their
//! defaults.
//!
//! ```json
//! {
//!   "latency": { "minMs": 0, "maxMs": 0 },
//!   "disruptionDurationUnit": "seconds",
//!   "genetic": { "generations": 100 },
//!   "seed": 42
//! }
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ga::GeneticParams;
use crate::models::DurationUnit;

/// Range of the simulated processing delay inserted before each optimize call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LatencyRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for LatencyRange {
    fn default() -> Self {
        Self {
            min_ms: 1500,
            max_ms: 2500,
        }
    }
}

impl LatencyRange {
    /// A range that never delays.
    pub const NONE: LatencyRange = LatencyRange {
        min_ms: 0,
        max_ms: 0,
    };

    /// Draws a delay uniformly from `[min_ms, max_ms]`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.random_range(self.min_ms..=self.max_ms))
    }
}

/// Configuration of a [`Session`](crate::session::Session).
///
/// # Examples
///
/// ```
/// use smart_route::config::Config;
/// use smart_route::models::DurationUnit;
///
/// let json = r#"{ "disruptionDurationUnit": "seconds", "seed": 7 }"#;
/// let config = Config::from_json(json).unwrap();
/// assert_eq!(config.disruption_duration_unit, DurationUnit::Seconds);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.genetic.generations, 50);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    pub latency: LatencyRange,
    pub disruption_duration_unit: DurationUnit,
    pub genetic: GeneticParams,
    pub seed: Option<u64>,
}

impl Config {
    /// Parses and validates a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Checks cross-field constraints.
    pub fn validate(&self) -> Result<()> {
        if self.latency.min_ms > self.latency.max_ms {
            return Err(Error::invalid_config(format!(
                "latency minMs ({}) exceeds maxMs ({})",
                self.latency.min_ms, self.latency.max_ms
            )));
        }
        if self.genetic.population_size == 0 {
            return Err(Error::invalid_config("genetic populationSize must be positive"));
        }
        Ok(())
    }

    /// Sets the simulated latency range in milliseconds.
    pub fn with_latency(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.latency = LatencyRange { min_ms, max_ms };
        self
    }

    /// Disables the simulated latency.
    pub fn without_latency(mut self) -> Self {
        self.latency = LatencyRange::NONE;
        self
    }

    /// Sets the unit of disruption durations.
    pub fn with_duration_unit(mut self, unit: DurationUnit) -> Self {
        self.disruption_duration_unit = unit;
        self
    }

    /// Sets the genetic search size.
    pub fn with_genetic(mut self, params: GeneticParams) -> Self {
        self.genetic = params;
        self
    }

    /// Seeds the session RNG.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
