//! Dashboard session.
//!
//! A [`Session`] owns the [`DashboardState`], the [`ExpirySchedule`] for
//! active disruptions, a logical clock, and the RNG used for ids, random
//! locations, the genetic search and the simulated processing delay.
//!
//! - [`DashboardState`] / [`Action`] — Immutable state and its transitions
//! - [`ExpirySchedule`] — Keyed, cancellable disruption deadlines

mod expiry;
mod state;

pub use expiry::ExpirySchedule;
pub use state::{dispatch, Action, DashboardState};

use std::thread;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::algorithms;
use crate::config::Config;
use crate::data;
use crate::error::Result;
use crate::models::{
    Algorithm, AlgorithmResult, Coordinates, DeliveryPoint, Disruption, DisruptionKind, Priority,
    Severity,
};

/// An interactive dashboard session.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use smart_route::config::Config;
/// use smart_route::models::{Algorithm, DisruptionKind, Priority, Severity};
/// use smart_route::session::Session;
///
/// let mut session = Session::new(Config::default().without_latency().with_seed(1));
/// session.add_point("12 Harbor Rd", Priority::High, 20.0).unwrap();
/// session.add_point("7 Mill Ln", Priority::Low, 7.5).unwrap();
/// let id = session.add_disruption(DisruptionKind::Weather, Severity::High, 1);
///
/// let result = session.optimize(Algorithm::Astar).unwrap();
/// assert_eq!(result.num_served(), 2);
///
/// assert_eq!(session.advance(Duration::from_secs(60)), vec![id]);
/// assert!(session.state().disruptions().is_empty());
/// ```
#[derive(Debug)]
pub struct Session {
    config: Config,
    state: DashboardState,
    expiry: ExpirySchedule,
    clock: Duration,
    rng: StdRng,
}

impl Session {
    /// Starts a session with the sample fleet. The RNG is seeded from
    /// `config.seed` if set, otherwise from the OS.
    pub fn new(config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            state: DashboardState::new(),
            expiry: ExpirySchedule::new(),
            clock: Duration::ZERO,
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Logical time elapsed since the session started.
    pub fn now(&self) -> Duration {
        self.clock
    }

    /// Pending disruption deadlines.
    pub fn expiry(&self) -> &ExpirySchedule {
        &self.expiry
    }

    fn apply(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.apply(action);
    }

    /// Adds a point at a random location. Returns its id, or `None` if the
    /// address is blank.
    pub fn add_point(
        &mut self,
        address: &str,
        priority: Priority,
        estimated_duration: f64,
    ) -> Option<String> {
        let Some(point) = data::new_point(address, priority, estimated_duration, &mut self.rng)
        else {
            debug!("ignoring point with blank address");
            return None;
        };
        let id = point.id().to_string();
        self.apply(Action::AddPoint(point));
        Some(id)
    }

    /// Adds a default point at a clicked map location and returns its id.
    pub fn add_point_at(&mut self, at: Coordinates) -> String {
        let point = data::point_at(at, &mut self.rng);
        let id = point.id().to_string();
        self.apply(Action::AddPoint(point));
        id
    }

    pub fn remove_point(&mut self, id: &str) {
        self.apply(Action::RemovePoint(id.to_string()));
    }

    /// Replaces all points with the eight demo points.
    pub fn load_sample_points(&mut self) {
        let points = data::sample_points(&mut self.rng);
        self.import_points(points);
    }

    /// Replaces all points.
    pub fn import_points(&mut self, points: Vec<DeliveryPoint>) {
        info!(count = points.len(), "importing points");
        self.apply(Action::ImportPoints(points));
    }

    /// Replaces all points with those parsed from `json`.
    ///
    /// On a parse error the state is left unchanged.
    pub fn import_json(&mut self, json: &str) -> Result<usize> {
        let points =
            data::import_points(json).inspect_err(|e| warn!(error = %e, "import failed"))?;
        let count = points.len();
        self.import_points(points);
        Ok(count)
    }

    /// Serializes the current points in the export format.
    pub fn export_json(&self) -> Result<String> {
        data::export_points(self.state.points())
    }

    /// Creates a disruption at a random location and schedules its expiry
    /// `duration` units from now. Returns its id.
    pub fn add_disruption(
        &mut self,
        kind: DisruptionKind,
        severity: Severity,
        duration: u32,
    ) -> String {
        let disruption = data::new_disruption(kind, severity, duration, &mut self.rng);
        let id = disruption.id().to_string();
        self.insert_disruption(disruption);
        id
    }

    /// Adds an existing disruption and schedules its expiry.
    pub fn insert_disruption(&mut self, disruption: Disruption) {
        let lifetime = self
            .config
            .disruption_duration_unit
            .to_duration(disruption.duration());
        let deadline = self.clock + lifetime;
        info!(
            id = disruption.id(),
            kind = ?disruption.kind(),
            severity = ?disruption.severity(),
            x = disruption.location().x,
            y = disruption.location().y,
            expires_in_secs = lifetime.as_secs(),
            "disruption added"
        );
        self.expiry.schedule(disruption.id(), deadline);
        self.apply(Action::AddDisruption(disruption));
    }

    /// Removes a disruption and cancels its pending expiry.
    pub fn remove_disruption(&mut self, id: &str) {
        self.expiry.cancel(id);
        self.apply(Action::RemoveDisruption(id.to_string()));
    }

    /// Advances the logical clock and expires every disruption that is now
    /// due. Returns the expired ids in firing order.
    pub fn advance(&mut self, by: Duration) -> Vec<String> {
        self.clock += by;
        let due = self.expiry.take_due(self.clock);
        for id in &due {
            debug!(%id, "disruption expired");
            self.apply(Action::ExpireDisruption(id.clone()));
        }
        due
    }

    /// Runs `algorithm` over the current points, fleet and active
    /// disruptions, then dispatches the fleet.
    ///
    /// Returns `None` without touching the state when there are no points or
    /// no vehicles.
    pub fn optimize(&mut self, algorithm: Algorithm) -> Option<&AlgorithmResult> {
        if self.state.points().is_empty() {
            warn!(%algorithm, "no delivery points to optimize");
            return None;
        }
        if self.state.vehicles().is_empty() {
            warn!(%algorithm, "no vehicles available");
            return None;
        }

        let delay = self.config.latency.sample(&mut self.rng);
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "simulating processing");
            thread::sleep(delay);
        }

        let result = algorithms::optimize(
            algorithm,
            self.state.points(),
            self.state.vehicles(),
            self.state.disruptions(),
            &self.config.genetic,
            &mut self.rng,
        );
        self.apply(Action::ApplyResult(result));
        self.state.result()
    }

    /// Like [`Session::optimize`], falling back to the adaptive variant for
    /// unknown names.
    pub fn optimize_named(&mut self, name: &str) -> Option<&AlgorithmResult> {
        self.optimize(Algorithm::from_name_or_default(name))
    }

    /// Restores the initial state and drops all pending expiries.
    pub fn reset(&mut self) {
        self.expiry.clear();
        self.apply(Action::Reset);
    }
}
