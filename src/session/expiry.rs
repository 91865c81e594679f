//! Keyed, cancellable disruption expiry.

use std::collections::HashMap;
use std::time::Duration;

/// Pending expiry deadlines keyed by disruption id.
///
/// Each id fires at most once: [`ExpirySchedule::take_due`] removes what it
/// returns, and [`ExpirySchedule::cancel`] drops a pending deadline. Deadlines
/// are measured on the session's logical clock.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use smart_route::session::ExpirySchedule;
///
/// let mut schedule = ExpirySchedule::new();
/// schedule.schedule("d-1", Duration::from_secs(60));
/// schedule.schedule("d-2", Duration::from_secs(30));
/// assert_eq!(schedule.take_due(Duration::from_secs(45)), vec!["d-2".to_string()]);
/// assert!(schedule.cancel("d-1"));
/// assert!(schedule.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpirySchedule {
    deadlines: HashMap<String, Duration>,
}

impl ExpirySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `id` to expire at `at`, replacing any earlier deadline.
    pub fn schedule(&mut self, id: impl Into<String>, at: Duration) {
        self.deadlines.insert(id.into(), at);
    }

    /// Cancels the pending deadline for `id`. Returns `false` if none existed.
    pub fn cancel(&mut self, id: &str) -> bool {
        self.deadlines.remove(id).is_some()
    }

    /// Drops every pending deadline.
    pub fn clear(&mut self) {
        self.deadlines.clear();
    }

    /// Deadline for `id`, if pending.
    pub fn deadline(&self, id: &str) -> Option<Duration> {
        self.deadlines.get(id).copied()
    }

    /// Removes and returns the ids due at `now`, earliest deadline first
    /// (ties by id).
    pub fn take_due(&mut self, now: Duration) -> Vec<String> {
        let mut due: Vec<(Duration, String)> = self
            .deadlines
            .iter()
            .filter(|(_, &at)| at <= now)
            .map(|(id, &at)| (at, id.clone()))
            .collect();
        due.sort();

        for (_, id) in &due {
            self.deadlines.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
