//! The scheduled event record and its replay ordering.

use crate::id::ParticleId;
use std::cmp::Ordering;

/// One candidate move attempt: particle `particle` tries to jump at `time`.
///
/// Events are produced fresh by every run and live only until that run's
/// replay finishes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    /// Owner of the jump attempt.
    pub particle: ParticleId,
    /// Simulated time of the attempt, relative to the start of the run.
    pub time: f64,
}

impl Event {
    /// Create an event for `particle` at `time`.
    pub fn new(particle: ParticleId, time: f64) -> Self {
        Self { particle, time }
    }

    /// Replay order: ascending time, ties broken by ascending particle id.
    ///
    /// Uses [`f64::total_cmp`], so the order is total even for values the
    /// engine would reject before sorting.
    pub fn chronological(a: &Self, b: &Self) -> Ordering {
        a.time
            .total_cmp(&b.time)
            .then_with(|| a.particle.cmp(&b.particle))
    }
}
