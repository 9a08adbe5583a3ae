//! Per-run counters.

/// What happened during one [`Engine::run`](crate::Engine::run).
///
/// `moved + blocked + declined == events` always holds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunReport {
    /// Horizon the run covered.
    pub horizon: f64,
    /// Number of events replayed.
    pub events: usize,
    /// Proposals the exclusion rule allowed.
    pub moved: usize,
    /// Proposals the exclusion rule blocked.
    pub blocked: usize,
    /// Jump attempts where the particle had nothing to propose.
    pub declined: usize,
    /// Wall-clock time spent merging jump times, in microseconds.
    pub schedule_us: u64,
    /// Wall-clock time spent replaying, in microseconds.
    pub replay_us: u64,
}

impl RunReport {
    /// Fraction of proposals that were blocked, or 0 if none were made.
    pub fn blocked_fraction(&self) -> f64 {
        let proposals = self.moved + self.blocked;
        if proposals == 0 {
            0.0
        } else {
            self.blocked as f64 / proposals as f64
        }
    }
}
