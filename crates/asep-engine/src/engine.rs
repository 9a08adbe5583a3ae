//! The simulation engine.
//!
//! [`Engine`] owns the particle collection, the exclusion rule, and the
//! generator. A [`run`](Engine::run) is two phases:
//!
//! 1. **Schedule**: every particle lists its jump times in `[0, horizon)`;
//!    the lists are merged into one stream ordered by time, lower particle
//!    id first on exact ties ([`merge_jump_times`]).
//! 2. **Replay**: events are applied one at a time via [`update_particle`].
//!    Each proposal is checked against the configuration left by all
//!    earlier events.
//!
//! Every run measures time from zero. [`elapsed`](Engine::elapsed) sums
//! the horizons run so far.
//!
//! # Ownership model
//!
//! The engine borrows the universe for its whole lifetime and owns
//! everything else. Particles are addressed by [`ParticleId`], which is
//! their construction index and never changes.

use std::fmt;
use std::time::Instant;

use asep_core::{Event, Exclusion, Particle, ParticleId, PositionOf, RunError, Universe};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use crate::config::{check_particle_count, ConfigError, EngineConfig};
use crate::metrics::RunReport;
use crate::schedule::{check_horizon, check_stream, merge_jump_times};

// ── MoveOutcome ─────────────────────────────────────────────────

/// What a single jump attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome<Pos> {
    /// The proposal was allowed and committed.
    Moved {
        /// Position before the jump.
        from: Pos,
        /// Position after the jump.
        to: Pos,
    },
    /// The exclusion rule blocked the proposal. Nothing changed.
    Blocked {
        /// Position the particle stayed at.
        at: Pos,
        /// The rejected target.
        target: Pos,
    },
    /// The particle had nowhere to go. The exclusion rule was not asked.
    Declined {
        /// Position the particle stayed at.
        at: Pos,
    },
}

impl<Pos> MoveOutcome<Pos> {
    /// `true` for [`MoveOutcome::Moved`].
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// One jump attempt for `particles[index]`.
///
/// The particle proposes a target; the exclusion rule sees the full,
/// unmodified collection (the mover still at its old position); the
/// target is committed only if not blocked.
///
/// # Panics
///
/// Panics if `index` is out of bounds. Panics raised by the particle or
/// the exclusion rule propagate unchanged.
pub fn update_particle<P, X, R>(
    particles: &mut [P],
    index: usize,
    universe: &P::Universe,
    exclusion: &X,
    rng: &mut R,
) -> MoveOutcome<PositionOf<P>>
where
    P: Particle,
    X: Exclusion<P> + ?Sized,
    R: RngCore + ?Sized,
{
    let from = particles[index].position();
    let Some(target) = particles[index].propose(universe, rng) else {
        return MoveOutcome::Declined { at: from };
    };
    if exclusion.blocks(&target, particles) {
        return MoveOutcome::Blocked { at: from, target };
    }
    particles[index].commit(target);
    MoveOutcome::Moved { from, to: target }
}

// ── Engine ──────────────────────────────────────────────────────

/// Continuous-time exclusion process over a borrowed universe.
///
/// # Example
///
/// ```
/// use asep_engine::{Engine, EngineConfig};
/// use asep_graph::complete_graph;
/// use asep_particle::{SingleOccupancy, Walker};
///
/// let graph = complete_graph(6).unwrap();
/// let config = EngineConfig::new(2, 44);
/// let mut engine =
///     Engine::<Walker, _>::from_config(&graph, &config, SingleOccupancy).unwrap();
/// let report = engine.run(2.0).unwrap();
/// assert_eq!(report.events, report.moved + report.blocked + report.declined);
/// let labels = graph.labels_of(&engine.snapshot_positions()).unwrap();
/// assert_eq!(labels, ["1", "5"]);
/// ```
pub struct Engine<'u, P: Particle, X, R = ChaCha8Rng> {
    universe: &'u P::Universe,
    particles: Vec<P>,
    exclusion: X,
    rng: R,
    elapsed: f64,
    runs: u64,
}

impl<'u, P, X, R> Engine<'u, P, X, R>
where
    P: Particle,
    X: Exclusion<P>,
    R: RngCore,
{
    /// Place `particle_count` particles at the universe's initial position.
    ///
    /// Particles are spawned in id order, each drawing its private state
    /// from `rng`.
    pub fn new(
        universe: &'u P::Universe,
        particle_count: usize,
        exclusion: X,
        mut rng: R,
    ) -> Result<Self, ConfigError> {
        check_particle_count(particle_count)?;
        let start = universe.initial_position();
        let particles = (0..particle_count)
            .map(|_| P::spawn(universe, start, &mut rng))
            .collect();
        debug!(particles = particle_count, start = ?start, "engine created");
        Ok(Self::assemble(universe, particles, exclusion, rng))
    }

    /// Adopt pre-built particles, keeping their order as their ids.
    pub fn with_particles(
        universe: &'u P::Universe,
        particles: Vec<P>,
        exclusion: X,
        rng: R,
    ) -> Result<Self, ConfigError> {
        check_particle_count(particles.len())?;
        debug!(particles = particles.len(), "engine adopted particles");
        Ok(Self::assemble(universe, particles, exclusion, rng))
    }

    fn assemble(universe: &'u P::Universe, particles: Vec<P>, exclusion: X, rng: R) -> Self {
        Self {
            universe,
            particles,
            exclusion,
            rng,
            elapsed: 0.0,
            runs: 0,
        }
    }

    /// Advance the process over `[0, horizon)`.
    ///
    /// # Errors
    ///
    /// [`RunError::InvalidHorizon`] for a negative or non-finite horizon,
    /// [`RunError::InvalidJumpTime`] if a particle's timer breaks its
    /// contract. Either way no particle has moved.
    pub fn run(&mut self, horizon: f64) -> Result<RunReport, RunError> {
        self.run_observed(horizon, |_, _| {})
    }

    /// Like [`run`](Self::run), calling `observer` after every replayed
    /// event with the event and what it did.
    pub fn run_observed<F>(&mut self, horizon: f64, mut observer: F) -> Result<RunReport, RunError>
    where
        F: FnMut(&Event, &MoveOutcome<PositionOf<P>>),
    {
        let schedule_start = Instant::now();
        let events = self.schedule(horizon)?;
        let schedule_us = schedule_start.elapsed().as_micros() as u64;

        let replay_start = Instant::now();
        let mut report = RunReport {
            horizon,
            events: events.len(),
            schedule_us,
            ..RunReport::default()
        };
        for event in &events {
            let outcome = self.apply(event);
            match outcome {
                MoveOutcome::Moved { .. } => report.moved += 1,
                MoveOutcome::Blocked { .. } => report.blocked += 1,
                MoveOutcome::Declined { .. } => report.declined += 1,
            }
            observer(event, &outcome);
        }
        report.replay_us = replay_start.elapsed().as_micros() as u64;

        self.elapsed += horizon;
        self.runs += 1;
        debug!(
            horizon,
            events = report.events,
            moved = report.moved,
            blocked = report.blocked,
            declined = report.declined,
            "run complete"
        );
        Ok(report)
    }

    /// The merged event stream for `[0, horizon)`, without replaying it.
    ///
    /// Advances every particle's clock. Positions are untouched.
    pub fn schedule(&mut self, horizon: f64) -> Result<Vec<Event>, RunError> {
        check_horizon(horizon)?;
        merge_jump_times(&mut self.particles, horizon)
    }

    /// Apply `events` in order and return the outcome of each.
    ///
    /// The whole stream is checked before anything moves: every event must
    /// name an owned particle and carry a finite time, and the stream must
    /// be in replay order. Does not count towards [`elapsed`](Self::elapsed).
    pub fn replay(&mut self, events: &[Event]) -> Result<Vec<MoveOutcome<PositionOf<P>>>, RunError> {
        check_stream(events, self.particles.len())?;
        Ok(events.iter().map(|event| self.apply(event)).collect())
    }

    fn apply(&mut self, event: &Event) -> MoveOutcome<PositionOf<P>> {
        let outcome = update_particle(
            &mut self.particles,
            event.particle.index(),
            self.universe,
            &self.exclusion,
            &mut self.rng,
        );
        trace!(particle = %event.particle, time = event.time, outcome = ?outcome, "event");
        outcome
    }

    /// Current positions, indexed by [`ParticleId`].
    pub fn snapshot_positions(&self) -> Vec<PositionOf<P>> {
        self.particles.iter().map(Particle::position).collect()
    }

    /// Position of one particle, or `None` for an unknown id.
    pub fn position_of(&self, id: ParticleId) -> Option<PositionOf<P>> {
        self.particles.get(id.index()).map(Particle::position)
    }

    /// The particles, indexed by [`ParticleId`].
    pub fn particles(&self) -> &[P] {
        &self.particles
    }

    /// Number of particles.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// The universe particles walk on.
    pub fn universe(&self) -> &'u P::Universe {
        self.universe
    }

    /// The exclusion rule.
    pub fn exclusion(&self) -> &X {
        &self.exclusion
    }

    /// Sum of the horizons of all successful runs.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of successful runs.
    pub fn runs(&self) -> u64 {
        self.runs
    }
}

impl<'u, P, X> Engine<'u, P, X, ChaCha8Rng>
where
    P: Particle,
    X: Exclusion<P>,
{
    /// Build from a validated [`EngineConfig`] with a seeded ChaCha8 generator.
    pub fn from_config(
        universe: &'u P::Universe,
        config: &EngineConfig,
        exclusion: X,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Self::new(
            universe,
            config.particle_count,
            exclusion,
            ChaCha8Rng::seed_from_u64(config.seed),
        )
    }

    /// Respawn every particle at the initial position with a fresh
    /// generator seeded from `seed`, and zero the run counters.
    ///
    /// Afterwards the engine behaves exactly like one built by
    /// [`from_config`](Self::from_config) with the same count and seed.
    pub fn reset(&mut self, seed: u64) {
        let count = self.particles.len();
        let start = self.universe.initial_position();
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.particles.clear();
        for _ in 0..count {
            let particle = P::spawn(self.universe, start, &mut self.rng);
            self.particles.push(particle);
        }
        self.elapsed = 0.0;
        self.runs = 0;
        debug!(particles = count, seed, "engine reset");
    }
}

impl<P: Particle, X, R> fmt::Debug for Engine<'_, P, X, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("particles", &self.particles.len())
            .field("elapsed", &self.elapsed)
            .field("runs", &self.runs)
            .finish_non_exhaustive()
    }
}
