//! Reusable collaborator fixtures.
//!
//! - [`Track`]: a line of cells `0..len` with a shared default jump script.
//! - [`ScriptedParticle`]: fixed jump times, always proposes one cell right.
//! - [`RecordingExclusion`]: wraps a predicate and logs every call.
//! - [`PanicOnCall`]: a predicate that fails after N calls.

use asep_core::{Exclusion, Particle, PositionOf, Universe};
use rand::RngCore;
use std::cell::{Cell, RefCell};

/// A line of `len` cells. Particles spawned on it start at `start` and
/// receive a copy of `script` as their jump times.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub len: u32,
    pub start: u32,
    pub script: Vec<f64>,
}

impl Track {
    pub fn new(len: u32, start: u32) -> Self {
        Self {
            len,
            start,
            script: Vec::new(),
        }
    }

    /// Jump times handed to every particle spawned on this track.
    pub fn with_script(mut self, script: Vec<f64>) -> Self {
        self.script = script;
        self
    }
}

impl Universe for Track {
    type Position = u32;

    fn initial_position(&self) -> u32 {
        self.start
    }
}

/// Deterministic particle for [`Track`].
///
/// Proposes `position + 1` while that stays on the track. Draws nothing
/// from the generator.
#[derive(Clone, Debug, PartialEq)]
pub struct ScriptedParticle {
    position: u32,
    script: Vec<f64>,
    verbatim: bool,
}

impl ScriptedParticle {
    /// Particle whose jump times are the entries of `script` below the horizon.
    pub fn new(position: u32, script: Vec<f64>) -> Self {
        Self {
            position,
            script,
            verbatim: false,
        }
    }

    /// Particle that returns `script` unfiltered, for exercising the
    /// engine's checks on broken timers.
    pub fn verbatim(position: u32, script: Vec<f64>) -> Self {
        Self {
            position,
            script,
            verbatim: true,
        }
    }
}

impl Particle for ScriptedParticle {
    type Universe = Track;

    fn spawn<R: RngCore + ?Sized>(universe: &Track, position: u32, _rng: &mut R) -> Self {
        Self::new(position, universe.script.clone())
    }

    fn jump_times(&mut self, horizon: f64) -> Vec<f64> {
        if self.verbatim {
            return self.script.clone();
        }
        self.script
            .iter()
            .copied()
            .filter(|&t| t < horizon)
            .collect()
    }

    fn propose<R: RngCore + ?Sized>(&self, universe: &Track, _rng: &mut R) -> Option<u32> {
        let next = self.position + 1;
        (next < universe.len).then_some(next)
    }

    fn commit(&mut self, position: u32) {
        self.position = position;
    }

    fn position(&self) -> u32 {
        self.position
    }
}

/// One observed predicate call: the proposed position and the occupied
/// positions at that moment, in particle order.
pub type PredicateCall<Pos> = (Pos, Vec<Pos>);

/// Delegates to `inner` and records every call.
pub struct RecordingExclusion<X, Pos> {
    inner: X,
    calls: RefCell<Vec<PredicateCall<Pos>>>,
}

impl<X, Pos: Clone> RecordingExclusion<X, Pos> {
    pub fn new(inner: X) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Calls observed so far, oldest first.
    pub fn calls(&self) -> Vec<PredicateCall<Pos>> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl<P, X> Exclusion<P> for RecordingExclusion<X, PositionOf<P>>
where
    P: Particle,
    X: Exclusion<P>,
{
    fn blocks(&self, proposed: &PositionOf<P>, particles: &[P]) -> bool {
        let occupied = particles.iter().map(|p| p.position()).collect();
        self.calls.borrow_mut().push((*proposed, occupied));
        self.inner.blocks(proposed, particles)
    }
}

/// Answers "not blocked" for the first `after` calls, then panics.
#[derive(Debug)]
pub struct PanicOnCall {
    after: usize,
    calls: Cell<usize>,
}

impl PanicOnCall {
    pub fn new(after: usize) -> Self {
        Self {
            after,
            calls: Cell::new(0),
        }
    }
}

impl<P: Particle> Exclusion<P> for PanicOnCall {
    fn blocks(&self, _proposed: &PositionOf<P>, _particles: &[P]) -> bool {
        let n = self.calls.get();
        if n >= self.after {
            panic!("exclusion predicate failed on call {n}");
        }
        self.calls.set(n + 1);
        false
    }
}
