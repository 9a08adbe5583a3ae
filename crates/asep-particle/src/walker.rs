//! Graph-walking particle.

use crate::timer::ExponentialTimer;
use asep_core::{NodeId, Particle, Timer};
use asep_graph::{Edge, WeightedGraph};
use rand::seq::IndexedRandom;
use rand::RngCore;

/// A particle on a [`WeightedGraph`] that, at each jump time, proposes one
/// of its node's out-edges with probability proportional to the edge
/// weight.
///
/// The timer is seeded from one `u64` drawn from the engine's generator at
/// spawn time; move proposals draw from the generator lent by the engine.
#[derive(Clone, Debug)]
pub struct Walker<T = ExponentialTimer> {
    position: NodeId,
    timer: T,
}

impl<T: Timer> Walker<T> {
    /// Create a walker at `position` driven by `timer`.
    pub fn new(position: NodeId, timer: T) -> Self {
        Self { position, timer }
    }

    /// The walker's clock.
    pub fn timer(&self) -> &T {
        &self.timer
    }
}

impl<T: Timer> Particle for Walker<T> {
    type Universe = WeightedGraph;

    fn spawn<R: RngCore + ?Sized>(_universe: &WeightedGraph, position: NodeId, rng: &mut R) -> Self {
        Self::new(position, T::from_seed(rng.next_u64()))
    }

    fn jump_times(&mut self, horizon: f64) -> Vec<f64> {
        self.timer.jump_times(horizon)
    }

    fn propose<R: RngCore + ?Sized>(&self, universe: &WeightedGraph, rng: &mut R) -> Option<NodeId> {
        choose_weighted(universe.out_edges(self.position), rng)
    }

    fn commit(&mut self, position: NodeId) {
        self.position = position;
    }

    fn position(&self) -> NodeId {
        self.position
    }
}

/// Pick an edge target with probability proportional to its weight.
///
/// Returns `None` when there are no edges or all weights are zero. Always
/// consumes exactly one draw otherwise.
pub fn choose_weighted<R: RngCore + ?Sized>(edges: &[Edge], rng: &mut R) -> Option<NodeId> {
    edges
        .choose_weighted(rng, |e| e.weight)
        .ok()
        .map(|e| e.target)
}
