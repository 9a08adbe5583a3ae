//! Exclusion rules.
//!
//! Each rule scans the full particle collection, including the mover at its
//! pre-move position. None of them keep state between calls.

use asep_core::{Exclusion, Particle, PositionOf};
use asep_graph::{WeightedGraph, SINK_LABEL, SOURCE_LABEL};
use smallvec::SmallVec;

fn occupants<P: Particle>(position: &PositionOf<P>, particles: &[P]) -> usize {
    particles
        .iter()
        .filter(|p| p.position() == *position)
        .count()
}

/// Hard-core exclusion: a move is blocked if any particle occupies the
/// target. This is the defining rule of the classical process.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SingleOccupancy;

impl<P: Particle> Exclusion<P> for SingleOccupancy {
    fn blocks(&self, proposed: &PositionOf<P>, particles: &[P]) -> bool {
        particles.iter().any(|p| p.position() == *proposed)
    }
}

/// Partial exclusion: a position holds at most `max` particles.
///
/// `Capacity::new(1)` behaves like [`SingleOccupancy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capacity {
    max: usize,
}

impl Capacity {
    /// Allow up to `max` particles per position.
    pub fn new(max: usize) -> Self {
        Self { max }
    }

    /// Maximum occupancy.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl<P: Particle> Exclusion<P> for Capacity {
    fn blocks(&self, proposed: &PositionOf<P>, particles: &[P]) -> bool {
        occupants(proposed, particles) >= self.max
    }
}

/// Single occupancy everywhere except a set of reservoir positions, which
/// hold any number of particles.
///
/// Pairs with the source/sink graphs of `asep_graph`, where all particles
/// start in the source and accumulate in the sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reservoirs<Pos> {
    free: SmallVec<[Pos; 4]>,
}

impl<Pos: Copy + Eq> Reservoirs<Pos> {
    /// Exempt the given positions from exclusion.
    pub fn new(free: impl IntoIterator<Item = Pos>) -> Self {
        Self {
            free: free.into_iter().collect(),
        }
    }

    /// Whether `position` is a reservoir.
    pub fn is_reservoir(&self, position: &Pos) -> bool {
        self.free.contains(position)
    }
}

impl Reservoirs<asep_core::NodeId> {
    /// Exempt the nodes labelled `"source"` and `"sink"`, if present.
    pub fn source_sink(graph: &WeightedGraph) -> Self {
        Self::new(
            [SOURCE_LABEL, SINK_LABEL]
                .into_iter()
                .filter_map(|label| graph.node(label)),
        )
    }
}

impl<P: Particle> Exclusion<P> for Reservoirs<PositionOf<P>> {
    fn blocks(&self, proposed: &PositionOf<P>, particles: &[P]) -> bool {
        !self.is_reservoir(proposed) && particles.iter().any(|p| p.position() == *proposed)
    }
}

/// Blocks every move. Positions never change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockAll;

impl<P: Particle> Exclusion<P> for BlockAll {
    fn blocks(&self, _proposed: &PositionOf<P>, _particles: &[P]) -> bool {
        true
    }
}

/// Blocks nothing: independent random walkers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unconstrained;

impl<P: Particle> Exclusion<P> for Unconstrained {
    fn blocks(&self, _proposed: &PositionOf<P>, _particles: &[P]) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::PeriodicTimer;
    use crate::walker::Walker;
    use asep_core::{NodeId, Timer};
    use asep_graph::random_weighted_line_with_source_sink;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn at(nodes: &[u32]) -> Vec<Walker<PeriodicTimer>> {
        nodes
            .iter()
            .map(|&n| Walker::new(NodeId(n), PeriodicTimer::from_seed(0)))
            .collect()
    }

    #[test]
    fn single_occupancy_blocks_occupied_only() {
        let ps = at(&[0, 2]);
        assert!(SingleOccupancy.blocks(&NodeId(2), ps.as_slice()));
        assert!(!SingleOccupancy.blocks(&NodeId(1), ps.as_slice()));
    }

    #[test]
    fn single_occupancy_counts_the_mover() {
        let ps = at(&[4]);
        assert!(SingleOccupancy.blocks(&NodeId(4), ps.as_slice()));
    }

    #[test]
    fn capacity_counts_occupants() {
        let ps = at(&[1, 1, 3]);
        let two = Capacity::new(2);
        assert!(two.blocks(&NodeId(1), ps.as_slice()));
        assert!(!two.blocks(&NodeId(3), ps.as_slice()));
        assert!(!two.blocks(&NodeId(0), ps.as_slice()));
        assert_eq!(two.max(), 2);
    }

    #[test]
    fn capacity_one_matches_single_occupancy() {
        let ps = at(&[0, 1, 5]);
        for n in 0..6 {
            assert_eq!(
                Exclusion::<Walker<PeriodicTimer>>::blocks(&Capacity::new(1), &NodeId(n), ps.as_slice()),
                Exclusion::<Walker<PeriodicTimer>>::blocks(&SingleOccupancy, &NodeId(n), ps.as_slice()),
            );
        }
    }

    #[test]
    fn reservoirs_exempt_listed_nodes() {
        let ps = at(&[0, 0, 1]);
        let rule = Reservoirs::new([NodeId(0)]);
        assert!(!rule.blocks(&NodeId(0), ps.as_slice()));
        assert!(rule.blocks(&NodeId(1), ps.as_slice()));
        assert!(!rule.blocks(&NodeId(2), ps.as_slice()));
    }

    #[test]
    fn reservoirs_from_source_sink_graph() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let g = random_weighted_line_with_source_sink(3, &mut rng).unwrap();
        let rule = Reservoirs::source_sink(&g);
        assert!(rule.is_reservoir(&g.node(SOURCE_LABEL).unwrap()));
        assert!(rule.is_reservoir(&g.node(SINK_LABEL).unwrap()));
        assert!(!rule.is_reservoir(&g.node("1").unwrap()));
    }

    #[test]
    fn reservoirs_on_plain_graph_is_single_occupancy() {
        let g = asep_graph::complete_graph(3).unwrap();
        let rule = Reservoirs::source_sink(&g);
        let ps = at(&[0]);
        assert!(rule.blocks(&NodeId(0), ps.as_slice()));
    }

    #[test]
    fn block_all_and_unconstrained() {
        let ps = at(&[]);
        assert!(Exclusion::<Walker<PeriodicTimer>>::blocks(&BlockAll, &NodeId(0), ps.as_slice()));
        assert!(!Exclusion::<Walker<PeriodicTimer>>::blocks(&Unconstrained, &NodeId(0), ps.as_slice()));
    }
}
