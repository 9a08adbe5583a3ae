//! Strongly-typed identifiers for particles and graph nodes.

use std::fmt;

/// Stable index of a particle within an engine.
///
/// Assigned in construction order and never reused for the lifetime of
/// the engine. `ParticleId(n)` is the n-th entry of
/// `snapshot_positions()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// Largest number of particles an engine can address.
    pub const MAX_COUNT: usize = u32::MAX as usize;

    /// The particle's position in the engine's particle collection.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParticleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a node in a graph universe.
///
/// Nodes are numbered sequentially in insertion order. A `NodeId` is only
/// meaningful for the graph that issued it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The node's slot in its graph's adjacency storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
