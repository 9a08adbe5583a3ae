//! ASEP: continuous-time exclusion processes on weighted graphs.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all ASEP sub-crates. For most users, adding `asep` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use asep::prelude::*;
//!
//! // Two walkers on the complete graph over six nodes, hard-core rule.
//! let graph = asep::graph::complete_graph(6).unwrap();
//! let config = EngineConfig::new(2, 44);
//! let mut engine: Engine<'_, Walker, _> =
//!     Engine::from_config(&graph, &config, SingleOccupancy).unwrap();
//!
//! engine.run(0.0).unwrap();
//! assert_eq!(graph.labels_of(&engine.snapshot_positions()).unwrap(), ["0", "0"]);
//!
//! let report = engine.run(2.0).unwrap();
//! assert_eq!((report.events, report.moved, report.blocked), (4, 3, 1));
//! assert_eq!(graph.labels_of(&engine.snapshot_positions()).unwrap(), ["1", "5"]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `asep-core` | IDs, events, errors, collaborator traits |
//! | [`graph`] | `asep-graph` | Weighted graph universe, builders, matrix parser |
//! | [`particles`] | `asep-particle` | Timers, graph walker, exclusion rules |
//! | [`engine`] | `asep-engine` | Scheduling, replay, configuration, run reports |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`asep-core`).
///
/// The collaborator contracts [`types::Universe`], [`types::Particle`],
/// [`types::Timer`], and [`types::Exclusion`], plus ids and [`types::RunError`].
pub use asep_core as types;

/// Weighted graph universes (`asep-graph`).
pub use asep_graph as graph;

/// Reference particles, timers, and exclusion rules (`asep-particle`).
///
/// [`particles::SingleOccupancy`] is the classical hard-core rule.
pub use asep_particle as particles;

/// The simulation engine (`asep-engine`).
pub use asep_engine as engine;

/// Common imports for typical ASEP usage.
///
/// ```rust
/// use asep::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use asep_core::{
        exclusion_fn, Event, Exclusion, NodeId, Particle, ParticleId, PositionOf, RunError,
        Timer, Universe,
    };

    // Graphs
    pub use asep_graph::{GraphBuilder, GraphError, WeightedGraph};

    // Particles and rules
    pub use asep_particle::{
        BlockAll, Capacity, ExponentialTimer, PeriodicTimer, Reservoirs, SingleOccupancy,
        Unconstrained, Walker,
    };

    // Engine
    pub use asep_engine::{ConfigError, Engine, EngineConfig, MoveOutcome, RunReport};
}
