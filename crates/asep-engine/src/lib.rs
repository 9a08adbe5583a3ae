//! Event scheduling and replay engine for ASEP simulations.
//!
//! [`Engine`] owns the particles, the exclusion rule, and the generator.
//! Each [`run`](Engine::run) merges every particle's candidate jump times
//! into one time-ordered stream and replays it one event at a time, so the
//! exclusion rule always sees a consistent configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod metrics;
pub mod schedule;

pub use config::{ConfigError, EngineConfig};
pub use engine::{update_particle, Engine, MoveOutcome};
pub use metrics::RunReport;
pub use schedule::{check_horizon, check_stream, merge_jump_times};
