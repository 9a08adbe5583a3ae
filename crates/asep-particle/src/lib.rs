//! Reference collaborators for the ASEP engine.
//!
//! - [`ExponentialTimer`] and [`PeriodicTimer`] implement
//!   [`Timer`](asep_core::Timer).
//! - [`Walker`] is a particle on a [`WeightedGraph`](asep_graph::WeightedGraph)
//!   that proposes a weighted random out-edge at each jump.
//! - [`exclusion`] holds the exclusion rules: the hard-core
//!   [`SingleOccupancy`] rule of the classical process and its variants.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod exclusion;
pub mod timer;
pub mod walker;

pub use exclusion::{BlockAll, Capacity, Reservoirs, SingleOccupancy, Unconstrained};
pub use timer::{ExponentialTimer, PeriodicTimer};
pub use walker::{choose_weighted, Walker};
