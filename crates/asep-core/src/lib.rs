//! Core types and traits for the ASEP simulation workspace.
//!
//! This is the leaf crate. It defines the identifiers, the [`Event`]
//! record, the error types shared by the engine, and the collaborator
//! contracts the engine is generic over: [`Universe`], [`Particle`],
//! [`Timer`], and [`Exclusion`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod event;
pub mod id;
pub mod traits;

pub use error::RunError;
pub use event::Event;
pub use id::{NodeId, ParticleId};
pub use traits::{exclusion_fn, Exclusion, ExclusionFn, Particle, PositionOf, Timer, Universe};
