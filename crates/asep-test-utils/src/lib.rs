//! Test utilities and mock collaborators for ASEP development.
//!
//! [`Track`] is a one-dimensional universe with `u32` positions, and
//! [`ScriptedParticle`] a particle whose jump times are fixed in advance
//! and which always proposes the next cell to the right. Together they
//! make engine behaviour predictable without any randomness.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{PanicOnCall, RecordingExclusion, ScriptedParticle, Track};
