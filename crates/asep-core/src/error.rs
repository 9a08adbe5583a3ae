//! Error types raised at the engine's call boundary.
//!
//! Only precondition violations are represented here. Failures inside
//! collaborators (universe, particle, exclusion predicate) are not caught
//! or reinterpreted by the engine.

use crate::id::ParticleId;
use std::error::Error;
use std::fmt;

/// Errors from `Engine::run()`, `schedule()`, and `replay()`.
///
/// Every variant is detected before any particle moves, so a failed run
/// leaves the configuration exactly as it was.
#[derive(Clone, Debug, PartialEq)]
pub enum RunError {
    /// The horizon is negative, NaN, or infinite.
    InvalidHorizon {
        /// The rejected horizon.
        horizon: f64,
    },
    /// A particle produced a jump time outside `[0, horizon)`, a
    /// non-finite value, or a value not strictly after its predecessor.
    InvalidJumpTime {
        /// The particle whose timer broke its contract.
        particle: ParticleId,
        /// The offending timestamp.
        time: f64,
        /// The horizon of the run.
        horizon: f64,
    },
    /// A replayed event names a particle the engine does not own.
    UnknownParticle {
        /// The unknown id.
        particle: ParticleId,
    },
    /// A replayed event carries a NaN or infinite timestamp.
    InvalidEventTime {
        /// Index of the event in the stream.
        index: usize,
        /// The offending timestamp.
        time: f64,
    },
    /// A replayed event stream is not in replay order.
    OutOfOrder {
        /// Index of the first event that sorts before its predecessor.
        index: usize,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHorizon { horizon } => {
                write!(f, "horizon must be finite and >= 0, got {horizon}")
            }
            Self::InvalidJumpTime {
                particle,
                time,
                horizon,
            } => {
                write!(
                    f,
                    "particle {particle} produced jump time {time} \
                     outside strictly increasing window [0, {horizon})"
                )
            }
            Self::UnknownParticle { particle } => {
                write!(f, "event names unknown particle {particle}")
            }
            Self::InvalidEventTime { index, time } => {
                write!(f, "event {index} has non-finite time {time}")
            }
            Self::OutOfOrder { index } => {
                write!(f, "event {index} is earlier than its predecessor")
            }
        }
    }
}

impl Error for RunError {}
