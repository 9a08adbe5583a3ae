//! Engine configuration and validation.

use asep_core::ParticleId;
use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating an [`EngineConfig`] or constructing
/// an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// More particles than [`ParticleId`] can address.
    TooManyParticles {
        /// The requested count.
        requested: usize,
        /// The largest supported count.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyParticles { requested, max } => {
                write!(f, "particle_count {requested} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Reject particle counts that [`ParticleId`] cannot index.
pub fn check_particle_count(requested: usize) -> Result<(), ConfigError> {
    if requested > ParticleId::MAX_COUNT {
        return Err(ConfigError::TooManyParticles {
            requested,
            max: ParticleId::MAX_COUNT,
        });
    }
    Ok(())
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Input for [`Engine::from_config`](crate::Engine::from_config).
///
/// The engine's generator is a ChaCha8 stream seeded from `seed`; two
/// engines built from equal configs over the same universe replay
/// identically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of particles placed at the universe's initial position.
    pub particle_count: usize,
    /// Seed for the engine's generator. Default: 0.
    pub seed: u64,
}

impl EngineConfig {
    /// Config for `particle_count` particles with the given seed.
    pub fn new(particle_count: usize, seed: u64) -> Self {
        Self {
            particle_count,
            seed,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_particle_count(self.particle_count)
    }
}
