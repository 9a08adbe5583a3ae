//! Merging per-particle jump times into one replay stream.
//!
//! Each particle lists its candidate jump times as if it were alone. The
//! lists are tagged with the owner's [`ParticleId`], concatenated, and
//! sorted by [`Event::chronological`]: ascending time, and for exactly
//! equal times the lower particle id first. Simultaneous attempts have no
//! physical meaning in continuous time; the id rule only makes degenerate
//! clocks reproducible.

use asep_core::{Event, Particle, ParticleId, RunError};

/// Reject horizons that are negative, NaN, or infinite.
pub fn check_horizon(horizon: f64) -> Result<(), RunError> {
    if !horizon.is_finite() || horizon < 0.0 {
        return Err(RunError::InvalidHorizon { horizon });
    }
    Ok(())
}

/// Collect every particle's jump times in `[0, horizon)` and return them
/// as one stream in replay order.
///
/// Advances each particle's clock but moves nobody. Fails on the first
/// timestamp that is non-finite, outside the window, or not strictly
/// after the same particle's previous one.
///
/// `particles.len()` must fit in a [`ParticleId`]; engines guarantee this
/// at construction.
pub fn merge_jump_times<P: Particle>(
    particles: &mut [P],
    horizon: f64,
) -> Result<Vec<Event>, RunError> {
    check_horizon(horizon)?;
    let mut events = Vec::new();
    for (index, particle) in particles.iter_mut().enumerate() {
        let id = ParticleId(index as u32);
        let mut previous: Option<f64> = None;
        for time in particle.jump_times(horizon) {
            let in_window = time.is_finite() && time >= 0.0 && time < horizon;
            let increasing = previous.is_none_or(|p| time > p);
            if !in_window || !increasing {
                return Err(RunError::InvalidJumpTime {
                    particle: id,
                    time,
                    horizon,
                });
            }
            previous = Some(time);
            events.push(Event::new(id, time));
        }
    }
    events.sort_by(Event::chronological);
    Ok(events)
}

/// Check that `events` is in replay order, has finite timestamps, and
/// only names particles below `particle_count`.
pub fn check_stream(events: &[Event], particle_count: usize) -> Result<(), RunError> {
    for (index, event) in events.iter().enumerate() {
        if event.particle.index() >= particle_count {
            return Err(RunError::UnknownParticle {
                particle: event.particle,
            });
        }
        if !event.time.is_finite() {
            return Err(RunError::InvalidEventTime {
                index,
                time: event.time,
            });
        }
        if index > 0 && Event::chronological(&events[index - 1], event).is_gt() {
            return Err(RunError::OutOfOrder { index });
        }
    }
    Ok(())
}
