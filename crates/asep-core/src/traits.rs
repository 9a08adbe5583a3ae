//! Collaborator contracts the simulation engine is generic over.
//!
//! The engine never inspects positions, topology, or timing itself. It
//! only needs:
//!
//! - a [`Universe`] that names the initial position;
//! - a [`Particle`] that can list its candidate jump times, propose a move,
//!   and commit one;
//! - an [`Exclusion`] predicate that decides whether a proposed move is
//!   blocked by the current configuration.
//!
//! [`Timer`] is the clock contract used by particle implementations; the
//! engine does not call it directly.

use rand::RngCore;
use std::fmt;
use std::marker::PhantomData;

/// The space particles live on.
pub trait Universe {
    /// A location in the universe. Compared by the exclusion predicate.
    type Position: Copy + Eq + fmt::Debug;

    /// The position every particle starts from.
    fn initial_position(&self) -> Self::Position;
}

/// Shorthand for the position type of a particle's universe.
pub type PositionOf<P> = <<P as Particle>::Universe as Universe>::Position;

/// A source of candidate jump times.
///
/// Implementations own their random stream so that particles stay
/// decorrelated even when all of them were seeded from one generator.
pub trait Timer {
    /// Build a timer whose stream is fully determined by `seed`.
    fn from_seed(seed: u64) -> Self
    where
        Self: Sized;

    /// Candidate jump times in `[0, horizon)`, strictly increasing.
    ///
    /// Must terminate for every finite horizon. A horizon of zero yields
    /// an empty sequence.
    fn jump_times(&mut self, horizon: f64) -> Vec<f64>;
}

/// A mobile entity owned by the engine.
///
/// Moving is split into a read phase ([`propose`](Particle::propose)) and a
/// write phase ([`commit`](Particle::commit)) so that the exclusion
/// predicate can borrow the whole particle collection between the two.
/// The engine commits a proposal only if the predicate does not block it.
pub trait Particle: Sized {
    /// The universe this particle walks on.
    type Universe: Universe;

    /// Create a particle at `position`.
    ///
    /// Implementations should take exactly the draws they need from `rng`
    /// to seed private state, so that construction order fully determines
    /// each particle's stream.
    fn spawn<R: RngCore + ?Sized>(
        universe: &Self::Universe,
        position: PositionOf<Self>,
        rng: &mut R,
    ) -> Self;

    /// Candidate jump times in `[0, horizon)`, as if the particle acted alone.
    ///
    /// The sequence must be finite and strictly increasing.
    fn jump_times(&mut self, horizon: f64) -> Vec<f64>;

    /// The position this particle would move to now, or `None` if it has
    /// nowhere to go.
    fn propose<R: RngCore + ?Sized>(
        &self,
        universe: &Self::Universe,
        rng: &mut R,
    ) -> Option<PositionOf<Self>>;

    /// Move to `position`. The only mutation of a particle's location.
    fn commit(&mut self, position: PositionOf<Self>);

    /// Current position.
    fn position(&self) -> PositionOf<Self>;
}

/// Decides whether a proposed move is blocked.
///
/// `particles` is the full collection, including the mover at its
/// pre-move position. Implementations must be free of side effects.
pub trait Exclusion<P: Particle> {
    /// `true` if moving to `proposed` is forbidden.
    fn blocks(&self, proposed: &PositionOf<P>, particles: &[P]) -> bool;
}

impl<P: Particle, X: Exclusion<P> + ?Sized> Exclusion<P> for &X {
    fn blocks(&self, proposed: &PositionOf<P>, particles: &[P]) -> bool {
        (**self).blocks(proposed, particles)
    }
}

impl<P: Particle, X: Exclusion<P> + ?Sized> Exclusion<P> for Box<X> {
    fn blocks(&self, proposed: &PositionOf<P>, particles: &[P]) -> bool {
        (**self).blocks(proposed, particles)
    }
}

/// An [`Exclusion`] backed by a closure. Built with [`exclusion_fn`].
pub struct ExclusionFn<P, F> {
    f: F,
    _particle: PhantomData<fn(&[P])>,
}

impl<P, F> fmt::Debug for ExclusionFn<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExclusionFn").finish_non_exhaustive()
    }
}

/// Wrap a closure as an exclusion predicate.
///
/// ```
/// use asep_core::{exclusion_fn, Particle, PositionOf};
///
/// fn occupied<P: Particle>() -> impl asep_core::Exclusion<P> {
///     exclusion_fn::<P, _>(|proposed, particles| {
///         particles.iter().any(|p| p.position() == *proposed)
///     })
/// }
/// ```
pub fn exclusion_fn<P, F>(f: F) -> ExclusionFn<P, F>
where
    P: Particle,
    F: Fn(&PositionOf<P>, &[P]) -> bool,
{
    ExclusionFn {
        f,
        _particle: PhantomData,
    }
}

impl<P, F> Exclusion<P> for ExclusionFn<P, F>
where
    P: Particle,
    F: Fn(&PositionOf<P>, &[P]) -> bool,
{
    fn blocks(&self, proposed: &PositionOf<P>, particles: &[P]) -> bool {
        (self.f)(proposed, particles)
    }
}
