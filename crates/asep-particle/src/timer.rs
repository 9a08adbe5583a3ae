//! Particle clocks.
//!
//! [`ExponentialTimer`] is the Poisson clock of the continuous-time
//! process. [`PeriodicTimer`] ticks at fixed multiples of its period; it
//! exists to drive scenarios with exactly simultaneous jump attempts.

use asep_core::Timer;
use rand::distr::Open01;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Poisson clock with exponentially distributed gaps.
///
/// Gaps are drawn by inverse CDF, `-ln(u) / rate` with `u` in `(0, 1)`,
/// from a private ChaCha8 stream, so every gap is strictly positive and
/// the stream is fully determined by the seed.
#[derive(Clone, Debug)]
pub struct ExponentialTimer {
    rate: f64,
    rng: ChaCha8Rng,
}

impl ExponentialTimer {
    /// Rate used by [`Timer::from_seed`]: one attempt per unit time on average.
    pub const DEFAULT_RATE: f64 = 1.0;

    /// Create a timer with a custom rate.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `rate` is not finite and positive.
    pub fn with_rate(seed: u64, rate: f64) -> Result<Self, String> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(format!("rate must be finite and > 0, got {rate}"));
        }
        Ok(Self {
            rate,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Attempts per unit time.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Draw the next inter-jump gap.
    pub fn next_gap(&mut self) -> f64 {
        let u: f64 = self.rng.sample(Open01);
        -u.ln() / self.rate
    }
}

impl Timer for ExponentialTimer {
    fn from_seed(seed: u64) -> Self {
        Self {
            rate: Self::DEFAULT_RATE,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn jump_times(&mut self, horizon: f64) -> Vec<f64> {
        let mut times = Vec::new();
        if horizon.is_nan() || horizon <= 0.0 {
            return times;
        }
        let mut t = self.next_gap();
        while t < horizon {
            times.push(t);
            t += self.next_gap();
        }
        times
    }
}

/// Deterministic clock firing at `period, 2 * period, ...`.
///
/// Ignores its seed. Two particles with the same period attempt their
/// jumps at exactly the same instants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodicTimer {
    period: f64,
}

impl PeriodicTimer {
    /// Period used by [`Timer::from_seed`].
    pub const DEFAULT_PERIOD: f64 = 1.0;

    /// Create a timer with a custom period.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `period` is not finite and positive.
    pub fn with_period(period: f64) -> Result<Self, String> {
        if !period.is_finite() || period <= 0.0 {
            return Err(format!("period must be finite and > 0, got {period}"));
        }
        Ok(Self { period })
    }

    /// Time between attempts.
    pub fn period(&self) -> f64 {
        self.period
    }
}

impl Timer for PeriodicTimer {
    fn from_seed(_seed: u64) -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
        }
    }

    fn jump_times(&mut self, horizon: f64) -> Vec<f64> {
        // Multiply rather than accumulate so ticks land on exact multiples.
        (1u64..)
            .map(|k| k as f64 * self.period)
            .take_while(|&t| t < horizon)
            .collect()
    }
}
