//! Uniform random delays for arrivals and stays.

use std::time::Duration;

use rand::Rng;

/// Half-open millisecond range `[min_ms, max_ms)` sampled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min_ms: u64,
    max_ms: u64,
}

impl DelayRange {
    /// Range `[min_ms, max_ms)`. An empty range always yields `min_ms`.
    #[must_use]
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Range `[0, max_ms)`.
    #[must_use]
    pub const fn up_to(max_ms: u64) -> Self {
        Self::new(0, max_ms)
    }

    /// Always `ms`.
    #[must_use]
    pub const fn fixed(ms: u64) -> Self {
        Self::new(ms, ms)
    }

    /// Draw a delay from the thread-local generator.
    #[must_use]
    pub fn sample(&self) -> Duration {
        self.sample_with(&mut rand::rng())
    }

    /// Draw a delay from `rng`.
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        if self.max_ms <= self.min_ms {
            return Duration::from_millis(self.min_ms);
        }
        Duration::from_millis(rng.random_range(self.min_ms..self.max_ms))
    }
}
