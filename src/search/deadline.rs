//! Deadline clock polled by every search frame
//!
//! The clock never stops a timer itself. It reads a caller-supplied probe and
//! fails with [`SearchCancelled`] once the remaining time is at or below the
//! safety threshold.

use std::time::{Duration, Instant};

/// Raised when the deadline threshold is reached inside a search frame.
///
/// Inner frames pass it through with `?`; only the public entry points catch it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("search cancelled: remaining time reached the safety threshold")]
pub struct SearchCancelled;

/// Source of "time remaining in this turn".
///
/// Within one turn the reported value must be non-increasing.
pub trait TimeProbe {
    fn remaining(&self) -> Duration;
}

impl<F: Fn() -> Duration> TimeProbe for F {
    #[inline]
    fn remaining(&self) -> Duration {
        self()
    }
}

/// Counts a fixed per-turn budget down from the moment it was started.
#[derive(Debug, Clone, Copy)]
pub struct TurnTimer {
    started: Instant,
    budget: Duration,
}

impl TurnTimer {
    pub fn start(budget: Duration) -> Self {
        Self {
            started: Instant::now(),
            budget,
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// The full budget has been used up
    #[inline]
    pub fn expired(&self) -> bool {
        self.elapsed() > self.budget
    }
}

impl TimeProbe for TurnTimer {
    #[inline]
    fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.started.elapsed())
    }
}

/// Probe that never runs out
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl TimeProbe for Unlimited {
    #[inline]
    fn remaining(&self) -> Duration {
        Duration::MAX
    }
}

static UNLIMITED: Unlimited = Unlimited;

/// Remaining-time probe plus a fixed safety threshold for one turn.
#[derive(Clone, Copy)]
pub struct DeadlineClock<'a> {
    probe: &'a dyn TimeProbe,
    threshold: Duration,
}

impl<'a> DeadlineClock<'a> {
    pub fn new(probe: &'a dyn TimeProbe, threshold: Duration) -> Self {
        Self { probe, threshold }
    }

    #[inline]
    pub fn remaining(&self) -> Duration {
        self.probe.remaining()
    }

    #[inline]
    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Fail if the remaining time is at or below the threshold.
    #[inline]
    pub fn check(&self) -> Result<(), SearchCancelled> {
        if self.remaining() <= self.threshold {
            Err(SearchCancelled)
        } else {
            Ok(())
        }
    }
}

impl DeadlineClock<'static> {
    /// Clock that never cancels, for fixed-depth analysis.
    pub fn unlimited() -> Self {
        Self {
            probe: &UNLIMITED,
            threshold: Duration::ZERO,
        }
    }
}

impl std::fmt::Debug for DeadlineClock<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeadlineClock")
            .field("remaining", &self.remaining())
            .field("threshold", &self.threshold)
            .finish()
    }
}
