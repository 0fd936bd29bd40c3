//! Wall-clock sources for the color cycle.
//!
//! The field only reads time to pick a burst color, so swapping the clock is
//! enough to make colors reproducible.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A source of wall-clock time in seconds.
pub trait Clock: Send + Sync {
    /// Returns the current time in seconds.
    fn now_secs(&self) -> f64;
}

/// Seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64())
    }
}

/// A clock that only moves when told to.
///
/// Clones share the same time, so a test can keep one handle while the field
/// owns another.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock reading `secs`.
    #[must_use]
    pub fn new(secs: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(secs.to_bits())),
        }
    }

    /// Sets the current time.
    pub fn set(&self, secs: f64) {
        self.bits.store(secs.to_bits(), Ordering::Relaxed);
    }

    /// Moves the clock forward by `secs`.
    pub fn advance(&self, secs: f64) {
        self.set(self.now_secs() + secs);
    }
}

impl Clock for ManualClock {
    fn now_secs(&self) -> f64 {
        f64::from_bits(self.bits.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(1.5);
        let handle = clock.clone();

        handle.advance(2.0);
        assert!((clock.now_secs() - 3.5).abs() < f64::EPSILON);

        clock.set(10.0);
        assert!((handle.now_secs() - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_system_clock_is_past_epoch() {
        assert!(SystemClock.now_secs() > 1_600_000_000.0);
    }
}
