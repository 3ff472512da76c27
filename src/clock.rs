//! Clock implementations: the OS clock and a test-controllable one.

use core::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;
use crate::traits::Clock;

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Timestamp::from_secs(secs)
    }
}

/// A clock pinned to an explicit time, settable through a shared
/// reference so tests can advance it while the engine owns it.
///
/// # Examples
///
/// ```
/// use pairpool::clock::ManualClock;
/// use pairpool::domain::Timestamp;
/// use pairpool::traits::Clock;
///
/// let clock = ManualClock::starting_at(Timestamp::from_secs(100));
/// clock.advance(50);
/// assert_eq!(clock.now(), Timestamp::from_secs(150));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    /// Creates a clock reading the given time.
    #[must_use]
    pub fn starting_at(when: Timestamp) -> Self {
        Self {
            now: Cell::new(when.as_secs()),
        }
    }

    /// Pins the clock to `when`.
    pub fn set(&self, when: Timestamp) {
        self.now.set(when.as_secs());
    }

    /// Moves the clock forward by `secs`, saturating at the maximum.
    pub fn advance(&self, secs: u64) {
        self.now.set(self.now.get().saturating_add(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.now.get())
    }
}
