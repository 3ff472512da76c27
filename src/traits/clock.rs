//! Time source capability for deadline evaluation.

use crate::domain::Timestamp;

/// Supplies the current time for the engine's single entry-point
/// deadline check.
///
/// Abstracted behind a trait so tests can pin or advance time without
/// touching the OS clock.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}
