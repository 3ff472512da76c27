//! Raw asset amount with checked arithmetic.

use core::fmt;

use super::Rounding;

/// A raw asset amount in the smallest indivisible unit.
///
/// `Amount` carries no decimal interpretation; the engine prices and
/// transfers whole integer units. All `u128` values are valid amounts.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking. Division always
/// takes an explicit [`Rounding`] direction so no call site can lose
/// precision silently.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(250);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(350)));
/// assert_eq!(b.checked_div(&a, Rounding::Down), Some(Amount::new(2)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked division with explicit rounding direction.
    ///
    /// - [`Rounding::Down`]: floor division.
    /// - [`Rounding::Up`]: ceiling division.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0 == 0 {
            return None;
        }
        match rounding {
            Rounding::Down => Some(Self(self.0 / divisor.0)),
            Rounding::Up => {
                let q = self.0 / divisor.0;
                let r = self.0 % divisor.0;
                if r != 0 {
                    // q + 1 cannot overflow: r != 0 rules out n == MAX, d == 1.
                    Some(Self(q + 1))
                } else {
                    Some(Self(q))
                }
            }
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
