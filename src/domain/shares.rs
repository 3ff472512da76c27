//! Claim-share units for pool ownership.

use core::fmt;

use super::{Amount, Rounding};

/// Fungible claim units representing proportional ownership of pool
/// reserves.
///
/// `Shares` is distinct from [`Amount`] because it counts claims on the
/// pool, not units of either held asset. All `u128` values are valid
/// share quantities.
///
/// # Examples
///
/// ```
/// use pairpool::domain::Shares;
///
/// let a = Shares::new(100);
/// let b = Shares::new(50);
/// assert_eq!(a.checked_add(&b), Some(Shares::new(150)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the share quantity is zero.
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

    /// Reinterprets the share count as an [`Amount`].
    ///
    /// The bootstrap deposit mints one share per base unit, so the two
    /// scales coincide and conversions appear in the pro-rata formulas.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }

    /// Pro-rata portion of `reserve` owned by this many shares out of
    /// `total`, rounded down.
    ///
    /// Returns `None` if `total` is zero or the intermediate product
    /// overflows.
    #[must_use]
    pub fn prorata_of(&self, reserve: Amount, total: Shares) -> Option<Amount> {
        self.as_amount()
            .checked_mul(&reserve)?
            .checked_div(&total.as_amount(), Rounding::Down)
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
