//! Ordered pair of the pool's two registered assets.

use super::AssetId;
use crate::error::PoolError;

/// The ordered (base, quote) pair a pool trades, fixed at creation.
///
/// Unlike a canonically-sorted pair, the base/quote roles are
/// positional: deposits are denominated in base units and the quote leg
/// is derived from the current reserve ratio. The two assets must be
/// distinct.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AssetId, AssetPair};
///
/// let base = AssetId::from_bytes([1u8; 32]);
/// let quote = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(base, quote).expect("distinct assets");
/// assert_eq!(pair.base(), base);
/// assert_eq!(pair.quote(), quote);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    base: AssetId,
    quote: AssetId,
}

impl AssetPair {
    /// Creates a new `AssetPair` with the given base/quote roles.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAssetPair`] if both assets are the
    /// same.
    pub fn new(base: AssetId, quote: AssetId) -> Result<Self, PoolError> {
        if base == quote {
            return Err(PoolError::InvalidAssetPair(
                "pool requires two distinct assets",
            ));
        }
        Ok(Self { base, quote })
    }

    /// Returns the base asset.
    #[must_use]
    pub const fn base(&self) -> AssetId {
        self.base
    }

    /// Returns the quote asset.
    #[must_use]
    pub const fn quote(&self) -> AssetId {
        self.quote
    }

    /// Returns `true` if the given asset is one of the pair.
    #[must_use]
    pub fn contains(&self, asset: AssetId) -> bool {
        self.base == asset || self.quote == asset
    }

    /// Returns the counterpart of `asset` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAssetPair`] if `asset` is not in the
    /// pair.
    pub fn other(&self, asset: AssetId) -> Result<AssetId, PoolError> {
        if asset == self.base {
            Ok(self.quote)
        } else if asset == self.quote {
            Ok(self.base)
        } else {
            Err(PoolError::InvalidAssetPair("asset is not part of this pool"))
        }
    }

    /// Validates a swap leg: both assets registered and distinct.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidAssetPair`] if either asset is
    /// outside the pair or the input equals the output.
    pub fn validate_swap(&self, input: AssetId, output: AssetId) -> Result<(), PoolError> {
        if input == output {
            return Err(PoolError::InvalidAssetPair(
                "input and output assets must differ",
            ));
        }
        if !self.contains(input) {
            return Err(PoolError::InvalidAssetPair(
                "input asset is not part of this pool",
            ));
        }
        if !self.contains(output) {
            return Err(PoolError::InvalidAssetPair(
                "output asset is not part of this pool",
            ));
        }
        Ok(())
    }
}
