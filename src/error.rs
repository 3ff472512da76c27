//! Unified error type for the pool engine.
//!
//! Every fallible operation across the crate returns [`PoolError`].
//! Variants carry the threshold and actual values involved so a caller
//! can reconstruct the failing condition from the error alone. All
//! failures abort the operation before any ledger transfer is issued.

use crate::domain::{Amount, Deadline, Timestamp};
use crate::traits::LedgerError;

/// Convenience alias for results carrying a [`PoolError`].
pub type Result<T> = core::result::Result<T, PoolError>;

/// Errors produced by pool operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// The caller-supplied deadline had already passed at entry.
    #[error("deadline {deadline} expired: current time is {now}")]
    DeadlineExpired {
        /// The supplied bound.
        deadline: Deadline,
        /// The engine clock's reading at entry.
        now: Timestamp,
    },

    /// An amount argument that must be positive was zero.
    #[error("{0} must be greater than zero")]
    ZeroAmount(&'static str),

    /// A deposit's base amount fell below the anti-dust floor.
    #[error("base deposit of {actual} is below the minimum liquidity threshold of {minimum}")]
    BelowMinimumLiquidityThreshold {
        /// The configured floor.
        minimum: Amount,
        /// The offered base amount.
        actual: Amount,
    },

    /// A computed amount violated a caller-supplied bound: a deposit
    /// cost more quote or minted fewer shares than allowed, or a
    /// withdraw/swap produced less output than required.
    #[error("{context}: limit {limit}, actual {actual}")]
    SlippageExceeded {
        /// The caller's bound.
        limit: u128,
        /// The computed value that violated it.
        actual: u128,
        /// Which bound was violated.
        context: &'static str,
    },

    /// An asset outside the pool's registered pair, or an input asset
    /// equal to the output asset.
    #[error("invalid asset pair: {0}")]
    InvalidAssetPair(&'static str),

    /// Integer arithmetic could not proceed: division by a non-positive
    /// divisor (e.g. requested output at or above the output reserve),
    /// overflow, or a share burn exceeding the holder's balance.
    #[error("arithmetic fault: {0}")]
    ArithmeticFault(&'static str),

    /// The asset ledger collaborator refused a transfer.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
