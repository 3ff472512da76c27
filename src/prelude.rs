//! Convenience re-exports for common types and traits.
//!
//! A single import brings the usual working set into scope:
//!
//! ```rust
//! use pairpool::prelude::*;
//! ```

pub use crate::domain::{
    AccountId, Amount, AssetId, AssetPair, Deadline, Rounding, Shares, Timestamp,
};

pub use crate::error::{PoolError, Result};

pub use crate::pool::{PoolEngine, PoolState, MIN_BASE_LIQUIDITY, SWAP_BONUS};

pub use crate::traits::{AssetLedger, Clock, LedgerError};
