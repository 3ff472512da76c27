//! Capability interface for the asset custody collaborator.
//!
//! The engine never holds asset balances itself: reserves are whatever
//! the ledger reports for the pool's custody account, and every
//! balance-moving effect goes through this trait. Keeping the surface
//! to three methods makes custody-affecting calls auditable and lets
//! the engine be tested against an in-memory fake.

use crate::domain::{AccountId, Amount, AssetId};

/// Errors reported by an asset ledger implementation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// The owner's balance of the asset cannot cover the transfer.
    #[error("insufficient balance of asset {asset} held by {holder}: needed {needed}, available {available}")]
    InsufficientBalance {
        /// The asset being moved.
        asset: AssetId,
        /// The account whose balance fell short.
        holder: AccountId,
        /// The amount the transfer required.
        needed: Amount,
        /// The amount actually held.
        available: Amount,
    },
}

/// Balance custody for fungible assets, per asset per holder.
///
/// The pool engine consumes this contract; it does not implement it
/// beyond the in-memory reference used in tests. Implementations must
/// apply a transfer atomically: either both balances move or neither
/// does.
///
/// The engine issues transfers only after its own accounting mutations
/// are finalized, so an implementation that calls back into the pool
/// mid-transfer observes consistent post-mutation state.
pub trait AssetLedger {
    /// Returns the holder's current balance of the asset.
    fn balance_of(&self, asset: AssetId, holder: AccountId) -> Amount;

    /// Moves `amount` of `asset` from `owner` to `recipient` on the
    /// owner's standing authority (the `transferFrom` primitive).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if the owner cannot
    /// cover the amount.
    fn pull(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` from `sender`'s own balance to
    /// `recipient` (the `transfer` primitive).
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InsufficientBalance`] if the sender
    /// cannot cover the amount.
    fn push(
        &mut self,
        asset: AssetId,
        sender: AccountId,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}
