//! In-memory reference implementation of the asset ledger.
//!
//! Backs the engine in tests and examples; a real deployment supplies
//! its own custody backend behind [`AssetLedger`].

use std::collections::BTreeMap;

use crate::domain::{AccountId, Amount, AssetId};
use crate::traits::{AssetLedger, LedgerError};

/// A plain balance map: `(asset, holder) → amount`.
///
/// `pull` and `push` share one movement rule — debit the source, credit
/// the destination — differing only in whose authority the debit runs
/// under, which an in-memory ledger does not model further.
///
/// # Examples
///
/// ```
/// use pairpool::domain::{AccountId, Amount, AssetId};
/// use pairpool::ledger::InMemoryLedger;
/// use pairpool::traits::AssetLedger;
///
/// let asset = AssetId::from_bytes([1u8; 32]);
/// let alice = AccountId::from_bytes([10u8; 32]);
/// let bob = AccountId::from_bytes([11u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.credit(asset, alice, Amount::new(100));
/// ledger.push(asset, alice, bob, Amount::new(40)).expect("funded");
/// assert_eq!(ledger.balance_of(asset, alice), Amount::new(60));
/// assert_eq!(ledger.balance_of(asset, bob), Amount::new(40));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryLedger {
    balances: BTreeMap<(AssetId, AccountId), Amount>,
}

impl InMemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints `amount` of `asset` into `holder`'s balance.
    ///
    /// Test scaffolding: lets a scenario fund accounts without a
    /// counterparty. Saturates at the maximum representable balance.
    pub fn credit(&mut self, asset: AssetId, holder: AccountId, amount: Amount) {
        let entry = self.balances.entry((asset, holder)).or_insert(Amount::ZERO);
        *entry = entry.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: AccountId,
        to: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance_of(asset, from);
        let Some(remaining) = available.checked_sub(&amount) else {
            return Err(LedgerError::InsufficientBalance {
                asset,
                holder: from,
                needed: amount,
                available,
            });
        };
        self.balances.insert((asset, from), remaining);
        let entry = self.balances.entry((asset, to)).or_insert(Amount::ZERO);
        *entry = entry.checked_add(&amount).unwrap_or(Amount::MAX);
        Ok(())
    }
}

impl AssetLedger for InMemoryLedger {
    fn balance_of(&self, asset: AssetId, holder: AccountId) -> Amount {
        self.balances
            .get(&(asset, holder))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn pull(
        &mut self,
        asset: AssetId,
        owner: AccountId,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.transfer(asset, owner, recipient, amount)
    }

    fn push(
        &mut self,
        asset: AssetId,
        sender: AccountId,
        recipient: AccountId,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.transfer(asset, sender, recipient, amount)
    }
}
