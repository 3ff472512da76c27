//! Fungible claim-share accounting.
//!
//! A standalone mint/burn/balance/total-supply module, deliberately
//! free of any transfer or approval machinery: shares change hands only
//! by being minted to depositors and burned from withdrawers.

use std::collections::BTreeMap;

use crate::domain::{AccountId, Shares};
use crate::error::{PoolError, Result};

/// The outstanding claim-share supply for one pool.
///
/// Invariant: the total equals the sum of all holder balances, and is
/// zero exactly when the pool is empty.
#[derive(Debug, Clone, Default)]
pub struct ShareSupply {
    balances: BTreeMap<AccountId, Shares>,
    total: Shares,
}

impl ShareSupply {
    /// Creates an empty supply.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total outstanding shares.
    #[must_use]
    pub const fn total(&self) -> Shares {
        self.total
    }

    /// Returns the holder's share balance.
    #[must_use]
    pub fn balance_of(&self, holder: AccountId) -> Shares {
        self.balances.get(&holder).copied().unwrap_or(Shares::ZERO)
    }

    /// Mints `amount` shares to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticFault`] if the total or the
    /// holder balance would overflow.
    pub fn mint(&mut self, to: AccountId, amount: Shares) -> Result<()> {
        let new_total = self
            .total
            .checked_add(&amount)
            .ok_or(PoolError::ArithmeticFault("share supply overflow"))?;
        let balance = self.balance_of(to);
        let new_balance = balance
            .checked_add(&amount)
            .ok_or(PoolError::ArithmeticFault("share balance overflow"))?;
        self.total = new_total;
        self.balances.insert(to, new_balance);
        Ok(())
    }

    /// Burns `amount` shares from `from`.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticFault`] if the holder's balance
    /// is below `amount`.
    pub fn burn(&mut self, from: AccountId, amount: Shares) -> Result<()> {
        let balance = self.balance_of(from);
        let new_balance = balance.checked_sub(&amount).ok_or(PoolError::ArithmeticFault(
            "share burn exceeds holder balance",
        ))?;
        // Total >= any single balance by construction, so this cannot fail
        // after the balance check above.
        let new_total = self
            .total
            .checked_sub(&amount)
            .ok_or(PoolError::ArithmeticFault("share supply underflow"))?;
        self.total = new_total;
        if new_balance.is_zero() {
            self.balances.remove(&from);
        } else {
            self.balances.insert(from, new_balance);
        }
        Ok(())
    }
}
