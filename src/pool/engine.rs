//! The pool engine: deposit/withdraw accounting and swap orchestration.
//!
//! The engine owns no asset balances. Reserves are the asset ledger's
//! current balances of the pool's custody account, read once at the
//! start of each operation; the claim-share supply and the swap counter
//! are the only state held here.
//!
//! # Effect Ordering
//!
//! Every operation validates all preconditions first, then finalizes
//! its internal accounting (share mint/burn, counter increment/reset),
//! and only then issues ledger transfers. A ledger implementation that
//! re-enters the pool mid-transfer therefore observes consistent
//! post-mutation state: a withdrawer's shares are already burned before
//! the first outbound push, and a depositor's shares are already minted
//! before the first pull. The host execution environment serializes
//! operations against a pool and discards the effects of a failed
//! operation as a unit.

use crate::domain::{AccountId, Amount, AssetId, AssetPair, Deadline, Rounding, Shares};
use crate::error::{PoolError, Result};
use crate::math::swap;
use crate::traits::{AssetLedger, Clock, LedgerError};

use super::{ShareSupply, SwapCounter};

/// Anti-dust floor on every deposit's base amount.
pub const MIN_BASE_LIQUIDITY: Amount = Amount::new(100);

/// Flat loyalty payout, in units of the swap's output asset.
///
/// Deliberately not scaled to the asset: the payout is one raw unit
/// whatever the asset's economic size.
pub const SWAP_BONUS: Amount = Amount::new(1);

/// Funding state of a pool, derived from the share supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolState {
    /// No shares outstanding; both reserves are logically zero.
    Empty,
    /// Shares outstanding; both reserves strictly positive.
    Funded,
}

/// A two-asset constant-product pool.
///
/// Generic over the asset-custody collaborator and the time source so
/// the engine can be exercised against an in-memory ledger and a
/// pinned clock.
///
/// # Examples
///
/// ```
/// use pairpool::clock::ManualClock;
/// use pairpool::domain::{
///     AccountId, Amount, AssetId, AssetPair, Deadline, Shares, Timestamp,
/// };
/// use pairpool::ledger::InMemoryLedger;
/// use pairpool::pool::PoolEngine;
///
/// let base = AssetId::from_bytes([1u8; 32]);
/// let quote = AssetId::from_bytes([2u8; 32]);
/// let pair = AssetPair::new(base, quote).expect("distinct assets");
/// let pool_account = AccountId::from_bytes([0xAAu8; 32]);
/// let provider = AccountId::from_bytes([0xBBu8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.credit(base, provider, Amount::new(1_000));
/// ledger.credit(quote, provider, Amount::new(1_000));
///
/// let clock = ManualClock::starting_at(Timestamp::from_secs(1_000));
/// let mut pool = PoolEngine::new(pair, pool_account, ledger, clock);
///
/// let deadline = Deadline::at(Timestamp::from_secs(2_000));
/// let minted = pool
///     .deposit(provider, Amount::new(100), Shares::new(1), Amount::new(100), deadline)
///     .expect("bootstrap deposit");
/// assert_eq!(minted, Shares::new(100));
/// ```
#[derive(Debug)]
pub struct PoolEngine<L, C> {
    pair: AssetPair,
    account: AccountId,
    ledger: L,
    clock: C,
    shares: ShareSupply,
    counter: SwapCounter,
}

impl<L: AssetLedger, C: Clock> PoolEngine<L, C> {
    /// Creates a pool for the given pair, with custody of balances held
    /// under `account` on the ledger.
    ///
    /// The external registry guarantees at most one pool per asset;
    /// nothing here depends on that.
    pub fn new(pair: AssetPair, account: AccountId, ledger: L, clock: C) -> Self {
        Self {
            pair,
            account,
            ledger,
            clock,
            shares: ShareSupply::new(),
            counter: SwapCounter::new(),
        }
    }

    // -- views --------------------------------------------------------------

    /// The pool's registered asset pair.
    #[must_use]
    pub const fn assets(&self) -> AssetPair {
        self.pair
    }

    /// The ledger account holding the pool's reserves.
    #[must_use]
    pub const fn pool_account(&self) -> AccountId {
        self.account
    }

    /// Total outstanding claim shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.shares.total()
    }

    /// The holder's claim-share balance.
    #[must_use]
    pub fn shares_of(&self, holder: AccountId) -> Shares {
        self.shares.balance_of(holder)
    }

    /// Funding state derived from the share supply.
    #[must_use]
    pub fn state(&self) -> PoolState {
        if self.shares.total().is_zero() {
            PoolState::Empty
        } else {
            PoolState::Funded
        }
    }

    /// Current swap-counter value, in `[0, BONUS_INTERVAL)`.
    #[must_use]
    pub const fn swap_count(&self) -> u32 {
        self.counter.count()
    }

    /// The anti-dust floor applied to deposit base amounts.
    #[must_use]
    pub const fn min_base_liquidity() -> Amount {
        MIN_BASE_LIQUIDITY
    }

    /// Current (base, quote) reserves: the ledger's balances of the
    /// pool account, read fresh.
    #[must_use]
    pub fn reserves(&self) -> (Amount, Amount) {
        (
            self.ledger.balance_of(self.pair.base(), self.account),
            self.ledger.balance_of(self.pair.quote(), self.account),
        )
    }

    /// Cost of one base unit in quote units, through the fee-bearing
    /// forward quote.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticFault`] if the pool is unfunded.
    pub fn price_base_in_quote(&self) -> Result<Amount> {
        let (reserve_base, reserve_quote) = self.reserves();
        swap::output_given_input(Amount::new(1), reserve_base, reserve_quote)
    }

    /// Cost of one quote unit in base units, through the fee-bearing
    /// forward quote.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::ArithmeticFault`] if the pool is unfunded.
    pub fn price_quote_in_base(&self) -> Result<Amount> {
        let (reserve_base, reserve_quote) = self.reserves();
        swap::output_given_input(Amount::new(1), reserve_quote, reserve_base)
    }

    /// Borrows the underlying ledger.
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Mutably borrows the underlying ledger.
    ///
    /// Intended for test scaffolding (funding accounts on the in-memory
    /// ledger); a custody backend shared with other components would be
    /// accessed through its own handle instead.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    /// Borrows the engine's clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    // -- liquidity ----------------------------------------------------------

    /// Deposits `base_amount` of base plus the matching quote leg,
    /// minting claim shares to the caller.
    ///
    /// On the first deposit (bootstrap) the caller fixes the initial
    /// price ratio: the quote leg is `max_quote` verbatim and shares
    /// minted equal `base_amount`. On a funded pool the quote leg is
    /// derived from the current reserve ratio and shares are minted
    /// pro rata; `max_quote` bounds the quote cost and `min_shares`
    /// bounds the mint.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DeadlineExpired`] if `deadline` has passed.
    /// - [`PoolError::ZeroAmount`] for a zero base amount, zero
    ///   `max_quote`, or (funded pool) zero `min_shares`.
    /// - [`PoolError::BelowMinimumLiquidityThreshold`] if `base_amount`
    ///   is under [`MIN_BASE_LIQUIDITY`].
    /// - [`PoolError::SlippageExceeded`] if the quote cost exceeds
    ///   `max_quote` or the mint falls short of `min_shares`.
    /// - [`PoolError::ArithmeticFault`] on overflow or a drained base
    ///   reserve.
    /// - [`PoolError::Ledger`] if either pull fails.
    pub fn deposit(
        &mut self,
        caller: AccountId,
        base_amount: Amount,
        min_shares: Shares,
        max_quote: Amount,
        deadline: Deadline,
    ) -> Result<Shares> {
        self.check_deadline(deadline)?;
        if base_amount.is_zero() {
            return Err(PoolError::ZeroAmount("base amount"));
        }
        if max_quote.is_zero() {
            return Err(PoolError::ZeroAmount("maximum quote amount"));
        }
        if base_amount < MIN_BASE_LIQUIDITY {
            return Err(PoolError::BelowMinimumLiquidityThreshold {
                minimum: MIN_BASE_LIQUIDITY,
                actual: base_amount,
            });
        }

        let total = self.shares.total();
        let (minted, quote_in) = if total.is_zero() {
            // Bootstrap: one share per base unit, quote taken verbatim.
            (Shares::new(base_amount.get()), max_quote)
        } else {
            if min_shares.is_zero() {
                return Err(PoolError::ZeroAmount("minimum shares to mint"));
            }
            let (reserve_base, reserve_quote) = self.reserves();

            let required_quote = reserve_quote
                .checked_mul(&base_amount)
                .ok_or(PoolError::ArithmeticFault("quote requirement overflow"))?
                .checked_div(&reserve_base, Rounding::Down)
                .ok_or(PoolError::ArithmeticFault(
                    "deposit against a drained base reserve",
                ))?;
            if required_quote > max_quote {
                return Err(PoolError::SlippageExceeded {
                    limit: max_quote.get(),
                    actual: required_quote.get(),
                    context: "deposit quote cost above maximum",
                });
            }

            let minted = base_amount
                .checked_mul(&total.as_amount())
                .ok_or(PoolError::ArithmeticFault("share mint overflow"))?
                .checked_div(&reserve_base, Rounding::Down)
                .ok_or(PoolError::ArithmeticFault(
                    "deposit against a drained base reserve",
                ))?;
            let minted = Shares::new(minted.get());
            if minted < min_shares {
                return Err(PoolError::SlippageExceeded {
                    limit: min_shares.get(),
                    actual: minted.get(),
                    context: "deposit minted fewer shares than minimum",
                });
            }
            (minted, required_quote)
        };

        // Both pulls must be coverable before anything mutates, so a
        // funding shortfall cannot leave shares minted against assets
        // that never arrived.
        self.ensure_caller_funds(self.pair.base(), caller, base_amount)?;
        self.ensure_caller_funds(self.pair.quote(), caller, quote_in)?;

        // Accounting precedes the pulls; see the module docs.
        self.shares.mint(caller, minted)?;
        tracing::debug!(
            caller = %caller,
            base = %base_amount,
            quote = %quote_in,
            minted = %minted,
            total = %self.shares.total(),
            "deposit"
        );
        self.ledger
            .pull(self.pair.base(), caller, self.account, base_amount)?;
        self.ledger
            .pull(self.pair.quote(), caller, self.account, quote_in)?;
        Ok(minted)
    }

    /// Burns `shares_to_burn` of the caller's claim shares and pays out
    /// the pro-rata portion of both reserves.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DeadlineExpired`] if `deadline` has passed.
    /// - [`PoolError::ZeroAmount`] if any of the three amounts is zero.
    /// - [`PoolError::SlippageExceeded`] if either payout is below its
    ///   minimum.
    /// - [`PoolError::ArithmeticFault`] if the pool has no outstanding
    ///   shares, the caller's balance is short, or a product overflows.
    /// - [`PoolError::Ledger`] if either push fails.
    pub fn withdraw(
        &mut self,
        caller: AccountId,
        shares_to_burn: Shares,
        min_base: Amount,
        min_quote: Amount,
        deadline: Deadline,
    ) -> Result<(Amount, Amount)> {
        self.check_deadline(deadline)?;
        if shares_to_burn.is_zero() {
            return Err(PoolError::ZeroAmount("shares to burn"));
        }
        if min_base.is_zero() {
            return Err(PoolError::ZeroAmount("minimum base out"));
        }
        if min_quote.is_zero() {
            return Err(PoolError::ZeroAmount("minimum quote out"));
        }

        let total = self.shares.total();
        if total.is_zero() {
            return Err(PoolError::ArithmeticFault(
                "withdrawal from a pool with no outstanding shares",
            ));
        }
        let (reserve_base, reserve_quote) = self.reserves();
        let base_out = shares_to_burn
            .prorata_of(reserve_base, total)
            .ok_or(PoolError::ArithmeticFault("base payout overflow"))?;
        let quote_out = shares_to_burn
            .prorata_of(reserve_quote, total)
            .ok_or(PoolError::ArithmeticFault("quote payout overflow"))?;

        if base_out < min_base {
            return Err(PoolError::SlippageExceeded {
                limit: min_base.get(),
                actual: base_out.get(),
                context: "withdrawn base below minimum",
            });
        }
        if quote_out < min_quote {
            return Err(PoolError::SlippageExceeded {
                limit: min_quote.get(),
                actual: quote_out.get(),
                context: "withdrawn quote below minimum",
            });
        }

        // Burn before any push: a reentrant caller cannot spend the
        // same shares twice.
        self.shares.burn(caller, shares_to_burn)?;
        tracing::debug!(
            caller = %caller,
            burned = %shares_to_burn,
            base = %base_out,
            quote = %quote_out,
            total = %self.shares.total(),
            "withdraw"
        );
        self.ledger
            .push(self.pair.base(), self.account, caller, base_out)?;
        self.ledger
            .push(self.pair.quote(), self.account, caller, quote_out)?;
        Ok((base_out, quote_out))
    }

    // -- swaps --------------------------------------------------------------

    /// Swaps a fixed `input_amount` of `input_asset` for at least
    /// `min_output` of `output_asset`.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DeadlineExpired`] if `deadline` has passed.
    /// - [`PoolError::ZeroAmount`] for a zero input or zero
    ///   `min_output`.
    /// - [`PoolError::InvalidAssetPair`] if either asset is outside the
    ///   pool's pair or input equals output.
    /// - [`PoolError::SlippageExceeded`] if the quoted output is below
    ///   `min_output`.
    /// - [`PoolError::ArithmeticFault`] if the pool is unfunded or the
    ///   math overflows.
    /// - [`PoolError::Ledger`] if a transfer fails.
    pub fn swap_exact_input(
        &mut self,
        caller: AccountId,
        input_asset: AssetId,
        input_amount: Amount,
        output_asset: AssetId,
        min_output: Amount,
        deadline: Deadline,
    ) -> Result<Amount> {
        self.check_deadline(deadline)?;
        if input_amount.is_zero() {
            return Err(PoolError::ZeroAmount("input amount"));
        }
        if min_output.is_zero() {
            return Err(PoolError::ZeroAmount("minimum output"));
        }
        self.pair.validate_swap(input_asset, output_asset)?;

        let reserve_in = self.ledger.balance_of(input_asset, self.account);
        let reserve_out = self.ledger.balance_of(output_asset, self.account);
        let output = swap::output_given_input(input_amount, reserve_in, reserve_out)?;
        if output < min_output {
            return Err(PoolError::SlippageExceeded {
                limit: min_output.get(),
                actual: output.get(),
                context: "swap output below minimum",
            });
        }

        self.execute_swap(caller, input_asset, input_amount, output_asset, output)?;
        Ok(output)
    }

    /// Swaps whatever input the curve demands for exactly
    /// `exact_output` of `output_asset`, returning the input charged.
    ///
    /// This path has no caller-supplied maximum-input bound; the
    /// deadline is the only brake on a stale quote.
    ///
    /// # Errors
    ///
    /// - [`PoolError::DeadlineExpired`] if `deadline` has passed.
    /// - [`PoolError::ZeroAmount`] for a zero `exact_output`.
    /// - [`PoolError::InvalidAssetPair`] if either asset is outside the
    ///   pool's pair or input equals output.
    /// - [`PoolError::ArithmeticFault`] if the requested output meets
    ///   or exceeds the output reserve, the pool is unfunded, or the
    ///   math overflows.
    /// - [`PoolError::Ledger`] if a transfer fails.
    pub fn swap_exact_output(
        &mut self,
        caller: AccountId,
        input_asset: AssetId,
        output_asset: AssetId,
        exact_output: Amount,
        deadline: Deadline,
    ) -> Result<Amount> {
        self.check_deadline(deadline)?;
        if exact_output.is_zero() {
            return Err(PoolError::ZeroAmount("output amount"));
        }
        self.pair.validate_swap(input_asset, output_asset)?;

        let reserve_in = self.ledger.balance_of(input_asset, self.account);
        let reserve_out = self.ledger.balance_of(output_asset, self.account);
        let input = swap::input_given_output(exact_output, reserve_in, reserve_out)?;

        self.execute_swap(caller, input_asset, input, output_asset, exact_output)?;
        Ok(input)
    }

    // -- internals ----------------------------------------------------------

    /// Shared swap effects: counter, bonus, record, transfers.
    ///
    /// Pull-before-push bounds the net pool drain if the outgoing
    /// transfer fails partway.
    fn execute_swap(
        &mut self,
        caller: AccountId,
        input_asset: AssetId,
        input_amount: Amount,
        output_asset: AssetId,
        output_amount: Amount,
    ) -> Result<()> {
        self.pair.validate_swap(input_asset, output_asset)?;
        self.ensure_caller_funds(input_asset, caller, input_amount)?;

        let bonus_due = self.counter.record_swap();
        if bonus_due {
            tracing::info!(
                caller = %caller,
                asset = %output_asset,
                amount = %SWAP_BONUS,
                "loyalty bonus paid"
            );
            self.ledger
                .push(output_asset, self.account, caller, SWAP_BONUS)?;
        }
        tracing::debug!(
            caller = %caller,
            input_asset = %input_asset,
            output_asset = %output_asset,
            amount_in = %input_amount,
            amount_out = %output_amount,
            swap_count = self.counter.count(),
            "swap"
        );
        self.ledger
            .pull(input_asset, caller, self.account, input_amount)?;
        self.ledger
            .push(output_asset, self.account, caller, output_amount)?;
        Ok(())
    }

    /// Confirms the caller can cover an upcoming pull, so the shortfall
    /// surfaces before any accounting mutation rather than mid-effects.
    fn ensure_caller_funds(
        &self,
        asset: AssetId,
        caller: AccountId,
        amount: Amount,
    ) -> Result<()> {
        let available = self.ledger.balance_of(asset, caller);
        if available < amount {
            return Err(PoolError::Ledger(LedgerError::InsufficientBalance {
                asset,
                holder: caller,
                needed: amount,
                available,
            }));
        }
        Ok(())
    }

    fn check_deadline(&self, deadline: Deadline) -> Result<()> {
        let now = self.clock.now();
        if deadline.is_expired(now) {
            return Err(PoolError::DeadlineExpired { deadline, now });
        }
        Ok(())
    }
}
