//! # pairpool
//!
//! A two-asset constant-product AMM engine: providers deposit a pair of
//! fungible assets for proportional claim shares, traders swap one
//! asset for the other against the pool's reserves, and a 0.30% fee on
//! every swap accrues to the pool. Every 10th completed swap also pays
//! the trader a flat loyalty bonus from reserves.
//!
//! The engine holds no balances of its own. Asset custody lives behind
//! the [`traits::AssetLedger`] capability, and reserves are whatever
//! the ledger reports for the pool's account at the start of each
//! operation. Time comes from a [`traits::Clock`], so deadline handling
//! is testable without the OS clock.
//!
//! # Quick Start
//!
//! ```rust
//! use pairpool::clock::ManualClock;
//! use pairpool::domain::{
//!     AccountId, Amount, AssetId, AssetPair, Deadline, Shares, Timestamp,
//! };
//! use pairpool::ledger::InMemoryLedger;
//! use pairpool::pool::PoolEngine;
//!
//! // 1. Two distinct assets, fixed base/quote roles.
//! let base = AssetId::from_bytes([1u8; 32]);
//! let quote = AssetId::from_bytes([2u8; 32]);
//! let pair = AssetPair::new(base, quote).expect("distinct assets");
//!
//! // 2. A funded ledger and a pinned clock.
//! let provider = AccountId::from_bytes([0xB1u8; 32]);
//! let trader = AccountId::from_bytes([0xB2u8; 32]);
//! let mut ledger = InMemoryLedger::new();
//! for account in [provider, trader] {
//!     ledger.credit(base, account, Amount::new(10_000));
//!     ledger.credit(quote, account, Amount::new(10_000));
//! }
//! let clock = ManualClock::starting_at(Timestamp::from_secs(1_000));
//!
//! // 3. The pool, with custody under its own ledger account.
//! let pool_account = AccountId::from_bytes([0xAAu8; 32]);
//! let mut pool = PoolEngine::new(pair, pool_account, ledger, clock);
//!
//! // 4. Bootstrap: the first deposit fixes the price ratio.
//! let deadline = Deadline::at(Timestamp::from_secs(2_000));
//! let minted = pool
//!     .deposit(provider, Amount::new(1_000), Shares::new(1), Amount::new(1_000), deadline)
//!     .expect("bootstrap deposit");
//! assert_eq!(minted, Shares::new(1_000));
//!
//! // 5. Swap 100 quote units for base.
//! let received = pool
//!     .swap_exact_input(trader, quote, Amount::new(100), base, Amount::new(1), deadline)
//!     .expect("swap");
//! assert!(received.get() > 0);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Caller     │  deposit / withdraw / swap / views
//! └──────┬───────┘
//!        ▼
//! ┌──────────────┐   ShareSupply (mint/burn)
//! │  PoolEngine   │─▶ SwapCounter (every-10th bonus)
//! └──────┬───────┘   math::swap  (pure pricing)
//!        ▼
//! ┌──────────────┐
//! │  AssetLedger  │  balance_of / pull / push  (external custody)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetPair`](domain::AssetPair), [`Deadline`](domain::Deadline), … |
//! | [`traits`] | Capability seams: [`AssetLedger`](traits::AssetLedger), [`Clock`](traits::Clock) |
//! | [`math`]   | Pure constant-product quoting over snapshot reserves |
//! | [`pool`]   | [`PoolEngine`](pool::PoolEngine), claim-share supply, swap counter |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) reference custody for tests |
//! | [`clock`]  | [`SystemClock`](clock::SystemClock), [`ManualClock`](clock::ManualClock) |
//! | [`error`]  | [`PoolError`](error::PoolError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod clock;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;
