//! The pool: engine, claim-share supply, and swap counter.

mod counter;
mod engine;
mod share_supply;

pub use counter::{SwapCounter, BONUS_INTERVAL};
pub use engine::{PoolEngine, PoolState, MIN_BASE_LIQUIDITY, SWAP_BONUS};
pub use share_supply::ShareSupply;

#[cfg(test)]
mod proptest_properties;
