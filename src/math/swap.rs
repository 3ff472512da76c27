//! Constant-product swap quoting.
//!
//! Pure functions over snapshot reserves: the engine reads reserves
//! once per operation and passes them in, so the pricing math is
//! independently testable with explicit inputs.
//!
//! The fee is 0.30%, deducted from the input amount before the pricing
//! curve is applied and retained in the pool:
//!
//! ```text
//! effective_input = input × 997
//! output = ⌊output_reserve × effective_input / (input_reserve × 1000 + effective_input)⌋
//! ```
//!
//! The inverse quote scales by `10000/997` rather than `1000/997`, so
//! the effective fee differs slightly between the two swap directions.
//! That asymmetry is part of the pricing contract and is preserved
//! exactly.

use crate::domain::{Amount, Rounding};
use crate::error::{PoolError, Result};

/// Input fraction kept after the 0.30% fee, per mille.
pub const FEE_NUMERATOR: u128 = 997;

/// Per-mille denominator for the forward quote.
pub const FEE_DENOMINATOR: u128 = 1_000;

/// Scale applied to the inverse quote's numerator.
pub const EXACT_OUTPUT_FEE_SCALE: u128 = 10_000;

/// Quotes the output amount for a fixed input against snapshot
/// reserves.
///
/// `output = ⌊output_reserve × input × 997 / (input_reserve × 1000 + input × 997)⌋`
///
/// # Errors
///
/// - [`PoolError::ZeroAmount`] if `input_amount` is zero.
/// - [`PoolError::ArithmeticFault`] if either reserve is zero or an
///   intermediate product overflows.
pub fn output_given_input(
    input_amount: Amount,
    input_reserve: Amount,
    output_reserve: Amount,
) -> Result<Amount> {
    if input_amount.is_zero() {
        return Err(PoolError::ZeroAmount("input amount"));
    }
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(PoolError::ArithmeticFault(
            "swap quote requires positive reserves",
        ));
    }

    let effective_input = input_amount
        .checked_mul(&Amount::new(FEE_NUMERATOR))
        .ok_or(PoolError::ArithmeticFault("effective input overflow"))?;

    let numerator = output_reserve
        .checked_mul(&effective_input)
        .ok_or(PoolError::ArithmeticFault("output numerator overflow"))?;

    let denominator = input_reserve
        .checked_mul(&Amount::new(FEE_DENOMINATOR))
        .and_then(|scaled| scaled.checked_add(&effective_input))
        .ok_or(PoolError::ArithmeticFault("output denominator overflow"))?;

    numerator
        .checked_div(&denominator, Rounding::Down)
        .ok_or(PoolError::ArithmeticFault("division by zero denominator"))
}

/// Quotes the input amount required to receive a fixed output against
/// snapshot reserves.
///
/// `input = ⌊input_reserve × output × 10000 / ((output_reserve − output) × 997)⌋`
///
/// # Errors
///
/// - [`PoolError::ZeroAmount`] if `output_amount` is zero.
/// - [`PoolError::ArithmeticFault`] if either reserve is zero, the
///   requested output meets or exceeds the output reserve, or an
///   intermediate product overflows.
pub fn input_given_output(
    output_amount: Amount,
    input_reserve: Amount,
    output_reserve: Amount,
) -> Result<Amount> {
    if output_amount.is_zero() {
        return Err(PoolError::ZeroAmount("output amount"));
    }
    if input_reserve.is_zero() || output_reserve.is_zero() {
        return Err(PoolError::ArithmeticFault(
            "swap quote requires positive reserves",
        ));
    }
    if output_amount >= output_reserve {
        return Err(PoolError::ArithmeticFault(
            "requested output meets or exceeds the output reserve",
        ));
    }

    let numerator = input_reserve
        .checked_mul(&output_amount)
        .and_then(|p| p.checked_mul(&Amount::new(EXACT_OUTPUT_FEE_SCALE)))
        .ok_or(PoolError::ArithmeticFault("input numerator overflow"))?;

    // output < output_reserve, so the denominator is strictly positive.
    let denominator = output_reserve
        .checked_sub(&output_amount)
        .and_then(|gap| gap.checked_mul(&Amount::new(FEE_NUMERATOR)))
        .ok_or(PoolError::ArithmeticFault("input denominator overflow"))?;

    numerator
        .checked_div(&denominator, Rounding::Down)
        .ok_or(PoolError::ArithmeticFault("division by zero denominator"))
}
