use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

/// `value * bps / 10_000`, truncating.
pub fn mul_bps(value: u64, bps: u64) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .and_then(|v| u64::try_from(v).map_err(|_| error!(ErrorCode::MathOverflow)))
}

/// Constant-product output for `amount_in` against the given reserves, with
/// the pair's trading fee taken from the input. Rounds down.
pub fn quote_amount_out(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
) -> Result<u64> {
    require!(
        reserve_in > 0 && reserve_out > 0,
        ErrorCode::InsufficientLiquidity
    );
    let fee_multiplier = BPS_DENOM
        .checked_sub(fee_bps as u64)
        .ok_or_else(|| error!(ErrorCode::InvalidPairAccount))?;

    let amount_in_with_fee = (amount_in as u128)
        .checked_mul(fee_multiplier as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let numerator = amount_in_with_fee
        .checked_mul(reserve_out as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let denominator = (reserve_in as u128)
        .checked_mul(BPS_DENOM as u128)
        .and_then(|x| x.checked_add(amount_in_with_fee))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    // numerator / denominator < reserve_out, so the cast cannot truncate.
    Ok((numerator / denominator) as u64)
}
