//! Exact integer helpers for RATE_SCALE fixed-point math.
//! All products are taken in u128 and every division truncates, matching the
//! ledger program bit for bit. Nothing here may touch floating point.

use crate::constants::RATE_SCALE;
use crate::error::FlowError;

/// `a * b / denom`, truncating toward zero.
pub fn mul_div(a: u128, b: u128, denom: u128) -> Result<u128, FlowError> {
    if denom == 0 {
        return Err(FlowError::InvalidRate);
    }
    a.checked_mul(b)
        .ok_or(FlowError::MathOverflow)
        .map(|p| p / denom)
}

/// Seconds needed to vest `amount` at `rate` (scaled): `amount * RATE_SCALE / rate`.
pub fn time_for_amount(amount: u128, rate: u128) -> Result<u128, FlowError> {
    if rate == 0 {
        return Err(FlowError::InvalidRate);
    }
    mul_div(amount, RATE_SCALE, rate)
}

/// Amount vested over `seconds` at `rate` (scaled): `seconds * rate / RATE_SCALE`.
pub fn amount_for_time(seconds: u128, rate: u128) -> Result<u128, FlowError> {
    mul_div(seconds, rate, RATE_SCALE)
}

/// `amount_for_time` capped at `cap`. A product too large for u128 is
/// necessarily above any u64 cap, so it saturates instead of failing.
pub fn capped_amount_for_time(seconds: u128, rate: u128, cap: u64) -> u64 {
    match seconds.checked_mul(rate) {
        Some(p) => (p / RATE_SCALE).min(cap as u128) as u64,
        None => cap,
    }
}

/// Clock deltas never run backward: negative elapsed time saturates to zero.
pub fn elapsed_seconds(from: i64, to: i64) -> u128 {
    // i128 so that extreme timestamps cannot overflow the subtraction.
    let delta = i128::from(to) - i128::from(from);
    if delta <= 0 {
        0
    } else {
        delta as u128
    }
}

pub fn to_u64(v: u128) -> Result<u64, FlowError> {
    u64::try_from(v).map_err(|_| FlowError::MathOverflow)
}

pub fn checked_add(a: u64, b: u64) -> Result<u64, FlowError> {
    a.checked_add(b).ok_or(FlowError::MathOverflow)
}
