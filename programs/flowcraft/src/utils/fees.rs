//! Rate, fee and upgrade-cost conversions.

use crate::constants::{BPS_DENOMINATOR, MAX_FEE_BPS, RATE_SCALE};
use crate::error::FlowError;
use crate::utils::fixed_point::{amount_for_time, mul_div, time_for_amount, to_u64};

/// Outcome of re-pricing a segment's remaining duration at a new rate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpgradeCost {
    /// What the remaining duration costs at the new rate.
    pub new_cost: u64,
    /// `|new_cost - unvested|`: top-up owed on upgrade, refund on downgrade.
    pub difference: u64,
    pub is_upgrade: bool,
}

fn check_fee_bps(fee_bps: i64) -> Result<u128, FlowError> {
    if !(0..=MAX_FEE_BPS).contains(&fee_bps) {
        return Err(FlowError::InvalidFeeBps);
    }
    Ok(fee_bps as u128)
}

/// Protocol fee taken from a gross deposit: `amount * fee_bps / 10_000`.
pub fn compute_fee(amount: u64, fee_bps: i64) -> Result<u64, FlowError> {
    let bps = check_fee_bps(fee_bps)?;
    to_u64(mul_div(amount as u128, bps, BPS_DENOMINATOR)?)
}

/// Amount left after the protocol fee.
pub fn compute_net_amount(amount: u64, fee_bps: i64) -> Result<u64, FlowError> {
    let fee = compute_fee(amount, fee_bps)?;
    // fee <= amount since fee_bps <= BPS_DENOMINATOR.
    amount.checked_sub(fee).ok_or(FlowError::MathOverflow)
}

/// Scaled per-second rate that vests `amount` over `duration_seconds`.
pub fn compute_rate(amount: u64, duration_seconds: i64) -> Result<u128, FlowError> {
    if duration_seconds <= 0 {
        return Err(FlowError::InvalidDuration);
    }
    mul_div(amount as u128, RATE_SCALE, duration_seconds as u128)
}

/// Seconds left until `unvested` is fully vested at `rate_per_second`.
pub fn compute_remaining_duration(unvested: u64, rate_per_second: u128) -> Result<u128, FlowError> {
    time_for_amount(unvested as u128, rate_per_second)
}

/// Re-prices the remaining duration of a segment at `new_rate`.
///
/// Remaining *time* is preserved, not remaining amount: a higher rate over the
/// same time costs more (upgrade), a lower one costs less (downgrade).
pub fn compute_upgrade_cost(
    unvested: u64,
    current_rate: u128,
    new_rate: u128,
) -> Result<UpgradeCost, FlowError> {
    if new_rate == 0 {
        return Err(FlowError::InvalidRate);
    }
    let remaining = compute_remaining_duration(unvested, current_rate)?;
    let new_cost = to_u64(amount_for_time(remaining, new_rate)?)?;

    let is_upgrade = new_cost > unvested;
    let difference = if is_upgrade {
        new_cost - unvested
    } else {
        unvested - new_cost
    };

    Ok(UpgradeCost {
        new_cost,
        difference,
        is_upgrade,
    })
}
