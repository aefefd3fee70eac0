use crate::error::FlowError;
use crate::state::Stream;
use crate::utils::fees::{
    compute_rate, compute_remaining_duration, compute_upgrade_cost, UpgradeCost,
};
use crate::vesting::evaluate_stream_breakdown;

/// Price of moving one segment to a new rate, as of `now`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpgradeQuote {
    pub segment_index: usize,
    /// Real-time unvested amount of the segment.
    pub unvested: u64,
    pub current_rate: u128,
    pub new_rate: u128,
    /// Seconds the segment still needs at its current rate.
    pub remaining_duration: u128,
    pub cost: UpgradeCost,
}

pub fn quote_segment_upgrade(
    stream: &Stream,
    segment_index: usize,
    new_amount: u64,
    new_duration_seconds: i64,
    now: i64,
) -> Result<UpgradeQuote, FlowError> {
    let segment = stream.segment(segment_index)?;
    let breakdown = evaluate_stream_breakdown(stream, now)?;
    let live = breakdown.segments[segment_index];
    if live.is_complete {
        return Err(FlowError::SegmentComplete);
    }

    let unvested = segment.amount - live.vested;
    let new_rate = compute_rate(new_amount, new_duration_seconds)?;
    let current_rate = segment.rate_per_second;

    Ok(UpgradeQuote {
        segment_index,
        unvested,
        current_rate,
        new_rate,
        remaining_duration: compute_remaining_duration(unvested, current_rate)?,
        cost: compute_upgrade_cost(unvested, current_rate, new_rate)?,
    })
}
