use crate::error::FlowError;
use crate::state::Segment;
use crate::utils::fixed_point::capped_amount_for_time;

/// Vested amount of a single segment `elapsed_seconds` after its checkpoint.
///
/// Cancelled segments and non-positive deltas return the checkpointed value.
/// The result is capped at `segment.amount`.
pub fn evaluate_segment(segment: &Segment, elapsed_seconds: i64) -> Result<u64, FlowError> {
    if segment.cancelled || elapsed_seconds <= 0 {
        return Ok(segment.vested);
    }
    let unvested = segment.unvested()?;
    let additional =
        capped_amount_for_time(elapsed_seconds as u128, segment.rate_per_second, unvested);
    Ok(segment.vested + additional)
}
