//! Stream-level vesting: one shared time budget consumed by segments in order.
//!
//! The budget is `current_time - last_update_time` (floored at zero). Segments
//! are walked lowest index first; a segment that fully vests hands its unused
//! budget to the next one, a segment that only partially vests consumes the
//! rest and leaves every later segment at its checkpointed value. Cancelled
//! and already complete segments consume nothing.

use crate::error::FlowError;
use crate::state::Stream;
use crate::utils::fixed_point::{
    capped_amount_for_time, checked_add, elapsed_seconds, time_for_amount, to_u64,
};

/// Real-time totals of a stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamVesting {
    pub total_deposited: u64,
    pub total_vested: u64,
    pub total_unvested: u64,
    /// Vested but not yet withdrawn, floored at zero.
    pub claimable: u64,
    pub is_expired: bool,
}

/// Attribution of the shared budget to one segment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentVesting {
    pub index: usize,
    /// Real-time vested amount of this segment.
    pub vested: u64,
    /// Seconds of the shared budget this segment consumed.
    pub time_consumed: u64,
    pub is_complete: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamVestingBreakdown {
    pub totals: StreamVesting,
    pub segments: Vec<SegmentVesting>,
}

impl StreamVestingBreakdown {
    /// True when every segment is cancelled or fully vested (vacuously for none).
    pub fn all_segments_complete(&self) -> bool {
        self.segments.iter().all(|s| s.is_complete)
    }
}

/// Totals of `stream` as of `current_time`.
pub fn evaluate_stream(stream: &Stream, current_time: i64) -> Result<StreamVesting, FlowError> {
    evaluate_stream_breakdown(stream, current_time).map(|b| b.totals)
}

/// Totals plus an exact per-segment attribution, from a single walk.
pub fn evaluate_stream_breakdown(
    stream: &Stream,
    current_time: i64,
) -> Result<StreamVestingBreakdown, FlowError> {
    stream.validate()?;

    let mut total_deposited = stream.archived_amount;
    let mut total_vested = stream.archived_vested;
    let mut remaining_time = elapsed_seconds(stream.last_update_time, current_time);
    let mut all_complete = true;
    let mut segments = Vec::with_capacity(stream.segments.len());

    for (index, seg) in stream.segments.iter().enumerate() {
        total_deposited = checked_add(total_deposited, seg.amount)?;

        let unvested = seg.unvested()?;
        let (vested, time_consumed) = if seg.cancelled || unvested == 0 {
            (seg.vested, 0)
        } else {
            let time_needed = time_for_amount(unvested as u128, seg.rate_per_second)?;
            if remaining_time >= time_needed {
                remaining_time -= time_needed;
                (seg.amount, time_needed)
            } else {
                // remaining_time < time_needed keeps this strictly below `unvested`.
                let additional =
                    capped_amount_for_time(remaining_time, seg.rate_per_second, unvested);
                let consumed = remaining_time;
                remaining_time = 0;
                all_complete = false;
                (seg.vested + additional, consumed)
            }
        };

        total_vested = checked_add(total_vested, vested)?;
        segments.push(SegmentVesting {
            index,
            vested,
            time_consumed: to_u64(time_consumed)?,
            is_complete: seg.cancelled || vested == seg.amount,
        });
    }

    let total_unvested = total_deposited
        .checked_sub(total_vested)
        .ok_or(FlowError::InconsistentState)?;
    let claimable = total_vested.saturating_sub(stream.total_withdrawn);

    Ok(StreamVestingBreakdown {
        totals: StreamVesting {
            total_deposited,
            total_vested,
            total_unvested,
            claimable,
            is_expired: all_complete && total_unvested == 0,
        },
        segments,
    })
}
