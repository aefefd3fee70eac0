//! Checkpoint and compaction folds over a stream snapshot.
//! Both return a new snapshot; the input is never mutated.

use crate::constants::MAX_SEGMENTS;
use crate::error::FlowError;
use crate::state::Stream;
use crate::utils::fixed_point::checked_add;
use crate::vesting::stream::evaluate_stream_breakdown;

/// Writes the real-time vested amount of every segment back into the snapshot
/// and moves `last_update_time` to `now` (never backward).
pub fn checkpoint_stream(stream: &Stream, now: i64) -> Result<Stream, FlowError> {
    let breakdown = evaluate_stream_breakdown(stream, now)?;

    let mut next = stream.clone();
    for (seg, live) in next.segments.iter_mut().zip(&breakdown.segments) {
        seg.vested = live.vested;
    }
    next.last_update_time = now.max(stream.last_update_time);
    Ok(next)
}

/// Folds every segment of a completed stream into the archived totals and
/// clears the segment list, so that a reactivation starts from index 0.
pub fn fold_expired_stream(stream: &Stream, now: i64) -> Result<Stream, FlowError> {
    let breakdown = evaluate_stream_breakdown(stream, now)?;
    if !breakdown.all_segments_complete() {
        return Err(FlowError::StreamNotExpired);
    }

    let folded = stream.segments.len() as u64;
    Ok(Stream {
        archived_count: stream
            .archived_count
            .checked_add(folded)
            .ok_or(FlowError::MathOverflow)?,
        archived_amount: breakdown.totals.total_deposited,
        archived_vested: breakdown.totals.total_vested,
        last_update_time: now.max(stream.last_update_time),
        current_segment_index: 0,
        segments: Vec::new(),
        ..stream.clone()
    })
}

/// Index at which the next subscription's segment will land.
pub fn next_segment_index(stream: &Stream, now: i64) -> Result<usize, FlowError> {
    let breakdown = evaluate_stream_breakdown(stream, now)?;
    if breakdown.all_segments_complete() {
        return Ok(0);
    }
    if stream.segments.len() >= MAX_SEGMENTS {
        return Err(FlowError::SegmentLimitExceeded);
    }
    Ok(stream.segments.len())
}

/// Vested total as stored at the last checkpoint, without real-time accrual.
pub fn checkpointed_vested(stream: &Stream) -> Result<u64, FlowError> {
    stream
        .segments
        .iter()
        .try_fold(stream.archived_vested, |acc, seg| checked_add(acc, seg.vested))
}
