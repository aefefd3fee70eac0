use anchor_lang::prelude::Pubkey;

use crate::error::FlowError;
use crate::state::Stream;
use crate::utils::format::format_token_amount;
use crate::utils::time::{datetime_from_unix, DateTimeUtc};
use crate::vesting::{checkpointed_vested, evaluate_stream_breakdown, StreamVestingBreakdown};

/// Display row for one segment, using its exactly attributed real-time vested amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentInfo {
    pub index: usize,
    pub tier: String,
    pub payer: Pubkey,
    pub amount: u64,
    /// Real-time vested amount.
    pub vested: u64,
    pub unvested: u64,
    /// Vested amount stored at the stream's last checkpoint.
    pub checkpoint_vested: u64,
    pub rate_per_second: u128,
    pub cancelled: bool,
    pub is_complete: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamInfo {
    pub address: Pubkey,
    pub pool: Pubkey,
    pub subscriber: Pubkey,
    pub start_time: i64,
    pub start_date: DateTimeUtc,
    pub total_deposited: u64,
    pub total_vested: u64,
    pub total_unvested: u64,
    pub total_withdrawn: u64,
    pub claimable: u64,
    /// Vested total as of the last checkpoint, before real-time accrual.
    pub checkpointed_vested: u64,
    pub active_segments: usize,
    pub cancelled_segments: usize,
    pub is_expired: bool,
    pub segments: Vec<SegmentInfo>,
}

/// Stream totals rendered in whole-token units.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamAmountsDisplay {
    pub deposited: String,
    pub vested: String,
    pub unvested: String,
    pub withdrawn: String,
    pub claimable: String,
}

impl StreamInfo {
    /// `decimals` is the deposit mint's decimals.
    pub fn display_amounts(&self, decimals: u8) -> StreamAmountsDisplay {
        StreamAmountsDisplay {
            deposited: format_token_amount(self.total_deposited, decimals),
            vested: format_token_amount(self.total_vested, decimals),
            unvested: format_token_amount(self.total_unvested, decimals),
            withdrawn: format_token_amount(self.total_withdrawn, decimals),
            claimable: format_token_amount(self.claimable, decimals),
        }
    }
}

pub fn build_segment_infos(
    stream: &Stream,
    breakdown: &StreamVestingBreakdown,
) -> Vec<SegmentInfo> {
    stream
        .segments
        .iter()
        .zip(&breakdown.segments)
        .map(|(seg, live)| SegmentInfo {
            index: live.index,
            tier: seg.tier.clone(),
            payer: seg.payer,
            amount: seg.amount,
            vested: live.vested,
            // The breakdown caps vested at amount.
            unvested: seg.amount - live.vested,
            checkpoint_vested: seg.vested,
            rate_per_second: seg.rate_per_second,
            cancelled: seg.cancelled,
            is_complete: live.vested == seg.amount || seg.cancelled,
        })
        .collect()
}

/// Real-time detail view of a stream as of `now`.
pub fn build_stream_info(
    address: Pubkey,
    stream: &Stream,
    now: i64,
) -> Result<StreamInfo, FlowError> {
    let breakdown = evaluate_stream_breakdown(stream, now)?;
    let segments = build_segment_infos(stream, &breakdown);
    let totals = breakdown.totals;

    Ok(StreamInfo {
        address,
        pool: stream.pool,
        subscriber: stream.subscriber,
        start_time: stream.start_time,
        start_date: datetime_from_unix(stream.start_time)?,
        total_deposited: totals.total_deposited,
        total_vested: totals.total_vested,
        total_unvested: totals.total_unvested,
        total_withdrawn: stream.total_withdrawn,
        claimable: totals.claimable,
        checkpointed_vested: checkpointed_vested(stream)?,
        active_segments: segments.iter().filter(|s| !s.is_complete).count(),
        cancelled_segments: segments.iter().filter(|s| s.cancelled).count(),
        is_expired: totals.is_expired,
        segments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Segment;
    use crate::utils::fees::compute_rate;
    use crate::vesting::evaluate_stream;

    fn seg(amount: u64, duration: i64) -> Segment {
        Segment {
            tier: "basic".to_string(),
            rate_per_second: compute_rate(amount, duration).unwrap(),
            amount,
            ..Segment::default()
        }
    }

    fn mixed_stream() -> Stream {
        let mut cancelled = seg(800, 80);
        cancelled.vested = 200;
        cancelled.cancelled = true;
        Stream {
            start_time: 1_700_000_000,
            last_update_time: 1_700_000_000,
            archived_amount: 300,
            archived_vested: 300,
            total_withdrawn: 100,
            segments: vec![seg(1_000, 100), cancelled, seg(1_000, 100)],
            ..Stream::default()
        }
    }

    #[test]
    fn per_segment_rows_match_stream_totals() {
        let s = mixed_stream();
        let now = s.last_update_time + 130;
        let info = build_stream_info(Pubkey::new_unique(), &s, now).unwrap();
        let totals = evaluate_stream(&s, now).unwrap();

        let segment_vested: u64 = info.segments.iter().map(|r| r.vested).sum();
        let segment_amount: u64 = info.segments.iter().map(|r| r.amount).sum();
        assert_eq!(s.archived_vested + segment_vested, totals.total_vested);
        assert_eq!(s.archived_amount + segment_amount, totals.total_deposited);
        assert_eq!(info.total_vested, totals.total_vested);
        assert_eq!(info.claimable, totals.claimable);
        assert_eq!(info.is_expired, totals.is_expired);

        assert_eq!(info.segments[0].vested, 1_000);
        assert_eq!(info.segments[1].vested, 200);
        assert_eq!(info.segments[2].vested, 300);
        assert_eq!(info.segments[2].unvested, 700);
        assert_eq!(info.segments[2].checkpoint_vested, 0);
        assert_eq!(info.checkpointed_vested, 500);
    }

    #[test]
    fn counts_active_and_cancelled_segments() {
        let s = mixed_stream();
        let info =
            build_stream_info(Pubkey::new_unique(), &s, s.last_update_time + 130).unwrap();
        assert_eq!(info.active_segments, 1);
        assert_eq!(info.cancelled_segments, 1);
        assert!(info.segments[0].is_complete);
        assert!(info.segments[1].is_complete);
        assert!(!info.segments[2].is_complete);
        assert_eq!(info.start_date.to_string(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn amounts_render_with_mint_decimals() {
        let s = mixed_stream();
        let info =
            build_stream_info(Pubkey::new_unique(), &s, s.last_update_time + 130).unwrap();
        let shown = info.display_amounts(2);
        // 300 archived + 1_000 + 800 + 1_000 deposited; 300 + 1_000 + 200 + 300 vested.
        assert_eq!(shown.deposited, "31.00");
        assert_eq!(shown.vested, "18.00");
        assert_eq!(shown.unvested, "13.00");
        assert_eq!(shown.withdrawn, "1.00");
        assert_eq!(shown.claimable, "17.00");
    }
}
