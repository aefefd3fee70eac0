use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize, Pubkey};

use crate::constants::MAX_SEGMENTS;
use crate::error::FlowError;

/// One rate-limited tranche of a stream.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    /// Subscription tier label, display only.
    pub tier: String,
    /// Wallet that funded this segment (refund destination on cancel).
    pub payer: Pubkey,
    /// Amount per second, scaled by RATE_SCALE.
    pub rate_per_second: u128,
    /// Net amount deposited into this segment.
    pub amount: u64,
    /// Amount vested as of the stream's last checkpoint.
    pub vested: u64,
    /// Cancelled segments stop vesting permanently.
    pub cancelled: bool,
}

impl Segment {
    /// Remaining amount at the last checkpoint.
    pub fn unvested(&self) -> Result<u64, FlowError> {
        self.amount
            .checked_sub(self.vested)
            .ok_or(FlowError::InconsistentState)
    }

    /// Complete segments never change again.
    pub fn is_complete(&self) -> bool {
        self.cancelled || self.vested == self.amount
    }
}

/// One subscriber's payment stream into a pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stream {
    pub pool: Pubkey,
    pub subscriber: Pubkey,
    /// First subscription timestamp (Unix seconds).
    pub start_time: i64,
    /// Checkpoint time of every segment's `vested` field.
    pub last_update_time: i64,
    /// Number of segments folded into the archived totals so far.
    pub archived_count: u64,
    /// Sum of amounts folded out of compacted segments.
    pub archived_amount: u64,
    /// Sum of vested amounts folded out of compacted segments.
    pub archived_vested: u64,
    /// Total claimed by the pool owner.
    pub total_withdrawn: u64,
    /// Index of the segment the authority considers current.
    pub current_segment_index: u8,
    pub bump: u8,
    /// Ordered segments; time is consumed lowest index first.
    pub segments: Vec<Segment>,
}

impl Stream {
    pub fn check_segment_limit(&self) -> Result<(), FlowError> {
        if self.segments.len() > MAX_SEGMENTS {
            return Err(FlowError::SegmentLimitExceeded);
        }
        Ok(())
    }

    /// Structural invariants every snapshot must satisfy before evaluation.
    pub fn validate(&self) -> Result<(), FlowError> {
        self.check_segment_limit()?;
        if self.archived_vested > self.archived_amount {
            return Err(FlowError::InconsistentState);
        }
        for seg in &self.segments {
            if seg.vested > seg.amount {
                return Err(FlowError::InconsistentState);
            }
        }
        Ok(())
    }

    pub fn segment(&self, index: usize) -> Result<&Segment, FlowError> {
        self.segments.get(index).ok_or(FlowError::SegmentNotFound)
    }
}
