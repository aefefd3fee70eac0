use anchor_lang::prelude::Pubkey;

use crate::constants::DEFAULT_CLAIM_BATCH_SIZE;
use crate::error::FlowError;
use crate::state::Stream;
use crate::utils::fixed_point::checked_add;
use crate::vesting::evaluate_stream;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimPlanConfig {
    /// Streams per claim batch transaction.
    pub batch_size: usize,
    /// Streams with less claimable than this are left out.
    pub min_claimable: u64,
}

impl Default for ClaimPlanConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_CLAIM_BATCH_SIZE,
            min_claimable: 1,
        }
    }
}

impl ClaimPlanConfig {
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.batch_size == 0 {
            return Err(FlowError::InvalidBatchSize);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimCandidate {
    pub stream: Pubkey,
    pub claimable: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimPlan {
    /// Claim batches in ledger order, each at most `batch_size` long.
    pub batches: Vec<Vec<ClaimCandidate>>,
    pub total_claimable: u64,
    /// Streams below `min_claimable`.
    pub skipped: usize,
}

impl ClaimPlan {
    pub fn stream_count(&self) -> usize {
        self.batches.iter().map(Vec::len).sum()
    }
}

/// Groups the streams worth claiming at `now` into claim batches.
pub fn plan_claims(
    streams: &[(Pubkey, Stream)],
    now: i64,
    config: &ClaimPlanConfig,
) -> Result<ClaimPlan, FlowError> {
    config.validate()?;

    let mut candidates = Vec::new();
    let mut total_claimable = 0u64;
    let mut skipped = 0usize;

    for (address, stream) in streams {
        let claimable = evaluate_stream(stream, now)?.claimable;
        if claimable == 0 || claimable < config.min_claimable {
            skipped += 1;
            continue;
        }
        total_claimable = checked_add(total_claimable, claimable)?;
        candidates.push(ClaimCandidate {
            stream: *address,
            claimable,
        });
    }

    Ok(ClaimPlan {
        batches: candidates
            .chunks(config.batch_size)
            .map(<[ClaimCandidate]>::to_vec)
            .collect(),
        total_claimable,
        skipped,
    })
}
