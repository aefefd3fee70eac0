use anchor_lang::prelude::Pubkey;

use crate::error::FlowError;
use crate::state::{Pool, Stream};
use crate::utils::fixed_point::checked_add;
use crate::utils::time::{datetime_from_unix, DateTimeUtc};
use crate::vesting::evaluate_stream;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolInfo {
    pub address: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    pub total_subscribers: u64,
    pub total_deposited: u64,
    pub total_withdrawn: u64,
    pub total_refunded: u64,
    pub created_at: i64,
    pub created_date: DateTimeUtc,
}

/// Real-time totals across every stream of a pool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolAggregateStats {
    pub pool: Pubkey,
    pub total_streams: usize,
    pub active_streams: usize,
    pub expired_streams: usize,
    pub total_deposited: u64,
    pub total_vested: u64,
    pub total_withdrawn: u64,
    /// `total_vested - total_withdrawn`, floored at zero.
    pub total_claimable: u64,
    pub total_unvested: u64,
    /// The `now` the stats were evaluated at.
    pub calculated_at: i64,
}

pub fn build_pool_info(address: Pubkey, pool: &Pool) -> Result<PoolInfo, FlowError> {
    pool.validate()?;
    Ok(PoolInfo {
        address,
        owner: pool.owner,
        mint: pool.mint,
        name: pool.name.clone(),
        total_subscribers: pool.total_subscribers,
        total_deposited: pool.total_deposited,
        total_withdrawn: pool.total_withdrawn,
        total_refunded: pool.total_refunded,
        created_at: pool.created_at,
        created_date: datetime_from_unix(pool.created_at)?,
    })
}

pub fn aggregate_pool_stats(
    pool: Pubkey,
    streams: &[(Pubkey, Stream)],
    now: i64,
) -> Result<PoolAggregateStats, FlowError> {
    let mut stats = PoolAggregateStats {
        pool,
        total_streams: streams.len(),
        calculated_at: now,
        ..PoolAggregateStats::default()
    };

    for (_, stream) in streams {
        let vesting = evaluate_stream(stream, now)?;
        stats.total_deposited = checked_add(stats.total_deposited, vesting.total_deposited)?;
        stats.total_vested = checked_add(stats.total_vested, vesting.total_vested)?;
        stats.total_withdrawn = checked_add(stats.total_withdrawn, stream.total_withdrawn)?;
        if vesting.is_expired {
            stats.expired_streams += 1;
        } else {
            stats.active_streams += 1;
        }
    }

    stats.total_claimable = stats.total_vested.saturating_sub(stats.total_withdrawn);
    stats.total_unvested = stats
        .total_deposited
        .checked_sub(stats.total_vested)
        .ok_or(FlowError::InconsistentState)?;
    Ok(stats)
}
