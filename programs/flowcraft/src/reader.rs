//! Read-only façade combining a ledger collaborator with the vesting core.
//! Callers supply `now`; nothing here reads a clock.

use anchor_lang::prelude::Pubkey;
use tracing::{debug, info, warn};

use crate::error::FlowError;
use crate::ledger::{LedgerError, LedgerReader};
use crate::state::Stream;
use crate::vesting::evaluate_stream;
use crate::views::{
    aggregate_pool_stats, build_pool_info, build_stream_info, plan_claims, quote_segment_upgrade,
    quote_subscription, ClaimPlan, ClaimPlanConfig, PoolAggregateStats, PoolInfo, StreamInfo,
    SubscriptionQuote, UpgradeQuote,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReaderError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("vesting error: {0}")]
    Flow(FlowError),
}

impl From<FlowError> for ReaderError {
    fn from(e: FlowError) -> Self {
        ReaderError::Flow(e)
    }
}

pub type ReaderResult<T> = std::result::Result<T, ReaderError>;

pub struct FlowReader<L: LedgerReader> {
    ledger: L,
}

impl<L: LedgerReader> FlowReader<L> {
    pub fn new(ledger: L) -> Self {
        let config = ledger.config();
        debug!(program_id = %config.program_id, endpoint = %config.endpoint, "flow reader ready");
        Self { ledger }
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Program whose accounts this reader evaluates.
    pub fn program_id(&self) -> Pubkey {
        self.ledger.config().program_id
    }

    pub fn pool_exists(&self, pool: &Pubkey) -> ReaderResult<bool> {
        Ok(self.ledger.fetch_pool(pool)?.is_some())
    }

    pub fn stream_exists(&self, stream: &Pubkey) -> ReaderResult<bool> {
        Ok(self.ledger.fetch_stream(stream)?.is_some())
    }

    pub fn pool_info(&self, pool: &Pubkey) -> ReaderResult<Option<PoolInfo>> {
        match self.ledger.fetch_pool(pool)? {
            Some(p) => Ok(Some(build_pool_info(*pool, &p)?)),
            None => {
                debug!(%pool, "pool not found");
                Ok(None)
            }
        }
    }

    pub fn stream_info(&self, stream: &Pubkey, now: i64) -> ReaderResult<Option<StreamInfo>> {
        match self.fetch_stream_logged(stream)? {
            Some(s) => Ok(Some(build_stream_info(*stream, &s, now)?)),
            None => Ok(None),
        }
    }

    /// Real-time claimable amount; an absent stream has nothing to claim.
    pub fn claimable(&self, stream: &Pubkey, now: i64) -> ReaderResult<u64> {
        match self.fetch_stream_logged(stream)? {
            Some(s) => Ok(evaluate_stream(&s, now)?.claimable),
            None => Ok(0),
        }
    }

    /// An absent stream counts as expired (a new subscription starts fresh).
    pub fn is_expired(&self, stream: &Pubkey, now: i64) -> ReaderResult<bool> {
        match self.fetch_stream_logged(stream)? {
            Some(s) => Ok(evaluate_stream(&s, now)?.is_expired),
            None => Ok(true),
        }
    }

    pub fn pool_aggregate_stats(
        &self,
        pool: &Pubkey,
        now: i64,
    ) -> ReaderResult<PoolAggregateStats> {
        let streams = self.pool_streams(pool)?;
        Ok(aggregate_pool_stats(*pool, &streams, now)?)
    }

    pub fn claim_plan(
        &self,
        pool: &Pubkey,
        now: i64,
        config: &ClaimPlanConfig,
    ) -> ReaderResult<ClaimPlan> {
        let streams = self.pool_streams(pool)?;
        let plan = plan_claims(&streams, now, config)?;
        info!(
            %pool,
            streams = plan.stream_count(),
            batches = plan.batches.len(),
            skipped = plan.skipped,
            claimable = plan.total_claimable,
            "claim plan built"
        );
        Ok(plan)
    }

    /// Quote for a new subscription under the current protocol config.
    pub fn subscription_quote(
        &self,
        gross_amount: u64,
        duration_seconds: i64,
    ) -> ReaderResult<Option<SubscriptionQuote>> {
        match self.ledger.fetch_config()? {
            Some(cfg) => Ok(Some(quote_subscription(&cfg, gross_amount, duration_seconds)?)),
            None => {
                debug!("protocol config not found");
                Ok(None)
            }
        }
    }

    pub fn upgrade_quote(
        &self,
        stream: &Pubkey,
        segment_index: usize,
        new_amount: u64,
        new_duration_seconds: i64,
        now: i64,
    ) -> ReaderResult<Option<UpgradeQuote>> {
        match self.fetch_stream_logged(stream)? {
            Some(s) => Ok(Some(quote_segment_upgrade(
                &s,
                segment_index,
                new_amount,
                new_duration_seconds,
                now,
            )?)),
            None => Ok(None),
        }
    }

    fn fetch_stream_logged(&self, stream: &Pubkey) -> ReaderResult<Option<Stream>> {
        let found = self.ledger.fetch_stream(stream)?;
        if found.is_none() {
            debug!(%stream, "stream not found");
        }
        Ok(found)
    }

    /// Streams of `pool`. Streams of another pool and snapshots that fail
    /// structural validation are skipped so one bad account cannot fail the pool.
    fn pool_streams(&self, pool: &Pubkey) -> ReaderResult<Vec<(Pubkey, Stream)>> {
        let mut streams = self.ledger.fetch_streams_by_pool(pool)?;
        streams.retain(|(address, s)| {
            if s.pool != *pool {
                warn!(stream = %address, owner = %s.pool, %pool, "skipping stream of another pool");
                return false;
            }
            if let Err(e) = s.validate() {
                warn!(stream = %address, error = %e, "skipping malformed stream");
                return false;
            }
            true
        });
        Ok(streams)
    }
}
