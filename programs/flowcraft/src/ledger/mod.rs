//! Read-side boundary to the ledger holding authoritative Flowcraft state.
//!
//! Absence is `Ok(None)`; only transport failures are errors.

use anchor_lang::prelude::Pubkey;

use crate::state::{Config, Pool, Stream};

pub mod config;
pub mod memory;

pub use config::*;
pub use memory::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("invalid ledger config: {0}")]
    InvalidConfig(&'static str),
    #[error("transport failure: {0}")]
    Transport(String),
}

pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

/// Snapshot source for config, pools and streams.
///
/// Implementations must be safe to share across threads; the vesting core
/// only ever reads the values they return.
pub trait LedgerReader: Send + Sync {
    fn config(&self) -> &LedgerConfig;

    fn fetch_config(&self) -> LedgerResult<Option<Config>>;

    fn fetch_pool(&self, address: &Pubkey) -> LedgerResult<Option<Pool>>;

    fn fetch_stream(&self, address: &Pubkey) -> LedgerResult<Option<Stream>>;

    /// Every stream of `pool`, in no particular order.
    fn fetch_streams_by_pool(&self, pool: &Pubkey) -> LedgerResult<Vec<(Pubkey, Stream)>>;
}
