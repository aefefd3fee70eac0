use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;

use crate::ledger::{LedgerConfig, LedgerError, LedgerReader, LedgerResult};
use crate::state::{Config, Pool, Stream};

/// Ledger backed by snapshots held in memory.
#[derive(Clone, Debug)]
pub struct InMemoryLedger {
    config: LedgerConfig,
    protocol: Option<Config>,
    pools: HashMap<Pubkey, Pool>,
    streams: HashMap<Pubkey, Stream>,
    /// When set, every read fails with this transport error.
    outage: Option<String>,
}

impl InMemoryLedger {
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            protocol: None,
            pools: HashMap::new(),
            streams: HashMap::new(),
            outage: None,
        }
    }

    pub fn set_protocol_config(&mut self, protocol: Config) {
        self.protocol = Some(protocol);
    }

    pub fn insert_pool(&mut self, address: Pubkey, pool: Pool) -> Option<Pool> {
        self.pools.insert(address, pool)
    }

    pub fn insert_stream(&mut self, address: Pubkey, stream: Stream) -> Option<Stream> {
        self.streams.insert(address, stream)
    }

    pub fn set_outage(&mut self, reason: Option<String>) {
        self.outage = reason;
    }

    fn check_available(&self) -> LedgerResult<()> {
        match &self.outage {
            Some(reason) => Err(LedgerError::Transport(reason.clone())),
            None => Ok(()),
        }
    }
}

impl LedgerReader for InMemoryLedger {
    fn config(&self) -> &LedgerConfig {
        &self.config
    }

    fn fetch_config(&self) -> LedgerResult<Option<Config>> {
        self.check_available()?;
        Ok(self.protocol.clone())
    }

    fn fetch_pool(&self, address: &Pubkey) -> LedgerResult<Option<Pool>> {
        self.check_available()?;
        Ok(self.pools.get(address).cloned())
    }

    fn fetch_stream(&self, address: &Pubkey) -> LedgerResult<Option<Stream>> {
        self.check_available()?;
        Ok(self.streams.get(address).cloned())
    }

    fn fetch_streams_by_pool(&self, pool: &Pubkey) -> LedgerResult<Vec<(Pubkey, Stream)>> {
        self.check_available()?;
        let mut found: Vec<(Pubkey, Stream)> = self
            .streams
            .iter()
            .filter(|(_, s)| s.pool == *pool)
            .map(|(k, s)| (*k, s.clone()))
            .collect();
        // Stable output for callers that batch by position.
        found.sort_by_key(|(k, _)| *k);
        Ok(found)
    }
}
