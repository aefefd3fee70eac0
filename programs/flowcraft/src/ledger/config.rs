use anchor_lang::prelude::Pubkey;

use crate::ledger::LedgerError;

/// Connection parameters a ledger collaborator is constructed with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Flowcraft program owning the pool and stream accounts.
    pub program_id: Pubkey,
    /// RPC endpoint (or any label identifying the snapshot source).
    pub endpoint: String,
}

impl LedgerConfig {
    pub fn new(program_id: Pubkey, endpoint: impl Into<String>) -> Result<Self, LedgerError> {
        let endpoint = endpoint.into();
        if program_id == Pubkey::default() {
            return Err(LedgerError::InvalidConfig("program id must be set"));
        }
        if endpoint.trim().is_empty() {
            return Err(LedgerError::InvalidConfig("endpoint must be set"));
        }
        Ok(Self {
            program_id,
            endpoint,
        })
    }
}
