use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize, Pubkey};

use crate::constants::MAX_POOL_NAME_LEN;
use crate::error::FlowError;

/// A named, owned collection of streams sharing one deposit mint.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Pool {
    /// Pool owner (the only party allowed to claim).
    pub owner: Pubkey,
    /// Deposit token mint.
    pub mint: Pubkey,
    /// Human-readable name (<= MAX_POOL_NAME_LEN bytes).
    pub name: String,
    /// Cumulative subscriber count.
    pub total_subscribers: u64,
    /// Cumulative net deposits across all streams.
    pub total_deposited: u64,
    /// Cumulative claims by the owner.
    pub total_withdrawn: u64,
    /// Cumulative refunds from cancelled segments.
    pub total_refunded: u64,
    /// Creation timestamp (Unix seconds).
    pub created_at: i64,
    pub bump: u8,
}

impl Pool {
    pub fn validate(&self) -> Result<(), FlowError> {
        if self.name.len() > MAX_POOL_NAME_LEN {
            return Err(FlowError::NameTooLong);
        }
        if self.total_withdrawn > self.total_deposited {
            return Err(FlowError::InconsistentState);
        }
        Ok(())
    }
}
