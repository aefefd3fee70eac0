use anchor_lang::prelude::{borsh, AnchorDeserialize, AnchorSerialize, Pubkey};

use crate::constants::MAX_FEE_BPS;
use crate::error::FlowError;

/// Global protocol parameters, as written by the ledger authority.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Admin authority.
    pub admin: Pubkey,
    /// Treasury receiving protocol fees.
    pub treasury: Pubkey,
    /// Protocol fee on deposits, in basis points (<= MAX_FEE_BPS).
    pub fee_bps: u16,
    pub bump: u8,
}

impl Config {
    /// Fee in the signed form the fee calculator validates.
    pub fn fee_bps(&self) -> i64 {
        i64::from(self.fee_bps)
    }

    pub fn validate(&self) -> Result<(), FlowError> {
        if self.fee_bps() > MAX_FEE_BPS {
            return Err(FlowError::InvalidFeeBps);
        }
        Ok(())
    }
}
