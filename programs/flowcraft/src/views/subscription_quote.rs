use crate::error::FlowError;
use crate::state::Config;
use crate::utils::fees::{compute_fee, compute_rate};

/// What a subscriber pays and what the new segment will vest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionQuote {
    pub gross_amount: u64,
    /// Protocol fee routed to the treasury.
    pub fee: u64,
    /// Amount deposited into the segment.
    pub net_amount: u64,
    pub duration_seconds: i64,
    /// Scaled rate of the new segment, derived from `net_amount`.
    pub rate_per_second: u128,
}

pub fn quote_subscription(
    config: &Config,
    gross_amount: u64,
    duration_seconds: i64,
) -> Result<SubscriptionQuote, FlowError> {
    config.validate()?;
    let fee = compute_fee(gross_amount, config.fee_bps())?;
    let net_amount = gross_amount - fee;
    Ok(SubscriptionQuote {
        gross_amount,
        fee,
        net_amount,
        duration_seconds,
        rate_per_second: compute_rate(net_amount, duration_seconds)?,
    })
}
