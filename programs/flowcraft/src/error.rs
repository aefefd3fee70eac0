use anchor_lang::prelude::*;

/// Error codes for the Flowcraft vesting engine.
#[error_code]
pub enum FlowError {
    #[msg("Invalid duration (must be > 0)")]
    InvalidDuration,

    #[msg("Invalid rate (must be > 0)")]
    InvalidRate,

    #[msg("Fee basis points outside protocol bound")]
    InvalidFeeBps,

    #[msg("Segment list exceeds maximum length")]
    SegmentLimitExceeded,

    #[msg("Segment index out of range")]
    SegmentNotFound,

    #[msg("Segment is cancelled or fully vested")]
    SegmentComplete,

    #[msg("Stream still has unvested segments")]
    StreamNotExpired,

    #[msg("Stored totals are inconsistent")]
    InconsistentState,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Pool name exceeds the seed length")]
    NameTooLong,

    #[msg("Claim batch size must be > 0")]
    InvalidBatchSize,

    #[msg("Math overflow")]
    MathOverflow,
}
