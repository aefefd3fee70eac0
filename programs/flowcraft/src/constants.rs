//! Protocol-wide constants shared with the Flowcraft ledger program.

/// Fixed-point scale applied to every per-second rate.
pub const RATE_SCALE: u128 = 1_000_000_000;

/// Basis points denominator (100% == 10_000 bps).
pub const BPS_DENOMINATOR: u128 = 10_000;

/// Highest protocol fee the authority accepts (10%).
pub const MAX_FEE_BPS: i64 = 1_000;

/// Max segments stored in a single stream account.
pub const MAX_SEGMENTS: usize = 100;

/// Max byte length of a pool name (PDA seed bound).
pub const MAX_POOL_NAME_LEN: usize = 32;

/// Default number of streams claimed per batch transaction.
pub const DEFAULT_CLAIM_BATCH_SIZE: usize = 20;
