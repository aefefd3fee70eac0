//! Off-chain recomputation of Flowcraft subscription streams.
//!
//! Given a stream snapshot and the current Unix time, this crate derives the
//! vested, unvested and claimable amounts exactly as the ledger program's
//! integer arithmetic would, along with fee, rate and upgrade-cost quotes.
//! Every entry point is a pure function of its inputs.

pub mod constants;
pub mod error;
pub mod ledger;
pub mod reader;
pub mod state;
pub mod utils;
pub mod vesting;
pub mod views;

pub use error::FlowError;
pub use reader::{FlowReader, ReaderError};
pub use state::*;
pub use utils::fees::{
    compute_fee, compute_net_amount, compute_rate, compute_remaining_duration, compute_upgrade_cost,
    UpgradeCost,
};
pub use vesting::{evaluate_segment, evaluate_stream, evaluate_stream_breakdown, StreamVesting};
