pub mod fees;
pub mod fixed_point;
pub mod format;
pub mod time;

pub use fees::*;
pub use format::*;
