pub mod config;
pub mod pool;
pub mod stream;

pub use config::*;
pub use pool::*;
pub use stream::*;
