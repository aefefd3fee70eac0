pub mod claim_plan;
pub mod pool_info;
pub mod stream_info;
pub mod subscription_quote;
pub mod upgrade_quote;

pub use claim_plan::*;
pub use pool_info::*;
pub use stream_info::*;
pub use subscription_quote::*;
pub use upgrade_quote::*;
