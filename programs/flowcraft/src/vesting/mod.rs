pub mod checkpoint;
pub mod segment;
pub mod stream;

pub use checkpoint::*;
pub use segment::*;
pub use stream::*;
