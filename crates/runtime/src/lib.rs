pub mod frame;
pub mod lifecycle;
pub mod subscription;

pub use frame::*;
pub use lifecycle::*;
pub use subscription::*;
