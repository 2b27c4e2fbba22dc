pub mod angle;
pub mod interp;
pub mod vec;

pub use angle::*;
pub use interp::*;
pub use vec::*;
