pub mod components;
pub mod entity;
pub mod stage;
pub mod surface;

pub use stage::*;
pub use surface::*;
