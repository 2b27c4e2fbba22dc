//! Hero scene motion: markers orbiting a reference element on a tilted
//! ellipse, plus a pointer/orientation-driven 3D tilt of the header.

pub mod config;
pub mod engine;
pub mod hero;
pub mod marker;
pub mod parallax;
pub mod phrase;
pub mod tilt;

pub use config::*;
pub use engine::*;
pub use hero::*;
pub use marker::*;
pub use parallax::*;
