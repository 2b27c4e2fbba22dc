//! Scroll-driven choreography: a stack of cards that fly away one by one as
//! their scroll segments pass, and the simpler reveal, pin, ranged-motion
//! and scroll-spy effects used by content pages.

pub mod card;
pub mod config;
pub mod exit;
pub mod hover;
pub mod motion;
pub mod progress;
pub mod reveal;
pub mod stack;
pub mod support;
pub mod track;

pub use card::*;
pub use config::*;
pub use motion::*;
pub use progress::*;
pub use reveal::*;
pub use stack::*;
pub use support::*;
pub use track::*;
