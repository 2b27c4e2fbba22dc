use scene::components::Visibility;
use tracing::info;

pub const ADVISORY_TEXT: &str =
    "This effect requires a browser with scroll-linked animation support.";

/// What the host runtime reported it can do, checked once at mount.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Capabilities {
    /// Scroll position can be sampled on scroll events.
    pub scroll_sampling: bool,
    /// `transform` accepts translate/rotate functions.
    pub transforms: bool,
}

impl Capabilities {
    pub fn full() -> Self {
        Self {
            scroll_sampling: true,
            transforms: true,
        }
    }

    pub fn mode(&self) -> ScrollMode {
        if self.scroll_sampling && self.transforms {
            ScrollMode::Animated
        } else {
            info!(capabilities = ?self, "scroll-linked animation unavailable; deck stays static");
            ScrollMode::Static
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScrollMode {
    /// Scroll drives each card's exit.
    Animated,
    /// Idle deck only, with the advisory banner.
    Static,
}

impl ScrollMode {
    pub fn advisory(self) -> Visibility {
        match self {
            ScrollMode::Animated => Visibility::hidden(),
            ScrollMode::Static => Visibility::visible(),
        }
    }
}
