use std::collections::BTreeMap;

use foundation::bounds::Rect;
use foundation::math::{clamp, lerp};
use runtime::{AliveToken, Lifecycle};
use scene::components::{CssLength, Position, Style};
use scene::entity::ElementId;
use scene::{Stage, Surface};
use tracing::{debug, info};

use crate::config::RevealConfig;
use crate::motion::RangedMotion;

/// Viewport metrics needed to resolve relative lengths.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub root_font_px: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            root_font_px: 16.0,
        }
    }
}

/// Fade-in progress for a section whose top edge sits at `section_top`
/// (viewport coordinates): 0 while the top is below `start_fraction` of the
/// viewport, 1 once it has risen to `end_fraction`.
pub fn reveal_progress(config: &RevealConfig, section_top: f64, viewport_h: f64) -> f64 {
    config
        .fade_band()
        .progress(&Rect::new(0.0, section_top, 0.0, 0.0), viewport_h)
}

pub fn reveal_opacity(config: &RevealConfig, section_top: f64, viewport_h: f64) -> f64 {
    lerp(
        config.from_opacity,
        config.to_opacity,
        reveal_progress(config, section_top, viewport_h),
    )
}

/// Where a pinned header is relative to its owning section.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PinState {
    /// Section top still below the viewport top.
    Before,
    /// Section spans the viewport top. `progress` runs 0 to 1 as the section
    /// scrolls from top-at-top to bottom-at-top.
    Pinned { progress: f64 },
    /// Section bottom has passed the viewport top.
    After,
}

impl PinState {
    pub fn of(section: &Rect) -> Self {
        Self::at(section.top, section.height)
    }

    /// State for a section at `top` whose laid-out height is `height`.
    pub fn at(top: f64, height: f64) -> Self {
        if !(height > 0.0) || top > 0.0 {
            return PinState::Before;
        }
        if top + height <= 0.0 {
            return PinState::After;
        }
        PinState::Pinned {
            progress: clamp(-top / height, 0.0, 1.0),
        }
    }

    pub fn is_pinned(&self) -> bool {
        matches!(self, PinState::Pinned { .. })
    }
}

impl RevealConfig {
    pub fn header_style(&self, state: PinState, viewport: &Viewport) -> Style {
        match state {
            PinState::Before => Style::new()
                .with_position(Position::Relative)
                .with_font_size(CssLength::Vw(self.header_from_vw))
                .with_opacity(self.header_from_opacity),
            PinState::After => Style::new()
                .with_position(Position::Relative)
                .with_font_size(CssLength::Rem(self.header_to_rem))
                .with_opacity(self.header_to_opacity),
            PinState::Pinned { progress } => {
                let from = CssLength::Vw(self.header_from_vw).to_px(
                    viewport.width,
                    viewport.root_font_px,
                    0.0,
                );
                let to = CssLength::Rem(self.header_to_rem).to_px(
                    viewport.width,
                    viewport.root_font_px,
                    0.0,
                );
                Style::new()
                    .with_position(Position::Sticky)
                    .at(CssLength::Px(0.0), CssLength::Px(0.0))
                    .with_font_size(CssLength::Px(lerp(from, to, progress)))
                    .with_opacity(lerp(
                        self.header_from_opacity,
                        self.header_to_opacity,
                        progress,
                    ))
            }
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RevealKind {
    Fade,
    /// Header pinned while its section crosses the viewport top.
    Pin,
    Motion(RangedMotion),
    /// Tracked for the active-section marker; never styled.
    Spy,
}

/// Reveal and pin effects for one content page.
///
/// The host registers elements, then on every scroll calls
/// [`RevealPage::sample`] with a way to measure each one, and flushes. On
/// resize it calls [`RevealPage::relayout`] first.
#[derive(Debug)]
pub struct RevealPage {
    config: RevealConfig,
    stage: Stage,
    kinds: BTreeMap<ElementId, RevealKind>,
    /// Section heights measured once per layout. A pinned header resizes
    /// its own section, so re-measuring every sample would feed back.
    pin_heights: BTreeMap<ElementId, f64>,
    active: Option<ElementId>,
    active_changed: bool,
    lifecycle: Lifecycle,
}

impl RevealPage {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            stage: Stage::new(),
            kinds: BTreeMap::new(),
            pin_heights: BTreeMap::new(),
            active: None,
            active_changed: false,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Registers a section to fade in.
    pub fn fade(&mut self, label: impl Into<String>) -> ElementId {
        self.register(label, RevealKind::Fade)
    }

    /// Registers a header; its measurement must be the owning section's box.
    pub fn pin(&mut self, label: impl Into<String>) -> ElementId {
        self.register(label, RevealKind::Pin)
    }

    /// Registers an element whose transform follows `motion`.
    pub fn motion(&mut self, label: impl Into<String>, motion: RangedMotion) -> ElementId {
        self.register(label, RevealKind::Motion(motion))
    }

    /// Registers a section for the active-section marker.
    pub fn spy(&mut self, label: impl Into<String>) -> ElementId {
        self.register(label, RevealKind::Spy)
    }

    fn register(&mut self, label: impl Into<String>, kind: RevealKind) -> ElementId {
        let id = self.stage.spawn(label);
        self.kinds.insert(id, kind);
        id
    }

    pub fn kind(&self, element: ElementId) -> Option<RevealKind> {
        self.kinds.get(&element).copied()
    }

    pub fn alive(&self) -> AliveToken {
        self.lifecycle.token()
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_alive()
    }

    /// The spied section the reader is in, or the last one they were in.
    pub fn active_section(&self) -> Option<ElementId> {
        self.active
    }

    /// The newly active section, once per change.
    pub fn take_active_change(&mut self) -> Option<ElementId> {
        if std::mem::take(&mut self.active_changed) {
            self.active
        } else {
            None
        }
    }

    /// Drops cached section heights; the next sample measures afresh.
    pub fn relayout(&mut self) {
        self.pin_heights.clear();
    }

    /// Recomputes every registered element. Elements `measure` cannot size
    /// keep their previous style. Returns how many styles changed.
    pub fn sample(
        &mut self,
        viewport: &Viewport,
        mut measure: impl FnMut(ElementId) -> Option<Rect>,
    ) -> usize {
        if !self.is_mounted() {
            return 0;
        }
        let mut changed = 0;
        let mut entered = None;
        for (&id, &kind) in &self.kinds {
            let Some(rect) = measure(id) else {
                continue;
            };
            let style = match kind {
                RevealKind::Fade => Style::new().with_opacity(reveal_opacity(
                    &self.config,
                    rect.top,
                    viewport.height,
                )),
                RevealKind::Pin => {
                    let height = match self.pin_heights.get(&id) {
                        Some(&height) => height,
                        None => {
                            if rect.height > 0.0 {
                                self.pin_heights.insert(id, rect.height);
                            }
                            rect.height
                        }
                    };
                    self.config
                        .header_style(PinState::at(rect.top, height), viewport)
                }
                RevealKind::Motion(motion) => {
                    motion.style(motion.progress(&rect, viewport.height))
                }
                RevealKind::Spy => {
                    if entered.is_none() && self.config.spy_band.contains(&rect, viewport.height) {
                        entered = Some(id);
                    }
                    continue;
                }
            };
            if self.stage.set_style(id, style) {
                changed += 1;
            }
        }
        // Leaving every band keeps the last section active.
        if entered.is_some() && entered != self.active {
            self.active = entered;
            self.active_changed = true;
            debug!(section = ?entered, "active section changed");
        }
        changed
    }

    pub fn flush(&mut self, surface: &mut dyn Surface) -> usize {
        if !self.is_mounted() {
            return 0;
        }
        self.stage.flush(surface)
    }

    pub fn unmount(&mut self) {
        if !self.is_mounted() {
            return;
        }
        self.lifecycle.end();
        self.stage.discard_pending();
        info!(elements = self.kinds.len(), "reveal page unmounted");
    }
}
