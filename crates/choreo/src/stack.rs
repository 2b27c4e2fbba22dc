use content::CardRecord;
use foundation::bounds::Rect;
use foundation::math::Vec2;
use runtime::{AliveToken, Lifecycle};
use scene::entity::ElementId;
use scene::{Stage, Surface};
use tracing::{debug, info};

use crate::card::CardDescriptor;
use crate::config::StackConfig;
use crate::support::ScrollMode;
use crate::track::ScrollTrack;

/// Stage elements for one card. The exit transform goes on `wrapper`, the
/// hover tilt on `surface`, so the two never overwrite each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CardElements {
    pub wrapper: ElementId,
    pub surface: ElementId,
}

/// Mounted card stack.
///
/// Descriptors and scroll bindings are fixed at mount; scroll events only
/// move per-card progress. In [`ScrollMode::Static`] the deck stays idle and
/// the advisory element is shown.
#[derive(Debug)]
pub struct CardStack {
    config: StackConfig,
    cards: Vec<CardDescriptor>,
    track: ScrollTrack,
    mode: ScrollMode,
    stage: Stage,
    elements: Vec<CardElements>,
    advisory: ElementId,
    progress: Vec<f64>,
    last_offset: f64,
    lifecycle: Lifecycle,
}

impl CardStack {
    pub fn new(
        records: Vec<CardRecord>,
        config: StackConfig,
        viewport_h: f64,
        mode: ScrollMode,
    ) -> Self {
        let cards = CardDescriptor::deck(records);
        let track = ScrollTrack::layout(cards.len(), &config, viewport_h);
        let mut stage = Stage::new();
        let elements: Vec<CardElements> = cards
            .iter()
            .map(|c| CardElements {
                wrapper: stage.spawn(format!("card-{}", c.index)),
                surface: stage.spawn(format!("card-{}-surface", c.index)),
            })
            .collect();
        let advisory = stage.spawn("stack-advisory");
        stage.set_visibility(advisory, mode.advisory());
        for (card, el) in cards.iter().zip(&elements) {
            stage.set_style(
                el.wrapper,
                config
                    .exit
                    .style(0.0, card.base_rotation_deg, card.z_index()),
            );
            stage.set_style(el.surface, config.hover.rest_style());
        }
        info!(cards = cards.len(), ?mode, height = track.height(), "card stack mounted");
        Self {
            progress: vec![0.0; cards.len()],
            config,
            cards,
            track,
            mode,
            stage,
            elements,
            advisory,
            last_offset: 0.0,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn cards(&self) -> &[CardDescriptor] {
        &self.cards
    }

    pub fn track(&self) -> &ScrollTrack {
        &self.track
    }

    pub fn mode(&self) -> ScrollMode {
        self.mode
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn elements(&self) -> &[CardElements] {
        &self.elements
    }

    pub fn advisory(&self) -> ElementId {
        self.advisory
    }

    pub fn progress(&self, index: usize) -> Option<f64> {
        self.progress.get(index).copied()
    }

    pub fn alive(&self) -> AliveToken {
        self.lifecycle.token()
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle.is_alive()
    }

    /// Scroll position changed. `track_offset` is how far the viewport top
    /// has scrolled past the stack root's top.
    pub fn on_scroll(&mut self, track_offset: f64) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.last_offset = track_offset;
        if self.mode == ScrollMode::Static {
            return false;
        }
        let mut changed = false;
        for binding in self.track.bindings() {
            let i = binding.card_index;
            let p = binding.progress(track_offset);
            if p == self.progress[i] {
                continue;
            }
            self.progress[i] = p;
            let card = &self.cards[i];
            let style = self
                .config
                .exit
                .style(p, card.base_rotation_deg, card.z_index());
            changed |= self.stage.set_style(self.elements[i].wrapper, style);
        }
        changed
    }

    /// Viewport height changed: segments are re-measured and progress is
    /// recomputed at the last known offset.
    pub fn relayout(&mut self, viewport_h: f64) -> bool {
        if !self.is_mounted() {
            return false;
        }
        self.track = ScrollTrack::layout(self.cards.len(), &self.config, viewport_h);
        debug!(height = self.track.height(), "card track re-laid out");
        self.on_scroll(self.last_offset)
    }

    /// Pointer moved over card `index`, whose surface box is `rect`.
    pub fn hover(&mut self, index: usize, pointer: Vec2, rect: &Rect) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let Some(el) = self.elements.get(index) else {
            return false;
        };
        self.stage
            .set_style(el.surface, self.config.hover.tilt_style(pointer, rect))
    }

    pub fn leave(&mut self, index: usize) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let Some(el) = self.elements.get(index) else {
            return false;
        };
        self.stage.set_style(el.surface, self.config.hover.rest_style())
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
        info!(cards = self.cards.len(), "card stack unmounted");
    }
}
