use foundation::bounds::Span;

use crate::config::StackConfig;
use crate::progress::segment_progress;

/// A card's claim on the scroll track.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollBinding {
    pub card_index: usize,
    /// Unique within one stack.
    pub timeline: String,
    /// Scroll offsets (relative to the stack root's top) over which the segment
    /// crosses the top of the viewport: 0 when its top edge reaches the
    /// viewport top, 1 when its bottom edge does.
    pub segment: Span,
}

impl ScrollBinding {
    pub fn progress(&self, track_offset: f64) -> f64 {
        segment_progress(track_offset, self.segment)
    }
}

/// Sequential segments down the page, one per card, after a one-viewport
/// lead-in during which the deck scrolls into place.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollTrack {
    bindings: Vec<ScrollBinding>,
    lead_in_px: f64,
    segment_px: f64,
    gap_px: f64,
}

impl ScrollTrack {
    pub fn layout(count: usize, config: &StackConfig, viewport_h: f64) -> Self {
        let vh = viewport_h.max(0.0) / 100.0;
        let lead_in_px = config.lead_in_vh * vh;
        let segment_px = config.segment_vh * vh;
        let gap_px = config.gap_vh * vh;
        let mut cursor = lead_in_px;
        let bindings = (0..count)
            .map(|card_index| {
                if card_index > 0 {
                    cursor += gap_px;
                }
                let segment = Span::new(cursor, cursor + segment_px);
                cursor = segment.end;
                ScrollBinding {
                    card_index,
                    timeline: format!("{}{card_index}", config.timeline_prefix),
                    segment,
                }
            })
            .collect();
        Self {
            bindings,
            lead_in_px,
            segment_px,
            gap_px,
        }
    }

    pub fn bindings(&self) -> &[ScrollBinding] {
        &self.bindings
    }

    pub fn binding(&self, card_index: usize) -> Option<&ScrollBinding> {
        self.bindings.get(card_index)
    }

    /// Total height the track occupies, lead-in included.
    pub fn height(&self) -> f64 {
        self.bindings.last().map(|b| b.segment.end).unwrap_or(0.0)
    }

    pub fn lead_in_px(&self) -> f64 {
        self.lead_in_px
    }

    /// Track offset for a stack root whose top edge sits at `root_top` in
    /// viewport coordinates.
    pub fn offset_for(root_top: f64) -> f64 {
        -root_top
    }

    pub fn segment_px(&self) -> f64 {
        self.segment_px
    }

    pub fn gap_px(&self) -> f64 {
        self.gap_px
    }

    pub fn progress_at(&self, track_offset: f64) -> Vec<f64> {
        self.bindings
            .iter()
            .map(|b| b.progress(track_offset))
            .collect()
    }
}
