use foundation::bounds::Rect;
use foundation::math::{inverse_lerp_clamped, lerp};
use scene::components::{CssLength, Style, Transform, TransformOp};
use serde::{Deserialize, Serialize};

/// Edge of an element a trigger point follows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// "Element edge meets this fraction of the viewport height, from the top."
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerPoint {
    pub edge: Edge,
    pub viewport_fraction: f64,
}

impl TriggerPoint {
    pub const fn new(edge: Edge, viewport_fraction: f64) -> Self {
        Self {
            edge,
            viewport_fraction,
        }
    }

    /// Signed scroll distance until this point is reached; negative once it
    /// has been passed.
    fn distance(&self, rect: &Rect, viewport_h: f64) -> f64 {
        let edge = match self.edge {
            Edge::Top => rect.top,
            Edge::Center => rect.top + rect.height * 0.5,
            Edge::Bottom => rect.bottom(),
        };
        edge - self.viewport_fraction * viewport_h
    }
}

/// Scroll range over which an element animates, from `start` being reached
/// to `end` being reached.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerBand {
    pub start: TriggerPoint,
    pub end: TriggerPoint,
}

impl TriggerBand {
    pub const fn new(start: TriggerPoint, end: TriggerPoint) -> Self {
        Self { start, end }
    }

    /// 0 before the band, 1 after it. An unmeasured viewport reads as 0.
    pub fn progress(&self, rect: &Rect, viewport_h: f64) -> f64 {
        if !(viewport_h > 0.0) {
            return 0.0;
        }
        inverse_lerp_clamped(
            self.start.distance(rect, viewport_h),
            self.end.distance(rect, viewport_h),
            0.0,
        )
    }

    /// Whether the current scroll position lies inside the band, start
    /// inclusive and end exclusive.
    pub fn contains(&self, rect: &Rect, viewport_h: f64) -> bool {
        if !(viewport_h > 0.0) {
            return false;
        }
        self.start.distance(rect, viewport_h) <= 0.0 && self.end.distance(rect, viewport_h) > 0.0
    }
}

/// One end of a ranged motion. Angles in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionPose {
    pub translate_x_px: f64,
    pub rotate_deg: f64,
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

impl MotionPose {
    pub fn lerp(&self, to: &MotionPose, t: f64) -> MotionPose {
        MotionPose {
            translate_x_px: lerp(self.translate_x_px, to.translate_x_px, t),
            rotate_deg: lerp(self.rotate_deg, to.rotate_deg, t),
            rotate_x_deg: lerp(self.rotate_x_deg, to.rotate_x_deg, t),
            rotate_y_deg: lerp(self.rotate_y_deg, to.rotate_y_deg, t),
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::identity()
            .then(TransformOp::Translate(
                CssLength::Px(self.translate_x_px),
                CssLength::Px(0.0),
            ))
            .then(TransformOp::Rotate(self.rotate_deg))
            .then(TransformOp::RotateX(self.rotate_x_deg))
            .then(TransformOp::RotateY(self.rotate_y_deg))
    }
}

/// A transform scrubbed between two poses across a trigger band.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RangedMotion {
    pub band: TriggerBand,
    pub from: MotionPose,
    pub to: MotionPose,
}

impl RangedMotion {
    pub fn progress(&self, rect: &Rect, viewport_h: f64) -> f64 {
        self.band.progress(rect, viewport_h)
    }

    pub fn style(&self, progress: f64) -> Style {
        Style::new().with_transform(self.from.lerp(&self.to, progress).transform())
    }
}

/// Which way item `index` of `count` fans out: the first to the left, the
/// last to the right, the rest stay put. A single item does not move.
pub fn fan_side(index: usize, count: usize) -> f64 {
    if count < 2 || index >= count {
        0.0
    } else if index == 0 {
        -1.0
    } else if index == count - 1 {
        1.0
    } else {
        0.0
    }
}
