use foundation::math::{clamp, lerp};
use scene::components::{CssLength, Layer, Style, Transform, TransformOp};

use crate::config::ExitCurve;

impl ExitCurve {
    /// Outer wrapper style at `progress` (linear timing).
    ///
    /// Progress 0 is the idle deck: centered, authored rotation, opaque, at
    /// its stacking slot.
    pub fn style(&self, progress: f64, base_rotation_deg: f64, z_index: i32) -> Style {
        let p = clamp(progress, 0.0, 1.0);
        let t = lerp(self.rest_translate_pct, self.exit_translate_pct, p);
        Style::new()
            .with_transform(
                Transform::identity()
                    .then(TransformOp::Translate(
                        CssLength::Percent(t),
                        CssLength::Percent(t),
                    ))
                    .then(TransformOp::Rotate(
                        base_rotation_deg + self.exit_rotate_deg * p,
                    )),
            )
            .with_opacity(lerp(1.0, self.exit_opacity, p))
            .with_layer(Layer::Explicit(z_index))
    }
}
