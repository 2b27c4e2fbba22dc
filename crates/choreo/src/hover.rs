use foundation::bounds::Rect;
use foundation::math::{Vec2, clamp_signed};
use scene::components::{Easing, Style, Transform, TransformOp, Transition};

use crate::config::HoverConfig;

impl HoverConfig {
    /// Inner surface style while the pointer is at `pointer` over a card
    /// whose box is `rect`. Both in viewport coordinates.
    pub fn tilt_style(&self, pointer: Vec2, rect: &Rect) -> Style {
        if rect.is_empty() {
            return self.rest_style();
        }
        let half = rect.half_extents();
        let local = pointer - rect.center();
        let norm_x = clamp_signed(local.x / half.x);
        let norm_y = clamp_signed(local.y / half.y);
        self.style(
            -self.max_tilt_deg * norm_y,
            self.max_tilt_deg * norm_x,
            self.scale,
        )
    }

    pub fn rest_style(&self) -> Style {
        self.style(0.0, 0.0, 1.0)
    }

    fn style(&self, rotate_x: f64, rotate_y: f64, scale: f64) -> Style {
        Style::new()
            .with_transform(
                Transform::identity()
                    .then(TransformOp::Perspective(self.perspective_px))
                    .then(TransformOp::RotateX(rotate_x))
                    .then(TransformOp::RotateY(rotate_y))
                    .then(TransformOp::Scale3d(scale)),
            )
            .with_transition(Transition::new(
                "transform",
                self.transition_ms,
                Easing::EaseOut,
            ))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::HoverConfig;
    use foundation::bounds::Rect;
    use foundation::math::Vec2;

    fn card() -> Rect {
        Rect::new(100.0, 100.0, 400.0, 560.0)
    }

    #[test]
    fn center_is_flat_but_lifted() {
        let s = HoverConfig::default().tilt_style(Vec2::new(300.0, 380.0), &card());
        assert_eq!(
            s.transform.unwrap().to_css(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn corners_tilt_towards_pointer() {
        // Bottom-right corner.
        let s = HoverConfig::default().tilt_style(Vec2::new(500.0, 660.0), &card());
        assert_eq!(
            s.transform.unwrap().to_css(),
            "perspective(1000px) rotateX(-10deg) rotateY(10deg) scale3d(1.02, 1.02, 1.02)"
        );
        // Top-left quarter.
        let s = HoverConfig::default().tilt_style(Vec2::new(200.0, 240.0), &card());
        assert_eq!(
            s.transform.unwrap().to_css(),
            "perspective(1000px) rotateX(5deg) rotateY(-5deg) scale3d(1.02, 1.02, 1.02)"
        );
    }

    #[test]
    fn leave_restores_identity() {
        let s = HoverConfig::default().rest_style();
        assert_eq!(
            s.transform.unwrap().to_css(),
            "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
        );
    }

    #[test]
    fn collapsed_card_rests() {
        let cfg = HoverConfig::default();
        assert_eq!(
            cfg.tilt_style(Vec2::new(1.0, 1.0), &Rect::default()),
            cfg.rest_style()
        );
    }
}
