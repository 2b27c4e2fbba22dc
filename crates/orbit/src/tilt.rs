use scene::components::{Easing, Style, Transform, TransformOp, Transition, css_number};

use crate::parallax::ParallaxVector;

const ACCENT: &str = "#8082f8";

/// Header rotation driven by the parallax vector.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HeaderTilt {
    pub max_deg: f64,
    pub transition_ms: f64,
}

impl HeaderTilt {
    pub fn transform(&self, v: ParallaxVector) -> Transform {
        Transform::identity()
            .then(TransformOp::RotateX(v.y * self.max_deg))
            .then(TransformOp::RotateY(v.x * self.max_deg))
    }

    pub fn style(&self, v: ParallaxVector) -> Style {
        Style::new()
            .with_transform(self.transform(v))
            .with_transition(Transition::new(
                "transform",
                self.transition_ms,
                Easing::EaseOut,
            ))
    }
}

/// Layered accent shadow that slides with the tilt.
pub fn hero_text_shadow(v: ParallaxVector) -> String {
    let layer = |em: f64| {
        format!(
            "{}em {}em 0 {ACCENT}",
            css_number(-em * (1.0 + v.x)),
            css_number(em * (1.0 + v.y))
        )
    };
    format!(
        "{}, {}, 0 0 20px rgba(128, 130, 248, 0.4)",
        layer(0.04),
        layer(0.06)
    )
}

#[cfg(test)]
mod tests {
    use super::{HeaderTilt, hero_text_shadow};
    use crate::parallax::ParallaxVector;

    const TILT: HeaderTilt = HeaderTilt {
        max_deg: 10.0,
        transition_ms: 100.0,
    };

    #[test]
    fn neutral_vector_is_flat() {
        assert_eq!(
            TILT.transform(ParallaxVector::ZERO).to_css(),
            "rotateX(0deg) rotateY(0deg)"
        );
    }

    #[test]
    fn full_deflection() {
        let css = TILT.transform(ParallaxVector::new(1.0, -0.5)).to_css();
        assert_eq!(css, "rotateX(-5deg) rotateY(10deg)");
    }

    #[test]
    fn style_carries_short_transition() {
        let decls = TILT.style(ParallaxVector::ZERO).declarations();
        assert!(decls.contains(&("transition", "transform 100ms ease-out".to_string())));
    }

    #[test]
    fn shadow_follows_vector() {
        assert_eq!(
            hero_text_shadow(ParallaxVector::ZERO),
            "-0.04em 0.04em 0 #8082f8, -0.06em 0.06em 0 #8082f8, 0 0 20px rgba(128, 130, 248, 0.4)"
        );
        assert!(hero_text_shadow(ParallaxVector::new(-1.0, -1.0)).starts_with("0em 0em 0"));
    }
}
