use super::{CssLength, css_number};

/// One function in a CSS transform list. Angles are in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TransformOp {
    Perspective(f64),
    Translate(CssLength, CssLength),
    Rotate(f64),
    RotateX(f64),
    RotateY(f64),
    Scale(f64),
    Scale3d(f64),
}

impl TransformOp {
    pub fn to_css(&self) -> String {
        match self {
            TransformOp::Perspective(px) => format!("perspective({}px)", css_number(*px)),
            TransformOp::Translate(x, y) => format!("translate({}, {})", x.to_css(), y.to_css()),
            TransformOp::Rotate(d) => format!("rotate({}deg)", css_number(*d)),
            TransformOp::RotateX(d) => format!("rotateX({}deg)", css_number(*d)),
            TransformOp::RotateY(d) => format!("rotateY({}deg)", css_number(*d)),
            TransformOp::Scale(s) => format!("scale({})", css_number(*s)),
            TransformOp::Scale3d(s) => {
                let s = css_number(*s);
                format!("scale3d({s}, {s}, {s})")
            }
        }
    }
}

/// Ordered transform list, applied left to right like CSS.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transform {
    pub ops: Vec<TransformOp>,
}

impl Transform {
    pub fn identity() -> Self {
        Self { ops: Vec::new() }
    }

    pub fn then(mut self, op: TransformOp) -> Self {
        self.ops.push(op);
        self
    }

    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn to_css(&self) -> String {
        if self.ops.is_empty() {
            return "none".to_string();
        }
        self.ops
            .iter()
            .map(TransformOp::to_css)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::{Transform, TransformOp};
    use crate::components::CssLength;

    #[test]
    fn identity_is_none() {
        assert!(Transform::identity().is_identity());
        assert_eq!(Transform::identity().to_css(), "none");
    }

    #[test]
    fn renders_in_order() {
        let t = Transform::identity()
            .then(TransformOp::Translate(
                CssLength::Percent(-50.0),
                CssLength::Percent(-50.0),
            ))
            .then(TransformOp::Scale(0.8));
        assert_eq!(t.to_css(), "translate(-50%, -50%) scale(0.8)");
    }

    #[test]
    fn renders_tilt() {
        let t = Transform::identity()
            .then(TransformOp::Perspective(1000.0))
            .then(TransformOp::RotateX(-5.0))
            .then(TransformOp::RotateY(2.5))
            .then(TransformOp::Scale3d(1.02));
        assert_eq!(
            t.to_css(),
            "perspective(1000px) rotateX(-5deg) rotateY(2.5deg) scale3d(1.02, 1.02, 1.02)"
        );
    }
}
