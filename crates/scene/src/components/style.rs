use super::{CssLength, Transform, css_number};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
}

impl Easing {
    fn to_css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transition {
    pub property: &'static str,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(property: &'static str, duration_ms: f64, easing: Easing) -> Self {
        Self {
            property,
            duration_ms,
            easing,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "{} {}ms {}",
            self.property,
            css_number(self.duration_ms),
            self.easing.to_css()
        )
    }
}

/// Stacking layer relative to surrounding content.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Layer {
    Behind,
    Above,
    Explicit(i32),
}

impl Layer {
    pub fn z_index(self) -> i32 {
        match self {
            Layer::Behind => 0,
            Layer::Above => 10,
            Layer::Explicit(z) => z,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Position {
    Relative,
    Fixed,
    Sticky,
}

impl Position {
    fn to_css(self) -> &'static str {
        match self {
            Position::Relative => "relative",
            Position::Fixed => "fixed",
            Position::Sticky => "sticky",
        }
    }
}

/// Declarative style values for one element. `None` leaves a property alone.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    pub position: Option<Position>,
    pub left: Option<CssLength>,
    pub top: Option<CssLength>,
    pub transform: Option<Transform>,
    pub opacity: Option<f64>,
    pub layer: Option<Layer>,
    pub font_size: Option<CssLength>,
    pub text_shadow: Option<String>,
    pub transition: Option<Transition>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn at(mut self, left: CssLength, top: CssLength) -> Self {
        self.left = Some(left);
        self.top = Some(top);
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layer = Some(layer);
        self
    }

    pub fn with_font_size(mut self, size: CssLength) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_text_shadow(mut self, shadow: impl Into<String>) -> Self {
        self.text_shadow = Some(shadow.into());
        self
    }

    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.transition = Some(transition);
        self
    }

    /// `(property, value)` pairs in a stable order, ready for
    /// `style.setProperty`.
    pub fn declarations(&self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(p) = self.position {
            out.push(("position", p.to_css().to_string()));
        }
        if let Some(l) = self.left {
            out.push(("left", l.to_css()));
        }
        if let Some(t) = self.top {
            out.push(("top", t.to_css()));
        }
        if let Some(t) = &self.transform {
            out.push(("transform", t.to_css()));
        }
        if let Some(o) = self.opacity {
            out.push(("opacity", css_number(o)));
        }
        if let Some(layer) = self.layer {
            out.push(("z-index", layer.z_index().to_string()));
        }
        if let Some(size) = self.font_size {
            out.push(("font-size", size.to_css()));
        }
        if let Some(shadow) = &self.text_shadow {
            out.push(("text-shadow", shadow.clone()));
        }
        if let Some(tr) = &self.transition {
            out.push(("transition", tr.to_css()));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TransformOp;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_style_declares_nothing() {
        assert!(Style::new().declarations().is_empty());
    }

    #[test]
    fn declarations_are_ordered() {
        let style = Style::new()
            .at(CssLength::Px(10.0), CssLength::Px(20.5))
            .with_transform(Transform::identity().then(TransformOp::Scale(0.6)))
            .with_opacity(0.5)
            .with_layer(Layer::Above)
            .with_transition(Transition::new("transform", 100.0, Easing::EaseOut));
        assert_eq!(
            style.declarations(),
            vec![
                ("left", "10px".to_string()),
                ("top", "20.5px".to_string()),
                ("transform", "scale(0.6)".to_string()),
                ("opacity", "0.5".to_string()),
                ("z-index", "10".to_string()),
                ("transition", "transform 100ms ease-out".to_string()),
            ]
        );
    }

    #[test]
    fn layers_map_to_z_index() {
        assert_eq!(Layer::Behind.z_index(), 0);
        assert_eq!(Layer::Above.z_index(), 10);
        assert_eq!(Layer::Explicit(4).z_index(), 4);
    }
}
