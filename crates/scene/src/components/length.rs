use super::css_number;

/// A CSS length in one of the units the motion code emits.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CssLength {
    Px(f64),
    Percent(f64),
    Vw(f64),
    Rem(f64),
}

impl CssLength {
    pub fn to_css(&self) -> String {
        match *self {
            CssLength::Px(v) => format!("{}px", css_number(v)),
            CssLength::Percent(v) => format!("{}%", css_number(v)),
            CssLength::Vw(v) => format!("{}vw", css_number(v)),
            CssLength::Rem(v) => format!("{}rem", css_number(v)),
        }
    }

    /// Resolves to pixels against a viewport and root font size.
    ///
    /// Percentages have no fixed reference here and resolve against
    /// `basis_px`.
    pub fn to_px(&self, viewport_w: f64, root_font_px: f64, basis_px: f64) -> f64 {
        match *self {
            CssLength::Px(v) => v,
            CssLength::Percent(v) => basis_px * v / 100.0,
            CssLength::Vw(v) => viewport_w * v / 100.0,
            CssLength::Rem(v) => root_font_px * v,
        }
    }
}
