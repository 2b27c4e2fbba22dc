#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Visibility {
    pub visible: bool,
}

impl Visibility {
    pub fn visible() -> Self {
        Self { visible: true }
    }

    pub fn hidden() -> Self {
        Self { visible: false }
    }

    /// `display` value used when toggling an element.
    pub fn display(&self, shown_as: &'static str) -> &'static str {
        if self.visible { shown_as } else { "none" }
    }
}
