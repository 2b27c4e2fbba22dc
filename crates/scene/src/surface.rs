use crate::components::{Style, Visibility};
use crate::entity::ElementId;

/// Where styles end up. The web front end writes them to DOM elements;
/// tests record them.
pub trait Surface {
    fn apply_style(&mut self, element: ElementId, style: &Style);
    fn apply_visibility(&mut self, element: ElementId, visibility: Visibility);
}

#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Style(ElementId, Style),
    Visibility(ElementId, Visibility),
}

/// Surface that keeps every write, in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub writes: Vec<Applied>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Most recent style written to `element`.
    pub fn last_style(&self, element: ElementId) -> Option<&Style> {
        self.writes.iter().rev().find_map(|w| match w {
            Applied::Style(id, style) if *id == element => Some(style),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }
}

impl Surface for RecordingSurface {
    fn apply_style(&mut self, element: ElementId, style: &Style) {
        self.writes.push(Applied::Style(element, style.clone()));
    }

    fn apply_visibility(&mut self, element: ElementId, visibility: Visibility) {
        self.writes.push(Applied::Visibility(element, visibility));
    }
}
