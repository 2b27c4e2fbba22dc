use std::collections::BTreeSet;

use crate::components::{Style, Visibility};
use crate::entity::ElementId;
use crate::surface::Surface;

/// Retained style state for the elements one component animates.
///
/// Writers set the full desired style each tick; the stage only marks an
/// element dirty when the value actually changed, and [`Stage::flush`] pushes
/// dirty elements to a [`Surface`] in ascending id order.
#[derive(Debug, Default)]
pub struct Stage {
    labels: Vec<String>,
    styles: Vec<Option<Style>>,
    visibility: Vec<Option<Visibility>>,
    dirty_styles: BTreeSet<u32>,
    dirty_visibility: BTreeSet<u32>,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, label: impl Into<String>) -> ElementId {
        let id = ElementId(self.labels.len() as u32);
        self.labels.push(label.into());
        self.styles.push(None);
        self.visibility.push(None);
        id
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label(&self, element: ElementId) -> Option<&str> {
        self.labels.get(element.index() as usize).map(String::as_str)
    }

    pub fn style(&self, element: ElementId) -> Option<&Style> {
        self.styles
            .get(element.index() as usize)
            .and_then(|s| s.as_ref())
    }

    pub fn visibility(&self, element: ElementId) -> Option<Visibility> {
        self.visibility
            .get(element.index() as usize)
            .and_then(|v| *v)
    }

    /// Returns `true` if the style changed.
    pub fn set_style(&mut self, element: ElementId, style: Style) -> bool {
        let Some(slot) = self.styles.get_mut(element.index() as usize) else {
            return false;
        };
        if slot.as_ref() == Some(&style) {
            return false;
        }
        *slot = Some(style);
        self.dirty_styles.insert(element.index());
        true
    }

    pub fn set_visibility(&mut self, element: ElementId, visibility: Visibility) -> bool {
        let Some(slot) = self.visibility.get_mut(element.index() as usize) else {
            return false;
        };
        if *slot == Some(visibility) {
            return false;
        }
        *slot = Some(visibility);
        self.dirty_visibility.insert(element.index());
        true
    }

    pub fn has_pending(&self) -> bool {
        !self.dirty_styles.is_empty() || !self.dirty_visibility.is_empty()
    }

    /// Applies pending changes and returns how many writes reached the surface.
    pub fn flush(&mut self, surface: &mut dyn Surface) -> usize {
        let mut writes = 0;
        for idx in std::mem::take(&mut self.dirty_visibility) {
            if let Some(v) = self.visibility[idx as usize] {
                surface.apply_visibility(ElementId(idx), v);
                writes += 1;
            }
        }
        for idx in std::mem::take(&mut self.dirty_styles) {
            if let Some(style) = &self.styles[idx as usize] {
                surface.apply_style(ElementId(idx), style);
                writes += 1;
            }
        }
        writes
    }

    /// Drops pending writes without applying them.
    pub fn discard_pending(&mut self) {
        self.dirty_styles.clear();
        self.dirty_visibility.clear();
    }
}
