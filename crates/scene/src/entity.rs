/// Handle to one styled element on a [`Stage`](crate::Stage).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

impl ElementId {
    pub fn index(&self) -> u32 {
        self.0
    }
}
