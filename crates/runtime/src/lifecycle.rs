use std::cell::Cell;
use std::rc::Rc;

/// Shared "still mounted" flag.
///
/// The owner holds a [`Lifecycle`]; callbacks capture a [`AliveToken`] and
/// check it before touching anything. Once the lifecycle is ended (explicitly
/// or by drop), every token reports dead, so an event that was already queued
/// when the component went away becomes a no-op.
#[derive(Debug)]
pub struct Lifecycle {
    alive: Rc<Cell<bool>>,
}

#[derive(Debug, Clone)]
pub struct AliveToken {
    alive: Rc<Cell<bool>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    pub fn token(&self) -> AliveToken {
        AliveToken {
            alive: Rc::clone(&self.alive),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn end(&self) {
        self.alive.set(false);
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.end();
    }
}

impl AliveToken {
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }
}
