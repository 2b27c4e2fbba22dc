use tracing::debug;

/// A resource that stays registered for as long as the value lives.
///
/// Event listeners and animation-frame requests implement this by
/// deregistering in `Drop`; the trait only exists so a mount can keep
/// heterogeneous guards in one place.
pub trait Subscription {
    fn label(&self) -> &str {
        "subscription"
    }
}

/// Scoped set of subscriptions owned by one mounted component.
///
/// Guards are released in reverse acquisition order on [`release_all`] or
/// drop, mirroring how they were layered on.
///
/// [`release_all`]: Subscriptions::release_all
#[derive(Default)]
pub struct Subscriptions {
    guards: Vec<Box<dyn Subscription>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold(&mut self, guard: impl Subscription + 'static) {
        debug!(label = guard.label(), "subscription acquired");
        self.guards.push(Box::new(guard));
    }

    pub fn len(&self) -> usize {
        self.guards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guards.is_empty()
    }

    pub fn release_all(&mut self) {
        while let Some(guard) = self.guards.pop() {
            debug!(label = guard.label(), "subscription released");
            drop(guard);
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl std::fmt::Debug for Subscriptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscriptions")
            .field("len", &self.guards.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{Subscription, Subscriptions};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Tracked {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Subscription for Tracked {
        fn label(&self) -> &str {
            self.name
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.log.borrow_mut().push(self.name);
        }
    }

    #[test]
    fn releases_in_reverse_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscriptions::new();
        for name in ["frame", "pointer", "orientation"] {
            subs.hold(Tracked {
                name,
                log: Rc::clone(&log),
            });
        }
        assert_eq!(subs.len(), 3);
        drop(subs);
        assert_eq!(*log.borrow(), vec!["orientation", "pointer", "frame"]);
    }

    #[test]
    fn release_all_empties_the_set() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut subs = Subscriptions::new();
        subs.hold(Tracked {
            name: "a",
            log: Rc::clone(&log),
        });
        subs.release_all();
        assert!(subs.is_empty());
        assert_eq!(log.borrow().len(), 1);
    }
}
