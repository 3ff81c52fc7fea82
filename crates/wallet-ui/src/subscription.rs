//! Teardown handles for listener registrations.

use std::fmt;

/// Owns the teardown of one or more registrations.
///
/// [`Subscription::teardown`] runs the release logic at most once, and
/// dropping the subscription tears it down as well.
#[must_use = "dropping a Subscription removes its listeners immediately"]
pub struct Subscription {
    teardowns: Vec<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardowns: vec![Box::new(teardown)],
        }
    }

    /// A subscription holding `resource` until teardown, e.g. a listener
    /// that unregisters itself on drop.
    pub fn holding<T: 'static>(resource: T) -> Self {
        Self::new(move || drop(resource))
    }

    pub fn empty() -> Self {
        Self {
            teardowns: Vec::new(),
        }
    }

    /// Merges two subscriptions; teardown releases both, in order.
    pub fn and(mut self, mut other: Subscription) -> Self {
        self.teardowns.append(&mut other.teardowns);
        self
    }

    pub fn is_active(&self) -> bool {
        !self.teardowns.is_empty()
    }

    pub fn teardown(&mut self) {
        for teardown in self.teardowns.drain(..) {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn counted(counter: &Rc<Cell<usize>>) -> Subscription {
        let counter = counter.clone();
        Subscription::new(move || counter.set(counter.get() + 1))
    }

    #[test]
    fn test_teardown_runs_once() {
        let released = Rc::new(Cell::new(0));
        let mut subscription = counted(&released);

        subscription.teardown();
        subscription.teardown();
        drop(subscription);

        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_drop_tears_down() {
        let released = Rc::new(Cell::new(0));
        {
            let _subscription = counted(&released);
        }
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_combined_subscriptions() {
        let released = Rc::new(Cell::new(0));
        let mut subscription = counted(&released).and(counted(&released));
        assert!(subscription.is_active());

        subscription.teardown();
        assert_eq!(released.get(), 2);
        assert!(!subscription.is_active());
    }

    #[test]
    fn test_holding_drops_resource() {
        struct Listener(Rc<Cell<bool>>);
        impl Drop for Listener {
            fn drop(&mut self) {
                self.0.set(true);
            }
        }

        let removed = Rc::new(Cell::new(false));
        let mut subscription = Subscription::holding(Listener(removed.clone()));
        assert!(!removed.get());
        subscription.teardown();
        assert!(removed.get());
    }
}
