use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

/// A callback with a stable identity that always forwards to the most
/// recently stored target.
pub struct LatestCallback {
    target: Rc<RefCell<Callback<()>>>,
    forward: Callback<()>,
}

impl LatestCallback {
    pub fn new(target: Callback<()>) -> Self {
        let target = Rc::new(RefCell::new(target));
        let forward = {
            let target = target.clone();
            Callback::from(move |_: ()| {
                let current = target.borrow().clone();
                current.emit(());
            })
        };
        Self { target, forward }
    }

    pub fn set(&self, target: Callback<()>) {
        *self.target.borrow_mut() = target;
    }

    pub fn callback(&self) -> Callback<()> {
        self.forward.clone()
    }
}

/// Returns a callback that stays equal across renders while still calling
/// the `callback` passed on the latest render. Effects keyed on it are not
/// re-run just because the parent rebuilt its closure.
#[hook]
pub fn use_latest_callback(callback: Callback<()>) -> Callback<()> {
    let latest = {
        let initial = callback.clone();
        use_memo((), move |_| LatestCallback::new(initial))
    };
    latest.set(callback);
    latest.callback()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn counter(count: &Rc<Cell<usize>>) -> Callback<()> {
        let count = count.clone();
        Callback::from(move |_: ()| count.set(count.get() + 1))
    }

    #[test]
    fn test_forwarder_keeps_identity() {
        let latest = LatestCallback::new(Callback::noop());
        let before = latest.callback();
        latest.set(Callback::noop());
        assert_eq!(before, latest.callback());
    }

    #[test]
    fn test_forwards_to_latest_target() {
        let first = Rc::new(Cell::new(0));
        let second = Rc::new(Cell::new(0));
        let latest = LatestCallback::new(counter(&first));
        let forward = latest.callback();

        forward.emit(());
        latest.set(counter(&second));
        forward.emit(());
        forward.emit(());

        assert_eq!(first.get(), 1);
        assert_eq!(second.get(), 2);
    }
}
