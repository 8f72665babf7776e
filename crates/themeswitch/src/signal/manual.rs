use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{ColorSchemeSignal, Subscription};

type Listener = Rc<RefCell<Box<dyn FnMut(bool)>>>;

#[derive(Default)]
struct Inner {
    prefers_dark: bool,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// A signal the host drives by calling [`set`](ManualSignal::set).
///
/// Clones share state, so a host keeps one clone and hands another to the
/// controller. Listeners run after the internal borrow is released, which
/// lets them query [`prefers_dark`](ColorSchemeSignal::prefers_dark) or
/// cancel subscriptions while being notified. A listener that calls `set`
/// itself updates the value but is not notified of its own nested change.
#[derive(Clone, Default)]
pub struct ManualSignal {
    inner: Rc<RefCell<Inner>>,
}

impl ManualSignal {
    pub fn new(prefers_dark: bool) -> Self {
        let signal = Self::default();
        signal.inner.borrow_mut().prefers_dark = prefers_dark;
        signal
    }

    /// Updates the value and notifies listeners if it changed.
    pub fn set(&self, prefers_dark: bool) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            if inner.prefers_dark == prefers_dark {
                return;
            }
            inner.prefers_dark = prefers_dark;
            inner.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        for listener in listeners {
            // A listener that sets the signal again is still running; it has
            // already seen an earlier value and must not be re-entered.
            let Ok(mut listener) = listener.try_borrow_mut() else {
                continue;
            };
            (&mut **listener)(prefers_dark);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ColorSchemeSignal for ManualSignal {
    fn prefers_dark(&self) -> bool {
        self.inner.borrow().prefers_dark
    }

    fn subscribe(&self, listener: Box<dyn FnMut(bool)>) -> Option<Subscription> {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(RefCell::new(listener))));
            id
        };
        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        Some(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        }))
    }
}

impl std::fmt::Debug for ManualSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ManualSignal")
            .field("prefers_dark", &inner.prefers_dark)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}
