//! The operating system's "prefers dark" signal.
//!
//! This module provides:
//!
//! - [`ColorSchemeSignal`]: query plus optional change subscription
//! - [`Subscription`]: owned handle that detaches a listener when dropped
//! - [`SystemSignal`]: native OS detection
//! - [`FixedSignal`]: a constant, for hosts that cannot query the OS
//! - [`ManualSignal`]: host-driven signal with listeners

mod manual;
mod system;

use std::fmt;

pub use manual::ManualSignal;
pub use system::{FixedSignal, SystemSignal};

/// A live boolean reporting whether the OS prefers a dark color scheme.
pub trait ColorSchemeSignal {
    /// Current value. Hosts that cannot answer report `false`.
    fn prefers_dark(&self) -> bool;

    /// Registers a listener called with the new value on every change.
    ///
    /// Returns `None` when the host cannot notify changes; callers then skip
    /// live tracking.
    fn subscribe(&self, listener: Box<dyn FnMut(bool)>) -> Option<Subscription>;
}

/// Keeps a listener attached until cancelled or dropped.
#[must_use = "dropping a Subscription detaches its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps the teardown closure that detaches the listener.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Detaches the listener now.
    pub fn cancel(mut self) {
        self.release_now();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

impl<T: ColorSchemeSignal + ?Sized> ColorSchemeSignal for Box<T> {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }

    fn subscribe(&self, listener: Box<dyn FnMut(bool)>) -> Option<Subscription> {
        (**self).subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_subscription_releases_once() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let sub = Subscription::new(move || counter.set(counter.get() + 1));
        sub.cancel();
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_subscription_releases_on_drop() {
        let released = Rc::new(Cell::new(false));
        let flag = released.clone();
        {
            let _sub = Subscription::new(move || flag.set(true));
        }
        assert!(released.get());
    }
}
