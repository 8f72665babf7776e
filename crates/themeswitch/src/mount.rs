//! Wiring a controller to its event sources.
//!
//! [`mount`] initialises the controller and subscribes it to OS color-scheme
//! changes. The returned [`MountedToggle`] owns the controller and the
//! subscription; dropping it detaches the listener. Host click handlers hold a
//! [`ToggleHandle`], which is weak, so a late event after teardown is a no-op.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::debug;

use crate::controller::{ThemeController, ThemeState};
use crate::preference::ThemePreference;
use crate::signal::{ColorSchemeSignal, Subscription};
use crate::sink::DocumentThemeSink;
use crate::store::PreferenceStore;

type Shared<S, D, O> = Rc<RefCell<ThemeController<S, D, O>>>;

/// A controller that has been initialised and is tracking the OS signal.
pub struct MountedToggle<S, D, O> {
    controller: Shared<S, D, O>,
    subscription: Option<Subscription>,
    initial: ThemeState,
}

/// Weak, clonable access to a mounted controller for event callbacks.
pub struct ToggleHandle<S, D, O> {
    controller: Weak<RefCell<ThemeController<S, D, O>>>,
}

/// Initialises `controller` and subscribes it to OS color-scheme changes.
///
/// When the signal cannot be subscribed to, the toggle still works; it just
/// won't refresh the control on OS changes.
pub fn mount<S, D, O>(controller: ThemeController<S, D, O>) -> MountedToggle<S, D, O>
where
    S: PreferenceStore + 'static,
    D: DocumentThemeSink + 'static,
    O: ColorSchemeSignal + 'static,
{
    let controller = Rc::new(RefCell::new(controller));
    let initial = controller.borrow_mut().init();

    let weak = Rc::downgrade(&controller);
    let listener = Box::new(move |prefers_dark: bool| {
        let Some(controller) = weak.upgrade() else {
            return;
        };
        // Re-entrant notification from inside a controller call.
        let Ok(mut controller) = controller.try_borrow_mut() else {
            debug!("controller busy, skipping color-scheme change");
            return;
        };
        controller.os_changed(prefers_dark);
    });
    let subscription = controller.borrow().signal().subscribe(listener);
    if subscription.is_none() {
        debug!("color-scheme changes not observable, tracking disabled");
    }

    MountedToggle {
        controller,
        subscription,
        initial,
    }
}

impl<S, D, O> MountedToggle<S, D, O>
where
    S: PreferenceStore,
    D: DocumentThemeSink,
    O: ColorSchemeSignal,
{
    /// State applied during initialisation.
    pub fn initial_state(&self) -> &ThemeState {
        &self.initial
    }

    pub fn is_tracking_os(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn click(&self) -> ThemePreference {
        self.controller.borrow_mut().click()
    }

    pub fn preference(&self) -> ThemePreference {
        self.controller.borrow().preference()
    }

    pub fn state(&self) -> ThemeState {
        self.controller.borrow().state()
    }

    pub fn handle(&self) -> ToggleHandle<S, D, O> {
        ToggleHandle {
            controller: Rc::downgrade(&self.controller),
        }
    }

    /// Runs `f` with the controller borrowed.
    pub fn with_controller<R>(&self, f: impl FnOnce(&ThemeController<S, D, O>) -> R) -> R {
        f(&self.controller.borrow())
    }

    /// Detaches from the OS signal and drops the controller.
    pub fn unmount(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}

impl<S, D, O> ToggleHandle<S, D, O>
where
    S: PreferenceStore,
    D: DocumentThemeSink,
    O: ColorSchemeSignal,
{
    /// Forwards a click. Returns `None` once the toggle is unmounted or while
    /// the controller is busy.
    pub fn click(&self) -> Option<ThemePreference> {
        let controller = self.controller.upgrade()?;
        let mut controller = controller.try_borrow_mut().ok()?;
        Some(controller.click())
    }

    /// Re-applies the stored preference, e.g. once late markup exists.
    pub fn refresh(&self) -> Option<ThemeState> {
        let controller = self.controller.upgrade()?;
        let mut controller = controller.try_borrow_mut().ok()?;
        Some(controller.init())
    }

    pub fn preference(&self) -> Option<ThemePreference> {
        let controller = self.controller.upgrade()?;
        let controller = controller.try_borrow().ok()?;
        Some(controller.preference())
    }

    pub fn is_mounted(&self) -> bool {
        self.controller.strong_count() > 0
    }
}

impl<S, D, O> Clone for ToggleHandle<S, D, O> {
    fn clone(&self) -> Self {
        Self {
            controller: self.controller.clone(),
        }
    }
}
