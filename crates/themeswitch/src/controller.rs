//! The theme preference controller.
//!
//! [`ThemeController`] keeps three things consistent: the persisted
//! preference, the document-level theme marker, and the toggle control's
//! icon/label. It reaches the outside world only through the injected
//! [`PreferenceStore`], [`DocumentThemeSink`] and [`ColorSchemeSignal`], so the
//! whole flow runs in tests against the in-memory implementations.
//!
//! # Example
//!
//! ```rust
//! use themeswitch::{
//!     ManualSignal, MemorySink, MemoryStore, ThemeController, ThemePreference, ToggleConfig,
//! };
//!
//! let store = MemoryStore::new();
//! let sink = MemorySink::new();
//! let mut controller = ThemeController::new(
//!     &ToggleConfig::default(),
//!     store.clone(),
//!     sink.clone(),
//!     ManualSignal::new(true),
//! );
//!
//! controller.init();
//! assert_eq!(sink.marker(), None);
//!
//! assert_eq!(controller.click(), ThemePreference::Light);
//! assert_eq!(store.value().as_deref(), Some("light"));
//! ```

use tracing::{debug, warn};

use crate::config::ToggleConfig;
use crate::display::{ControlDisplay, IconSet};
use crate::policy::TogglePolicy;
use crate::preference::{Theme, ThemePreference};
use crate::signal::ColorSchemeSignal;
use crate::sink::DocumentThemeSink;
use crate::store::{PreferenceStore, StoreError};

/// Everything the controller derived for one preference and OS signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: ThemePreference,
    pub effective: Theme,
    /// Marker written to the document; `None` means cleared.
    pub marker: Option<Theme>,
    pub display: ControlDisplay,
}

/// Coordinates the store, the document sink and the OS signal.
#[derive(Debug)]
pub struct ThemeController<S, D, O> {
    store: S,
    sink: D,
    signal: O,
    policy: TogglePolicy,
    icons: IconSet,
}

impl<S, D, O> ThemeController<S, D, O>
where
    S: PreferenceStore,
    D: DocumentThemeSink,
    O: ColorSchemeSignal,
{
    pub fn new(config: &ToggleConfig, store: S, sink: D, signal: O) -> Self {
        Self {
            store,
            sink,
            signal,
            policy: config.policy,
            icons: config.icons(),
        }
    }

    pub fn policy(&self) -> TogglePolicy {
        self.policy
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn signal(&self) -> &O {
        &self.signal
    }

    /// Reads the persisted preference.
    ///
    /// Nothing stored, a failing store, and an unrecognised value all read as
    /// [`ThemePreference::Auto`].
    pub fn preference(&self) -> ThemePreference {
        match self.store.load() {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!(error = %e, "ignoring stored theme preference");
                ThemePreference::Auto
            }),
            Ok(None) => ThemePreference::Auto,
            Err(e) => {
                debug!(error = %e, "theme preference unreadable, using auto");
                ThemePreference::Auto
            }
        }
    }

    /// Persists a preference.
    pub fn set_preference(&mut self, pref: ThemePreference) -> Result<(), StoreError> {
        self.store.save(pref.as_str())
    }

    /// Derives the state for the stored preference without touching the sink.
    pub fn state(&self) -> ThemeState {
        self.state_for(self.preference(), self.signal.prefers_dark())
    }

    fn state_for(&self, pref: ThemePreference, os_prefers_dark: bool) -> ThemeState {
        ThemeState {
            preference: pref,
            effective: pref.resolve(os_prefers_dark),
            marker: pref.marker(),
            display: self.policy.display(pref, os_prefers_dark, &self.icons),
        }
    }

    /// Writes the marker and control display for `pref`.
    ///
    /// Applying the same preference twice with an unchanged OS signal produces
    /// the same document state.
    pub fn apply(&mut self, pref: ThemePreference) -> ThemeState {
        let os_prefers_dark = self.signal.prefers_dark();
        self.apply_with(pref, os_prefers_dark)
    }

    fn apply_with(&mut self, pref: ThemePreference, os_prefers_dark: bool) -> ThemeState {
        let state = self.state_for(pref, os_prefers_dark);
        self.sink.set_marker(state.marker);
        if !self.sink.show_control(&state.display) {
            debug!("theme control missing, display not updated");
        }
        debug!(
            preference = %state.preference,
            effective = %state.effective,
            "applied theme"
        );
        state
    }

    /// Applies the stored preference. Runs before first paint on page load.
    pub fn init(&mut self) -> ThemeState {
        let pref = self.preference();
        self.apply(pref)
    }

    /// Handles a click on the control and returns the new preference.
    ///
    /// A storage failure is logged and the new theme is still applied, so the
    /// page reflects the click even when it cannot be remembered.
    pub fn click(&mut self) -> ThemePreference {
        let current = self.preference();
        let next = self.policy.next(current, self.signal.prefers_dark());
        if let Err(e) = self.set_preference(next) {
            warn!(error = %e, preference = %next, "failed to persist theme preference");
        }
        self.apply(next);
        next
    }

    /// Handles an OS color-scheme change.
    ///
    /// Only an `auto` preference reacts; the marker stays cleared and the
    /// control display is refreshed. Returns the new state when re-applied.
    pub fn os_changed(&mut self, prefers_dark: bool) -> Option<ThemeState> {
        if self.preference() != ThemePreference::Auto {
            return None;
        }
        Some(self.apply_with(ThemePreference::Auto, prefers_dark))
    }
}
