//! Click transitions and control display rules.
//!
//! Two products ship the same toggle with different behavior, so the choice is
//! a configuration value rather than something the controller infers:
//!
//! | Policy | On click | Control shows |
//! |--------|----------|---------------|
//! | [`TogglePolicy::Cycle`] | `auto → light → dark → auto` | the current preference |
//! | [`TogglePolicy::Toggle`] | `auto` collapses to the opposite of the effective theme, then `light ↔ dark` | the theme a click switches to |
//!
//! Both rules are pure so they can be tested without a store or document.

use serde::{Deserialize, Serialize};

use crate::display::{ControlDisplay, IconSet};
use crate::preference::ThemePreference;

/// How a click moves between preferences and what the control displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TogglePolicy {
    /// Three-state cycle showing the current preference.
    #[default]
    Cycle,
    /// Two-state light/dark toggle showing the opposite of what is rendered.
    Toggle,
}

impl TogglePolicy {
    /// Returns the preference a click moves to.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themeswitch::{ThemePreference, TogglePolicy};
    ///
    /// let next = TogglePolicy::Cycle.next(ThemePreference::Auto, true);
    /// assert_eq!(next, ThemePreference::Light);
    ///
    /// // The toggle leaves `auto` for the opposite of what the OS renders.
    /// let next = TogglePolicy::Toggle.next(ThemePreference::Auto, true);
    /// assert_eq!(next, ThemePreference::Light);
    /// ```
    pub fn next(self, current: ThemePreference, os_prefers_dark: bool) -> ThemePreference {
        match self {
            TogglePolicy::Cycle => match current {
                ThemePreference::Auto => ThemePreference::Light,
                ThemePreference::Light => ThemePreference::Dark,
                ThemePreference::Dark => ThemePreference::Auto,
            },
            TogglePolicy::Toggle => current.resolve(os_prefers_dark).opposite().into(),
        }
    }

    /// Returns what the control displays for a preference and OS signal.
    pub fn display(
        self,
        pref: ThemePreference,
        os_prefers_dark: bool,
        icons: &IconSet,
    ) -> ControlDisplay {
        match self {
            TogglePolicy::Cycle => icons.for_preference(pref).clone(),
            TogglePolicy::Toggle => icons
                .for_theme(pref.resolve(os_prefers_dark).opposite())
                .clone(),
        }
    }

    /// Default icon set for this policy.
    pub fn default_icons(self) -> IconSet {
        match self {
            TogglePolicy::Cycle => IconSet::cycle(),
            TogglePolicy::Toggle => IconSet::toggle(),
        }
    }
}
