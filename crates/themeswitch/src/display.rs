//! Icon and label shown on the toggle control.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::preference::{Theme, ThemePreference};

/// What the toggle control should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlDisplay {
    pub icon: String,
    pub label: String,
}

impl ControlDisplay {
    pub fn new(icon: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
        }
    }
}

/// Icon/label pairs keyed by preference.
///
/// The two-state toggle never displays `auto`, so its set may leave that entry
/// at whatever value it was built with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSet {
    pub auto: ControlDisplay,
    pub light: ControlDisplay,
    pub dark: ControlDisplay,
}

static CYCLE_ICONS: Lazy<IconSet> = Lazy::new(|| IconSet {
    auto: ControlDisplay::new("●", "Auto"),
    light: ControlDisplay::new("○", "Light"),
    dark: ControlDisplay::new("●", "Dark"),
});

static TOGGLE_ICONS: Lazy<IconSet> = Lazy::new(|| IconSet {
    auto: ControlDisplay::new("◐", "Auto"),
    light: ControlDisplay::new("☀", "Light"),
    dark: ControlDisplay::new("☾", "Dark"),
});

impl IconSet {
    /// Three-state set used by the cycling control.
    pub fn cycle() -> Self {
        CYCLE_ICONS.clone()
    }

    /// Two-state set used by the light/dark toggle.
    pub fn toggle() -> Self {
        TOGGLE_ICONS.clone()
    }

    pub fn for_preference(&self, pref: ThemePreference) -> &ControlDisplay {
        match pref {
            ThemePreference::Auto => &self.auto,
            ThemePreference::Light => &self.light,
            ThemePreference::Dark => &self.dark,
        }
    }

    pub fn for_theme(&self, theme: Theme) -> &ControlDisplay {
        self.for_preference(theme.into())
    }
}
