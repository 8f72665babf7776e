//! Stored preference and effective theme values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The theme the user asked for.
///
/// `Auto` defers to the operating system's color-scheme preference. The
/// persisted form is the lowercase variant name (`"auto"`, `"light"`, `"dark"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

/// The theme actually rendered once `Auto` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl ThemePreference {
    /// All preferences, in cycle order.
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Auto,
        ThemePreference::Light,
        ThemePreference::Dark,
    ];

    /// Returns the persisted string form.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Auto => "auto",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    /// Resolves this preference against the OS signal.
    ///
    /// Explicit preferences ignore the signal. `Auto` yields [`Theme::Dark`]
    /// exactly when the OS prefers dark.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themeswitch::{Theme, ThemePreference};
    ///
    /// assert_eq!(ThemePreference::Light.resolve(true), Theme::Light);
    /// assert_eq!(ThemePreference::Auto.resolve(true), Theme::Dark);
    /// assert_eq!(ThemePreference::Auto.resolve(false), Theme::Light);
    /// ```
    pub fn resolve(self, os_prefers_dark: bool) -> Theme {
        match self {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Auto => Theme::from_prefers_dark(os_prefers_dark),
        }
    }

    /// The explicit theme this preference pins, or `None` for `Auto`.
    ///
    /// This is the value written to the document-level marker.
    pub fn marker(self) -> Option<Theme> {
        match self {
            ThemePreference::Auto => None,
            ThemePreference::Light => Some(Theme::Light),
            ThemePreference::Dark => Some(Theme::Dark),
        }
    }
}

impl Theme {
    pub fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        match theme {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        }
    }
}

/// Computes the effective theme for a preference and OS signal.
///
/// Free-function form of [`ThemePreference::resolve`].
pub fn effective_theme(pref: ThemePreference, os_prefers_dark: bool) -> Theme {
    pref.resolve(os_prefers_dark)
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored string is not a known preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference '{0}'")]
pub struct ParsePreferenceError(pub String);

impl FromStr for ThemePreference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ThemePreference::Auto),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            other => Err(ParsePreferenceError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preferences_ignore_signal() {
        for os in [true, false] {
            assert_eq!(ThemePreference::Light.resolve(os), Theme::Light);
            assert_eq!(ThemePreference::Dark.resolve(os), Theme::Dark);
        }
    }

    #[test]
    fn test_auto_follows_signal() {
        assert_eq!(effective_theme(ThemePreference::Auto, true), Theme::Dark);
        assert_eq!(effective_theme(ThemePreference::Auto, false), Theme::Light);
    }

    #[test]
    fn test_marker_cleared_for_auto() {
        assert_eq!(ThemePreference::Auto.marker(), None);
        assert_eq!(ThemePreference::Dark.marker(), Some(Theme::Dark));
        assert_eq!(ThemePreference::Light.marker(), Some(Theme::Light));
    }

    #[test]
    fn test_parse_persisted_strings() {
        for pref in ThemePreference::ALL {
            assert_eq!(pref.as_str().parse::<ThemePreference>(), Ok(pref));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_case_variants() {
        assert!("Dark".parse::<ThemePreference>().is_err());
        assert!("".parse::<ThemePreference>().is_err());
        let err = "sepia".parse::<ThemePreference>().unwrap_err();
        assert!(err.to_string().contains("sepia"));
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Theme::Light.opposite(), Theme::Dark);
        assert_eq!(Theme::Dark.opposite(), Theme::Light);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&ThemePreference::Dark).unwrap();
        assert_eq!(json, "\"dark\"");
        let back: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(back, Theme::Light);
    }
}
