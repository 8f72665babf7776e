//! Page-wiring decisions that don't need a browser.

use themeswitch::{ConfigError, Theme, ToggleConfig};

/// Change to the root element's theme attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerWrite<'a> {
    Set {
        attribute: &'a str,
        value: &'static str,
    },
    Remove {
        attribute: &'a str,
    },
}

pub fn marker_write(attribute: &str, marker: Option<Theme>) -> MarkerWrite<'_> {
    match marker {
        Some(theme) => MarkerWrite::Set {
            attribute,
            value: theme.as_str(),
        },
        None => MarkerWrite::Remove { attribute },
    }
}

/// Icon and label are written together or not at all.
pub fn control_pair<E>(icon: Option<E>, label: Option<E>) -> Option<(E, E)> {
    icon.zip(label)
}

/// When the click listener can be attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickWiring<E> {
    /// The control exists; attach now.
    Now(E),
    /// Mounted from `<head>`; look again once the document is parsed.
    WhenReady,
    /// The page is parsed and has no control.
    Skip,
}

pub fn click_wiring<E>(control: Option<E>, document_loading: bool) -> ClickWiring<E> {
    match control {
        Some(control) => ClickWiring::Now(control),
        None if document_loading => ClickWiring::WhenReady,
        None => ClickWiring::Skip,
    }
}

/// Config passed from JS: absent means defaults, present must be valid JSON.
pub fn parse_config(json: Option<&str>) -> Result<ToggleConfig, ConfigError> {
    match json {
        Some(json) => ToggleConfig::from_json(json),
        None => Ok(ToggleConfig::default()),
    }
}
