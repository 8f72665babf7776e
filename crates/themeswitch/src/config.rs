//! Toggle configuration.
//!
//! Every field has a default matching the conventional page markup, so an
//! empty document (`{}` or an empty YAML file) is a valid configuration.
//!
//! ```yaml
//! storage_key: theme-preference
//! root_attribute: data-theme
//! control_id: theme-toggle
//! icon_id: theme-icon
//! label_id: theme-label
//! policy: cycle
//! ```

use serde::{Deserialize, Serialize};

use crate::display::IconSet;
use crate::policy::TogglePolicy;
use crate::store::DEFAULT_STORAGE_KEY;

/// Settings shared by the controller and the host bindings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Key the preference is stored under.
    pub storage_key: String,
    /// Attribute set on the root element for explicit themes.
    pub root_attribute: String,
    /// Id of the clickable control.
    pub control_id: String,
    /// Id of the icon element inside the control.
    pub icon_id: String,
    /// Id of the label element inside the control.
    pub label_id: String,
    pub policy: TogglePolicy,
    /// Overrides the policy's default icons.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<IconSet>,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            root_attribute: "data-theme".to_string(),
            control_id: "theme-toggle".to_string(),
            icon_id: "theme-icon".to_string(),
            label_id: "theme-label".to_string(),
            policy: TogglePolicy::default(),
            icons: None,
        }
    }
}

/// Error returned when a configuration cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config field '{field}' must not be empty")]
    Empty { field: &'static str },
}

impl ToggleConfig {
    /// Default configuration using the given policy.
    pub fn with_policy(policy: TogglePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Parses and validates a YAML configuration.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the storage key and root attribute are usable.
    ///
    /// Element ids may be empty; that simply means the control is absent.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Empty {
                field: "storage_key",
            });
        }
        if self.root_attribute.is_empty() {
            return Err(ConfigError::Empty {
                field: "root_attribute",
            });
        }
        Ok(())
    }

    /// The icons in effect: the override if set, otherwise the policy default.
    pub fn icons(&self) -> IconSet {
        self.icons
            .clone()
            .unwrap_or_else(|| self.policy.default_icons())
    }
}
