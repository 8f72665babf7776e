use themeswitch::{PreferenceStore, StoreError};
use tracing::debug;
use web_sys::Storage;

/// Preference store backed by `window.localStorage`.
///
/// Storage can be missing entirely (no window, disabled cookies, sandboxed
/// iframes throw on access); every operation then reports
/// [`StoreError::Unavailable`] and the controller falls back to `auto`.
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    storage: Option<Storage>,
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        let storage = web_sys::window().and_then(|w| match w.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                debug!(error = ?e, "localStorage access denied");
                None
            }
        });
        Self {
            storage,
            key: key.into(),
        }
    }

    /// A store with no backing storage, for hosts that opt out of persistence.
    pub fn unavailable(key: impl Into<String>) -> Self {
        Self {
            storage: None,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_some()
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage.get_item(&self.key).map_err(|e| StoreError::Rejected {
            key: self.key.clone(),
            reason: format!("{e:?}"),
        })
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(&self.key, value)
            .map_err(|e| StoreError::Rejected {
                key: self.key.clone(),
                reason: format!("{e:?}"),
            })
    }
}
