//! Durable storage for the preference string.
//!
//! - [`PreferenceStore`]: the trait the controller reads and writes through
//! - [`MemoryStore`]: shared in-memory slot for tests and headless hosts
//! - [`FileStore`]: a single plain-text file for native hosts
//! - [`StoreError`]: failures reported by a backend
//!
//! A store is bound to one key when it is constructed. It only moves raw
//! strings; interpreting them is the controller's job.

mod file;
mod memory;

use std::io;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Default key under which the preference is stored.
pub const DEFAULT_STORAGE_KEY: &str = "theme-preference";

/// A key/value backend holding the persisted preference.
pub trait PreferenceStore {
    /// Reads the stored value, `Ok(None)` when nothing has been written.
    fn load(&self) -> Result<Option<String>, StoreError>;

    /// Writes the value, replacing any previous one.
    fn save(&mut self, value: &str) -> Result<(), StoreError>;
}

/// Error raised by a [`PreferenceStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The host has no storage (disabled, sandboxed, private mode).
    #[error("preference storage is unavailable")]
    Unavailable,
    /// The backend refused the operation (quota exceeded, access denied).
    #[error("storage rejected key '{key}': {reason}")]
    Rejected { key: String, reason: String },
    #[error("preference file error: {0}")]
    Io(#[from] io::Error),
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn load(&self) -> Result<Option<String>, StoreError> {
        (**self).load()
    }

    fn save(&mut self, value: &str) -> Result<(), StoreError> {
        (**self).save(value)
    }
}
