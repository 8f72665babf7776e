//! # Themeswitch - persisted light/dark/auto theme preference
//!
//! Themeswitch keeps a page's theme in step with what the user picked and what
//! the operating system prefers:
//!
//! - **Preference**: `auto`, `light` or `dark`, persisted as a plain string
//! - **Effective theme**: `light` or `dark`, with `auto` resolved against the OS
//! - **Control**: an icon and label on the toggle, recomputed on every change
//!
//! ## Quick Start
//!
//! ```rust
//! use themeswitch::{
//!     mount, FixedSignal, MemorySink, MemoryStore, Theme, ThemeController, ToggleConfig,
//! };
//!
//! let sink = MemorySink::new();
//! let toggle = mount(ThemeController::new(
//!     &ToggleConfig::default(),
//!     MemoryStore::new(),
//!     sink.clone(),
//!     FixedSignal(true),
//! ));
//!
//! // Nothing stored: the marker is cleared and the OS decides.
//! assert_eq!(toggle.initial_state().effective, Theme::Dark);
//! assert_eq!(sink.marker(), None);
//!
//! toggle.click();
//! assert_eq!(sink.marker(), Some(Theme::Light));
//! ```
//!
//! ## Collaborators
//!
//! The controller never touches a document or storage directly. Hosts provide:
//!
//! - a [`PreferenceStore`] ([`MemoryStore`], [`FileStore`], or a browser store)
//! - a [`DocumentThemeSink`] that writes the marker and control display
//! - a [`ColorSchemeSignal`] ([`SystemSignal`], [`FixedSignal`], [`ManualSignal`])
//!
//! The `themeswitch-web` crate provides the browser implementations.
//!
//! ## Policies
//!
//! [`TogglePolicy::Cycle`] (default) cycles `auto → light → dark` and shows the
//! current preference. [`TogglePolicy::Toggle`] flips between light and dark
//! and shows the theme a click would switch to.

pub mod config;
pub mod controller;
pub mod display;
pub mod mount;
pub mod policy;
pub mod preference;
pub mod signal;
pub mod sink;
pub mod store;

pub use config::{ConfigError, ToggleConfig};
pub use controller::{ThemeController, ThemeState};
pub use display::{ControlDisplay, IconSet};
pub use mount::{mount, MountedToggle, ToggleHandle};
pub use policy::TogglePolicy;
pub use preference::{effective_theme, ParsePreferenceError, Theme, ThemePreference};
pub use signal::{ColorSchemeSignal, FixedSignal, ManualSignal, Subscription, SystemSignal};
pub use sink::{DocumentThemeSink, MemorySink};
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, DEFAULT_STORAGE_KEY};
