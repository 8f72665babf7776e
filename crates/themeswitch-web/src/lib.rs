#![forbid(unsafe_code)]

//! Browser host for themeswitch.
//!
//! Wires a [`ThemeController`](themeswitch::ThemeController) to the page:
//! - [`LocalStorageStore`]: the preference in `window.localStorage`,
//! - [`DomSink`]: the root `data-theme` attribute and the control's icon/label,
//! - [`MediaQuerySignal`]: `(prefers-color-scheme: dark)`,
//! - [`WebThemeToggle`]: the `wasm-bindgen` entry point that mounts all three
//!   and attaches the click listener.
//!
//! Load the module in the page `<head>` and call `mountThemeToggle()` before
//! first paint so the stored theme is applied without a flash. The control
//! does not need to exist yet: its icon and label are looked up on every
//! update, and click wiring waits for `DOMContentLoaded` while the page is
//! still loading.

#[cfg(target_arch = "wasm32")]
mod dom;
pub mod markup;
#[cfg(target_arch = "wasm32")]
mod media;
#[cfg(target_arch = "wasm32")]
mod storage;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSink;
#[cfg(target_arch = "wasm32")]
pub use media::MediaQuerySignal;
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorageStore;
#[cfg(target_arch = "wasm32")]
pub use wasm::{browser_controller, mount_theme_toggle, WebThemeToggle};

pub use themeswitch;

/// Media query whose `matches` is the OS "prefers dark" signal.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";
