use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::{ColorSchemeSignal, Subscription};

type Detector = fn() -> bool;

/// Reads the OS color scheme on every query.
///
/// The desktop APIs behind detection have no portable change notification,
/// so this signal cannot be subscribed to. Hosts that learn about changes
/// some other way can feed them through [`ManualSignal`](super::ManualSignal).
#[derive(Debug, Clone, Copy)]
pub struct SystemSignal {
    detector: Detector,
}

impl SystemSignal {
    pub fn new() -> Self {
        Self {
            detector: os_prefers_dark,
        }
    }

    /// Replaces OS detection, for tests or forcing a mode.
    pub fn with_detector(detector: Detector) -> Self {
        Self { detector }
    }
}

impl Default for SystemSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSignal for SystemSignal {
    fn prefers_dark(&self) -> bool {
        (self.detector)()
    }

    fn subscribe(&self, _listener: Box<dyn FnMut(bool)>) -> Option<Subscription> {
        None
    }
}

// Anything other than an explicit dark answer counts as light.
fn os_prefers_dark() -> bool {
    matches!(detect_os_theme(), OsThemeMode::Dark)
}

/// A signal that never changes.
///
/// `FixedSignal::default()` reports light, which is the fallback for hosts
/// without any color-scheme query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSignal(pub bool);

impl ColorSchemeSignal for FixedSignal {
    fn prefers_dark(&self) -> bool {
        self.0
    }

    fn subscribe(&self, _listener: Box<dyn FnMut(bool)>) -> Option<Subscription> {
        None
    }
}
