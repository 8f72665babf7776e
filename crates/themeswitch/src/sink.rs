//! Where the controller writes the resolved theme.

use std::cell::RefCell;
use std::rc::Rc;

use crate::display::ControlDisplay;
use crate::preference::Theme;

/// Receives the document-level marker and the control display.
///
/// Implementations must tolerate a missing control: `show_control` returns
/// `false` when it skipped the update and must never fail the marker write.
pub trait DocumentThemeSink {
    /// Sets the marker to an explicit theme, or clears it with `None` so the
    /// page's OS-driven style rule takes over.
    fn set_marker(&mut self, marker: Option<Theme>);

    /// Updates the control's icon and label. Returns whether it was shown.
    fn show_control(&mut self, display: &ControlDisplay) -> bool;
}

#[derive(Debug, Default)]
struct Recorded {
    marker: Option<Theme>,
    display: Option<ControlDisplay>,
    marker_writes: usize,
}

/// Sink that records what it was told, for tests and headless hosts.
///
/// Clones share the recording.
#[derive(Debug, Clone)]
pub struct MemorySink {
    recorded: Rc<RefCell<Recorded>>,
    has_control: bool,
}

impl MemorySink {
    /// A sink with a control present.
    pub fn new() -> Self {
        Self {
            recorded: Rc::default(),
            has_control: true,
        }
    }

    /// A sink whose page has no toggle control.
    pub fn without_control() -> Self {
        Self {
            has_control: false,
            ..Self::new()
        }
    }

    pub fn marker(&self) -> Option<Theme> {
        self.recorded.borrow().marker
    }

    pub fn display(&self) -> Option<ControlDisplay> {
        self.recorded.borrow().display.clone()
    }

    pub fn marker_writes(&self) -> usize {
        self.recorded.borrow().marker_writes
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentThemeSink for MemorySink {
    fn set_marker(&mut self, marker: Option<Theme>) {
        let mut recorded = self.recorded.borrow_mut();
        recorded.marker = marker;
        recorded.marker_writes += 1;
    }

    fn show_control(&mut self, display: &ControlDisplay) -> bool {
        if !self.has_control {
            return false;
        }
        self.recorded.borrow_mut().display = Some(display.clone());
        true
    }
}

impl<T: DocumentThemeSink + ?Sized> DocumentThemeSink for Box<T> {
    fn set_marker(&mut self, marker: Option<Theme>) {
        (**self).set_marker(marker)
    }

    fn show_control(&mut self, display: &ControlDisplay) -> bool {
        (**self).show_control(display)
    }
}
