use themeswitch::{ColorSchemeSignal, Subscription};
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent};

use crate::PREFERS_DARK_QUERY;

/// The `(prefers-color-scheme: dark)` media query.
///
/// Browsers without `matchMedia` report light and cannot be subscribed to.
#[derive(Debug, Clone)]
pub struct MediaQuerySignal {
    query: Option<MediaQueryList>,
}

impl MediaQuerySignal {
    pub fn new() -> Self {
        let query = web_sys::window()
            .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten());
        if query.is_none() {
            debug!("matchMedia unavailable, assuming light color scheme");
        }
        Self { query }
    }

    /// A signal for hosts without `matchMedia`: always light, no changes.
    pub fn unsupported() -> Self {
        Self { query: None }
    }
}

impl Default for MediaQuerySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        self.query.as_ref().is_some_and(MediaQueryList::matches)
    }

    fn subscribe(&self, mut listener: Box<dyn FnMut(bool)>) -> Option<Subscription> {
        let query = self.query.clone()?;
        let closure = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |event: MediaQueryListEvent| listener(event.matches()),
        );
        if let Err(e) =
            query.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        {
            debug!(error = ?e, "could not listen for color-scheme changes");
            return None;
        }
        Some(Subscription::new(move || {
            let _ = query
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }))
    }
}
