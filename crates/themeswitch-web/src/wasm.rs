use std::cell::RefCell;
use std::rc::Rc;

use themeswitch::{mount, MountedToggle, Subscription, ThemeController, ToggleConfig, ToggleHandle};
use tracing::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event};

use crate::markup::{click_wiring, parse_config, ClickWiring};
use crate::{DomSink, LocalStorageStore, MediaQuerySignal};

type BrowserController = ThemeController<LocalStorageStore, DomSink, MediaQuerySignal>;
type BrowserHandle = ToggleHandle<LocalStorageStore, DomSink, MediaQuerySignal>;
type ClickSlot = Rc<RefCell<Option<Subscription>>>;

/// Builds a controller over the current page.
pub fn browser_controller(config: &ToggleConfig) -> BrowserController {
    ThemeController::new(
        config,
        LocalStorageStore::new(config.storage_key.clone()),
        DomSink::from_config(config),
        MediaQuerySignal::new(),
    )
}

/// A mounted theme toggle exported to JavaScript.
///
/// Calling `free()` from JS detaches the click, ready and color-scheme
/// listeners.
#[wasm_bindgen]
pub struct WebThemeToggle {
    toggle: MountedToggle<LocalStorageStore, DomSink, MediaQuerySignal>,
    _click: ClickSlot,
    _ready: Option<Subscription>,
}

/// Applies the stored theme and wires the toggle control.
///
/// `config` is an optional JSON object (see `ToggleConfig`). An invalid
/// config is a page-authoring error and is returned to the caller.
///
/// When called while the document is still loading and the control is not
/// parsed yet, the marker is applied immediately and the control is shown
/// and wired on `DOMContentLoaded`.
#[wasm_bindgen(js_name = mountThemeToggle)]
pub fn mount_theme_toggle(config: Option<String>) -> Result<WebThemeToggle, JsValue> {
    let config =
        parse_config(config.as_deref()).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let toggle = mount(browser_controller(&config));

    let document = web_sys::window().and_then(|w| w.document());
    let loading = document
        .as_ref()
        .is_some_and(|d| d.ready_state() == "loading");
    let control = document
        .as_ref()
        .and_then(|d| control_element(d, &config.control_id));

    let click: ClickSlot = Rc::new(RefCell::new(None));
    let mut ready = None;
    match click_wiring(control, loading) {
        ClickWiring::Now(control) => {
            *click.borrow_mut() = attach_click(control, toggle.handle());
        }
        ClickWiring::WhenReady => {
            if let Some(document) = &document {
                ready = wire_when_ready(
                    document,
                    config.control_id.clone(),
                    toggle.handle(),
                    click.clone(),
                );
            }
        }
        ClickWiring::Skip => {
            debug!(id = %config.control_id, "theme control not found, clicks not wired");
        }
    }

    Ok(WebThemeToggle {
        toggle,
        _click: click,
        _ready: ready,
    })
}

#[wasm_bindgen]
impl WebThemeToggle {
    /// Same as clicking the control. Returns the new preference.
    pub fn click(&self) -> String {
        self.toggle.click().to_string()
    }

    pub fn preference(&self) -> String {
        self.toggle.preference().to_string()
    }

    #[wasm_bindgen(js_name = effectiveTheme)]
    pub fn effective_theme(&self) -> String {
        self.toggle.state().effective.to_string()
    }
}

fn control_element(document: &Document, id: &str) -> Option<Element> {
    if id.is_empty() {
        return None;
    }
    document.get_element_by_id(id)
}

fn wire_when_ready(
    document: &Document,
    control_id: String,
    handle: BrowserHandle,
    slot: ClickSlot,
) -> Option<Subscription> {
    let lookup = document.clone();
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        // Icon and label exist now.
        handle.refresh();
        if slot.borrow().is_some() {
            return;
        }
        match control_element(&lookup, &control_id) {
            Some(control) => *slot.borrow_mut() = attach_click(control, handle.clone()),
            None => debug!(id = %control_id, "theme control not found, clicks not wired"),
        }
    });
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
    {
        debug!(error = ?e, "could not defer theme toggle wiring");
        return None;
    }
    let target = document.clone();
    Some(Subscription::new(move || {
        let _ = target.remove_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        );
    }))
}

fn attach_click(control: Element, handle: BrowserHandle) -> Option<Subscription> {
    let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        handle.click();
    });
    if let Err(e) =
        control.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
    {
        debug!(error = ?e, "could not attach theme toggle click listener");
        return None;
    }
    Some(Subscription::new(move || {
        let _ = control
            .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    }))
}
