//! Browser tests for the DOM, storage and media-query bindings.
//!
//! Run with `wasm-pack test --headless --firefox crates/themeswitch-web`.

#![cfg(target_arch = "wasm32")]

use themeswitch::{
    ColorSchemeSignal, ControlDisplay, DocumentThemeSink, PreferenceStore, StoreError, Theme,
    ToggleConfig,
};
use themeswitch_web::{
    mount_theme_toggle, DomSink, LocalStorageStore, MediaQuerySignal, PREFERS_DARK_QUERY,
};
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, Storage};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn local_storage() -> Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn add_element(tag: &str, id: &str) -> Element {
    let doc = document();
    let el = doc.create_element(tag).unwrap();
    el.set_id(id);
    doc.body().unwrap().append_child(&el).unwrap();
    el
}

fn root_attribute(name: &str) -> Option<String> {
    document().document_element().unwrap().get_attribute(name)
}

fn config(prefix: &str) -> ToggleConfig {
    ToggleConfig {
        storage_key: format!("{prefix}-pref"),
        root_attribute: format!("data-{prefix}"),
        control_id: format!("{prefix}-toggle"),
        icon_id: format!("{prefix}-icon"),
        label_id: format!("{prefix}-label"),
        ..ToggleConfig::default()
    }
}

#[wasm_bindgen_test]
fn dom_sink_marks_root_without_control() {
    let config = config("no-control");
    let mut sink = DomSink::from_document(Some(document()), &config);

    sink.set_marker(Some(Theme::Dark));
    assert_eq!(root_attribute(&config.root_attribute).as_deref(), Some("dark"));
    assert!(!sink.show_control(&ControlDisplay::new("●", "Dark")));

    sink.set_marker(None);
    assert_eq!(root_attribute(&config.root_attribute), None);
}

#[wasm_bindgen_test]
fn dom_sink_needs_both_icon_and_label() {
    let config = config("icon-only");
    let icon = add_element("span", &config.icon_id);
    let mut sink = DomSink::from_document(Some(document()), &config);

    assert!(!sink.show_control(&ControlDisplay::new("○", "Light")));
    assert_eq!(icon.text_content().as_deref(), Some(""));
    icon.remove();
}

#[wasm_bindgen_test]
fn dom_sink_finds_control_added_after_construction() {
    let config = config("late-control");
    let mut sink = DomSink::from_document(Some(document()), &config);
    assert!(!sink.has_control());

    let icon = add_element("span", &config.icon_id);
    let label = add_element("span", &config.label_id);

    assert!(sink.show_control(&ControlDisplay::new("○", "Light")));
    assert_eq!(icon.text_content().as_deref(), Some("○"));
    assert_eq!(label.text_content().as_deref(), Some("Light"));

    icon.remove();
    label.remove();
}

#[wasm_bindgen_test]
fn local_storage_store_round_trip() {
    let key = "round-trip-pref";
    local_storage().remove_item(key).unwrap();
    let mut store = LocalStorageStore::new(key);
    assert!(store.is_available());
    assert_eq!(store.load().unwrap(), None);

    store.save("dark").unwrap();
    assert_eq!(store.load().unwrap().as_deref(), Some("dark"));
    assert_eq!(local_storage().get_item(key).unwrap().as_deref(), Some("dark"));

    local_storage().remove_item(key).unwrap();
}

#[wasm_bindgen_test]
fn unavailable_store_reports_unavailable() {
    let mut store = LocalStorageStore::unavailable("detached-pref");
    assert!(matches!(store.load(), Err(StoreError::Unavailable)));
    assert!(matches!(store.save("light"), Err(StoreError::Unavailable)));
}

#[wasm_bindgen_test]
fn media_signal_matches_window_query() {
    let expected = web_sys::window()
        .unwrap()
        .match_media(PREFERS_DARK_QUERY)
        .unwrap()
        .map_or(false, |q| q.matches());
    let signal = MediaQuerySignal::new();
    assert_eq!(signal.prefers_dark(), expected);
    assert!(signal.subscribe(Box::new(|_| {})).is_some());
}

#[wasm_bindgen_test]
fn unsupported_media_signal_is_light_without_subscription() {
    let signal = MediaQuerySignal::unsupported();
    assert!(!signal.prefers_dark());
    assert!(signal.subscribe(Box::new(|_| {})).is_none());
}

#[wasm_bindgen_test]
fn mount_rejects_invalid_config() {
    assert!(mount_theme_toggle(Some("not json".to_string())).is_err());
    assert!(mount_theme_toggle(Some(r#"{"storage_key": ""}"#.to_string())).is_err());
}

#[wasm_bindgen_test]
fn dropping_toggle_detaches_click_listener() {
    let config = config("teardown");
    local_storage().remove_item(&config.storage_key).unwrap();
    let control = add_element("button", &config.control_id);
    let icon = add_element("span", &config.icon_id);
    let label = add_element("span", &config.label_id);
    let json = serde_json::to_string(&config).unwrap();

    let toggle = mount_theme_toggle(Some(json)).unwrap();
    assert_eq!(label.text_content().as_deref(), Some("Auto"));

    control.dispatch_event(&Event::new("click").unwrap()).unwrap();
    assert_eq!(toggle.preference(), "light");
    assert_eq!(
        root_attribute(&config.root_attribute).as_deref(),
        Some("light")
    );

    drop(toggle);
    control.dispatch_event(&Event::new("click").unwrap()).unwrap();
    assert_eq!(
        local_storage()
            .get_item(&config.storage_key)
            .unwrap()
            .as_deref(),
        Some("light")
    );

    local_storage().remove_item(&config.storage_key).unwrap();
    for el in [control, icon, label] {
        el.remove();
    }
}
