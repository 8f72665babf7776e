//! End-to-end toggle behavior against in-memory collaborators.

use tempfile::TempDir;
use themeswitch::{
    mount, FileStore, ManualSignal, MemorySink, MemoryStore, Theme, ThemeController,
    ThemePreference, TogglePolicy, ToggleConfig,
};

fn mounted(
    policy: TogglePolicy,
    store: &MemoryStore,
    sink: &MemorySink,
    signal: &ManualSignal,
) -> themeswitch::MountedToggle<MemoryStore, MemorySink, ManualSignal> {
    mount(ThemeController::new(
        &ToggleConfig::with_policy(policy),
        store.clone(),
        sink.clone(),
        signal.clone(),
    ))
}

#[test]
fn test_cycle_from_empty_store() {
    let store = MemoryStore::new();
    let sink = MemorySink::new();
    let toggle = mounted(TogglePolicy::Cycle, &store, &sink, &ManualSignal::new(false));

    assert_eq!(toggle.preference(), ThemePreference::Auto);

    toggle.click();
    assert_eq!(store.value().as_deref(), Some("light"));
    assert_eq!(sink.display().unwrap().label, "Light");

    toggle.click();
    assert_eq!(store.value().as_deref(), Some("dark"));
    assert_eq!(sink.marker(), Some(Theme::Dark));

    toggle.click();
    assert_eq!(store.value().as_deref(), Some("auto"));
    assert_eq!(sink.marker(), None);
    assert_eq!(sink.display().unwrap().label, "Auto");

    // Fourth click repeats the first transition.
    toggle.click();
    assert_eq!(store.value().as_deref(), Some("light"));
}

#[test]
fn test_toggle_collapses_auto_and_never_returns() {
    let store = MemoryStore::with_value("auto");
    let sink = MemorySink::new();
    let toggle = mounted(TogglePolicy::Toggle, &store, &sink, &ManualSignal::new(true));

    // Effective dark, so the control offers light.
    assert_eq!(sink.display().unwrap().label, "Light");

    let mut seen = Vec::new();
    for _ in 0..3 {
        seen.push(toggle.click());
    }
    assert_eq!(
        seen,
        vec![
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::Light
        ]
    );
    assert_eq!(store.value().as_deref(), Some("light"));
    assert_eq!(sink.display().unwrap().label, "Dark");
}

#[test]
fn test_os_flip_under_auto_updates_control_only() {
    let store = MemoryStore::with_value("auto");
    let sink = MemorySink::new();
    let signal = ManualSignal::new(false);
    let _toggle = mounted(TogglePolicy::Toggle, &store, &sink, &signal);

    assert_eq!(sink.marker(), None);
    assert_eq!(sink.display().unwrap().label, "Dark");

    signal.set(true);

    assert_eq!(sink.marker(), None);
    assert_eq!(sink.display().unwrap().label, "Light");
    assert_eq!(store.value().as_deref(), Some("auto"));
}

#[test]
fn test_os_flip_under_auto_with_cycle_keeps_auto_label() {
    let store = MemoryStore::new();
    let sink = MemorySink::new();
    let signal = ManualSignal::new(false);
    let toggle = mounted(TogglePolicy::Cycle, &store, &sink, &signal);

    signal.set(true);
    assert_eq!(sink.marker(), None);
    assert_eq!(sink.display().unwrap().label, "Auto");
    assert_eq!(toggle.state().effective, Theme::Dark);
    assert!(store.value().is_none());
}

#[test]
fn test_os_flip_with_explicit_preference_changes_nothing() {
    let store = MemoryStore::with_value("light");
    let sink = MemorySink::new();
    let signal = ManualSignal::new(false);
    let _toggle = mounted(TogglePolicy::Cycle, &store, &sink, &signal);
    let writes = sink.marker_writes();

    signal.set(true);
    assert_eq!(sink.marker_writes(), writes);
    assert_eq!(sink.marker(), Some(Theme::Light));
}

#[test]
fn test_missing_control_degrades_gracefully() {
    let sink = MemorySink::without_control();
    let toggle = mounted(
        TogglePolicy::Cycle,
        &MemoryStore::new(),
        &sink,
        &ManualSignal::new(false),
    );
    toggle.click();
    toggle.click();
    assert_eq!(sink.marker(), Some(Theme::Dark));
    assert!(sink.display().is_none());
}

#[test]
fn test_file_store_persists_across_mounts() {
    let dir = TempDir::new().unwrap();
    let config = ToggleConfig::default();
    let signal = ManualSignal::new(false);

    let first = mount(ThemeController::new(
        &config,
        FileStore::in_dir(dir.path(), &config.storage_key),
        MemorySink::new(),
        signal.clone(),
    ));
    first.click();
    first.click();
    first.unmount();

    let sink = MemorySink::new();
    let second = mount(ThemeController::new(
        &config,
        FileStore::in_dir(dir.path(), &config.storage_key),
        sink.clone(),
        signal,
    ));
    assert_eq!(second.preference(), ThemePreference::Dark);
    assert_eq!(sink.marker(), Some(Theme::Dark));
}
