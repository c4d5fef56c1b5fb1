//! Theme preference persistence through the real config file.

use std::fs;

use reckon_engine::{App, ConfigPreferenceStore, NotificationLevel, ReckonConfig, Theme, UiOptions};
use tempfile::tempdir;

use crate::common::{test_app, type_str};

#[test]
fn toggling_writes_dark_mode_to_config() {
    let dir = tempdir().unwrap();
    let path = dir.path().join(".reckon").join("config.toml");
    let mut app = App::new(
        UiOptions::default(),
        ConfigPreferenceStore::new(Some(path.clone())),
    );

    type_str(&mut app, "t");
    assert_eq!(app.theme(), Theme::Dark);
    let saved = ReckonConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(saved.ui_options().theme, Theme::Dark);

    type_str(&mut app, "T");
    assert_eq!(app.theme(), Theme::Light);
    let saved = ReckonConfig::load_from(&path).unwrap().unwrap();
    assert_eq!(saved.ui_options().theme, Theme::Light);
    let note = app.notification().expect("theme notification");
    assert_eq!(note.level(), NotificationLevel::Info);
}

#[test]
fn saved_preference_is_restored_on_next_start() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "# keep me\n[appearance]\nascii_only = true\n").unwrap();

    let options = ReckonConfig::load_from(&path).unwrap().unwrap().ui_options();
    assert_eq!(options.theme, Theme::Light);
    let mut app = App::new(options, ConfigPreferenceStore::new(Some(path.clone())));
    type_str(&mut app, "t");
    drop(app);

    let restored = ReckonConfig::load_from(&path).unwrap().unwrap().ui_options();
    assert_eq!(restored.theme, Theme::Dark);
    assert!(restored.ascii_only);
    assert!(fs::read_to_string(&path).unwrap().contains("# keep me"));
}

#[test]
fn unknown_config_location_still_toggles() {
    let mut app = App::new(UiOptions::default(), ConfigPreferenceStore::new(None));
    type_str(&mut app, "t");

    assert_eq!(app.theme(), Theme::Dark);
    let note = app.notification().expect("persistence failure is reported");
    assert!(note.message().contains("Could not determine config path"));
}

#[test]
fn theme_never_changes_the_calculation() {
    let mut app = test_app();
    type_str(&mut app, "7+");
    let before = app.readout();

    type_str(&mut app, "tt");
    assert_eq!(app.readout(), before);

    type_str(&mut app, "1=");
    assert_eq!(app.readout().primary, "8");
}
