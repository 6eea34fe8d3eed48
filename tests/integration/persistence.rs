//! Theme persistence through the settings file

use crate::common::{RecordingOpener, TestFixture};
use folio::storage::{StorageError, ThemeStore};
use folio::theme::ThemeMode;
use pretty_assertions::assert_eq;

#[test]
fn test_stored_dark_wins_over_environment() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.write_theme(ThemeMode::Dark)?;

    for env in [None, Some(false), Some(true)] {
        assert_eq!(fixture.controller(env).theme(), ThemeMode::Dark, "{env:?}");
    }
    Ok(())
}

#[test]
fn test_environment_dark_without_stored_value() -> Result<(), std::io::Error> {
    let fixture = TestFixture::new()?;
    assert_eq!(fixture.controller(Some(true)).theme(), ThemeMode::Dark);
    Ok(())
}

#[test]
fn test_light_without_any_signal() -> Result<(), std::io::Error> {
    let fixture = TestFixture::new()?;
    assert_eq!(fixture.controller(None).theme(), ThemeMode::Light);
    Ok(())
}

#[test]
fn test_initialize_creates_no_file() -> Result<(), std::io::Error> {
    let fixture = TestFixture::new()?;
    let _view = fixture.controller(Some(true));
    assert!(!fixture.settings_path().exists());
    Ok(())
}

#[test]
fn test_toggle_survives_restart() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;

    let mut app = fixture.app(RecordingOpener::default());
    assert_eq!(app.toggle_theme(), ThemeMode::Dark);
    drop(app);

    let contents = std::fs::read_to_string(fixture.settings_path())?;
    let value: serde_json::Value = serde_json::from_str(&contents)?;
    assert_eq!(value["theme"], "dark");

    // A light host signal does not override the saved choice.
    assert_eq!(fixture.controller(Some(false)).theme(), ThemeMode::Dark);
    Ok(())
}

#[test]
fn test_unknown_literal_is_no_preference() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.write_settings(r#"{"theme": "sepia"}"#)?;

    assert_eq!(fixture.store().load()?, None);
    assert_eq!(fixture.controller(Some(true)).theme(), ThemeMode::Dark);
    Ok(())
}

#[test]
fn test_missing_key_is_no_preference() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.write_settings("{}")?;
    assert_eq!(fixture.store().load()?, None);
    Ok(())
}

#[test]
fn test_malformed_file_falls_back() -> Result<(), std::io::Error> {
    let fixture = TestFixture::new()?;
    fixture.write_settings("not json")?;

    assert!(matches!(
        fixture.store().load(),
        Err(StorageError::Malformed { .. })
    ));
    assert_eq!(fixture.controller(None).theme(), ThemeMode::Light);
    Ok(())
}

#[test]
fn test_toggle_with_unwritable_store_keeps_memory_value() -> Result<(), Box<dyn std::error::Error>>
{
    let fixture = TestFixture::new()?;
    // A directory where the settings file should be makes every write fail.
    std::fs::create_dir_all(fixture.settings_path())?;

    let mut view = fixture.controller(None);
    assert_eq!(view.toggle_theme(), ThemeMode::Dark);
    assert_eq!(view.theme(), ThemeMode::Dark);
    assert_eq!(view.toggle_theme(), ThemeMode::Light);
    assert_eq!(view.theme(), ThemeMode::Light);
    Ok(())
}

#[test]
fn test_clear_forgets_preference() -> Result<(), Box<dyn std::error::Error>> {
    let fixture = TestFixture::new()?;
    fixture.write_theme(ThemeMode::Dark)?;

    let store = fixture.store();
    store.clear()?;
    assert_eq!(store.load()?, None);
    // Clearing twice is fine.
    store.clear()?;
    Ok(())
}
