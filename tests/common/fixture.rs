//! Test fixture backed by a temporary settings file

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use folio::app::{App, ViewStateController};
use folio::config::Config;
use folio::links::LinkOpener;
use folio::storage::FileThemeStore;
use folio::theme::{FixedColorScheme, ThemeMode};
use tempfile::TempDir;

/// Test fixture that owns a temporary directory for the theme settings file
pub struct TestFixture {
    /// Temporary directory holding `settings.json`
    pub state_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Result<Self, std::io::Error> {
        Ok(Self {
            state_dir: TempDir::new()?,
        })
    }

    /// Path of the settings file inside the fixture
    pub fn settings_path(&self) -> PathBuf {
        self.state_dir.path().join("folio").join("settings.json")
    }

    /// A file store over the fixture's settings file
    pub fn store(&self) -> FileThemeStore {
        FileThemeStore::with_path(self.settings_path())
    }

    /// Write a raw settings file
    pub fn write_settings(&self, contents: &str) -> Result<(), std::io::Error> {
        let path = self.settings_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)
    }

    /// Persist `theme` the way the application does
    pub fn write_theme(&self, theme: ThemeMode) -> Result<(), std::io::Error> {
        self.write_settings(&format!("{{\"theme\": \"{theme}\"}}"))
    }

    /// Controller initialized from the fixture's store and a fixed host signal
    pub fn controller(&self, prefers_dark: Option<bool>) -> ViewStateController {
        ViewStateController::initialize(
            Box::new(self.store()),
            &FixedColorScheme(prefers_dark),
        )
    }

    /// Application over the fixture's store; links go to `opener`
    pub fn app(&self, opener: RecordingOpener) -> App {
        App::with_opener(Config::default(), self.controller(None), Box::new(opener))
    }
}

/// Link opener that records URLs instead of launching a browser
#[derive(Debug, Default, Clone)]
pub struct RecordingOpener {
    /// URLs opened so far
    pub opened: Rc<RefCell<Vec<String>>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> anyhow::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}
