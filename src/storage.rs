//! Durable storage for the theme preference.
//!
//! The only thing folio persists is a single `"theme"` key whose value is
//! the literal `"dark"` or `"light"`. A missing file or key is a valid
//! state meaning "no preference".

use crate::paths;
use crate::theme::ThemeMode;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable overriding the settings file location.
pub const STATE_PATH_ENV: &str = "FOLIO_STATE_PATH";

/// Errors raised by a [`ThemeStore`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("settings file {path}: {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The settings file is not valid JSON.
    #[error("settings file {path} is malformed: {source}")]
    Malformed {
        /// File that was being parsed.
        path: PathBuf,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// The store refuses all access.
    #[error("theme storage is unavailable")]
    Unavailable,
}

/// Durable key/value slot for the theme preference.
pub trait ThemeStore: fmt::Debug {
    /// Read the stored preference, `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn load(&self) -> Result<Option<ThemeMode>, StorageError>;

    /// Write the preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn save(&self, theme: ThemeMode) -> Result<(), StorageError>;
}

/// On-disk layout of the settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SettingsFile {
    /// Raw theme literal; anything other than `"dark"`/`"light"` is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
}

/// Theme store backed by a JSON settings file.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Store at the default location (see [`Self::default_path`]).
    #[must_use]
    pub fn new() -> Self {
        Self::with_path(Self::default_path())
    }

    /// Store at an explicit path.
    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// `$FOLIO_STATE_PATH` if set, otherwise `<data_local_dir>/folio/settings.json`.
    #[must_use]
    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(STATE_PATH_ENV) {
            return PathBuf::from(path);
        }
        paths::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("folio")
            .join("settings.json")
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the stored preference. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Cleared theme preference");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for FileThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>, StorageError> {
        if !self.path.exists() {
            debug!("Settings file not found, no stored theme");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let settings: SettingsFile =
            serde_json::from_str(&content).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        let Some(raw) = settings.theme else {
            return Ok(None);
        };
        match raw.parse::<ThemeMode>() {
            Ok(theme) => {
                debug!(%theme, path = %self.path.display(), "Loaded stored theme");
                Ok(Some(theme))
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Ignoring stored theme");
                Ok(None)
            }
        }
    }

    fn save(&self, theme: ThemeMode) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let settings = SettingsFile {
            theme: Some(theme.as_str().to_string()),
        };
        let content =
            serde_json::to_string_pretty(&settings).map_err(|source| StorageError::Malformed {
                path: self.path.clone(),
                source,
            })?;

        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;
        debug!(%theme, path = %self.path.display(), "Saved theme");
        Ok(())
    }
}

/// Session-only store; nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Cell<Option<ThemeMode>>,
}

impl MemoryThemeStore {
    /// Store pre-seeded with a value (or empty).
    #[must_use]
    pub const fn new(theme: Option<ThemeMode>) -> Self {
        Self {
            theme: Cell::new(theme),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<ThemeMode>, StorageError> {
        Ok(self.theme.get())
    }

    fn save(&self, theme: ThemeMode) -> Result<(), StorageError> {
        self.theme.set(Some(theme));
        Ok(())
    }
}
