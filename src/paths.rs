//! Platform-specific filesystem path helpers.

use std::ffi::OsString;
use std::path::PathBuf;

/// Path to folio's debug log file.
///
/// This is located in the OS temp directory.
#[must_use]
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("folio.log")
}

#[must_use]
#[cfg(windows)]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    if let Some(home) = var_os("USERPROFILE") {
        return Some(PathBuf::from(home));
    }

    let drive = var_os("HOMEDRIVE");
    let path = var_os("HOMEPATH");
    if let (Some(drive), Some(path)) = (drive, path) {
        let mut combined = PathBuf::from(drive);
        combined.push(path);
        return Some(combined);
    }

    var_os("HOME").map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
fn home_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("HOME").map(PathBuf::from)
}

/// Locate the user's home directory.
#[must_use]
pub fn home_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    home_dir_from(&mut var_os)
}

#[must_use]
#[cfg(windows)]
fn data_local_dir_from(
    var_os: &mut impl FnMut(&'static str) -> Option<OsString>,
) -> Option<PathBuf> {
    var_os("LOCALAPPDATA")
        .or_else(|| var_os("APPDATA"))
        .map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
fn data_local_dir_from(
    var_os: &mut impl FnMut(&'static str) -> Option<OsString>,
) -> Option<PathBuf> {
    var_os("XDG_DATA_HOME").map(PathBuf::from).or_else(|| {
        home_dir_from(var_os).map(|home| {
            #[cfg(target_os = "macos")]
            {
                home.join("Library").join("Application Support")
            }

            #[cfg(not(target_os = "macos"))]
            {
                home.join(".local").join("share")
            }
        })
    })
}

/// Resolve the local application data directory for the current platform.
#[must_use]
pub fn data_local_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    data_local_dir_from(&mut var_os)
}

#[must_use]
#[cfg(windows)]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("APPDATA").map(PathBuf::from)
}

#[must_use]
#[cfg(not(windows))]
fn config_dir_from(var_os: &mut impl FnMut(&'static str) -> Option<OsString>) -> Option<PathBuf> {
    var_os("XDG_CONFIG_HOME").map(PathBuf::from).or_else(|| {
        home_dir_from(var_os).map(|home| {
            #[cfg(target_os = "macos")]
            {
                home.join("Library").join("Application Support")
            }

            #[cfg(not(target_os = "macos"))]
            {
                home.join(".config")
            }
        })
    })
}

/// Resolve the user configuration directory for the current platform.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    let mut var_os = |key: &'static str| std::env::var_os(key);
    config_dir_from(&mut var_os)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_path_suffix() {
        let path = log_path();
        assert!(path.ends_with("folio.log"));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_home_dir_matches_home_env() {
        let expected = std::env::var_os("HOME").map(PathBuf::from);
        assert_eq!(home_dir(), expected);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_data_local_dir_from_prefers_xdg_data_home() {
        let mut env = |key: &'static str| {
            (key == "XDG_DATA_HOME").then(|| OsString::from("/tmp/folio-xdg"))
        };

        assert_eq!(
            data_local_dir_from(&mut env),
            Some(PathBuf::from("/tmp/folio-xdg"))
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_data_local_dir_from_falls_back_to_home() {
        let mut env =
            |key: &'static str| (key == "HOME").then(|| OsString::from("/tmp/folio-home"));

        #[cfg(target_os = "macos")]
        let expected = PathBuf::from("/tmp/folio-home")
            .join("Library")
            .join("Application Support");

        #[cfg(not(target_os = "macos"))]
        let expected = PathBuf::from("/tmp/folio-home")
            .join(".local")
            .join("share");

        assert_eq!(data_local_dir_from(&mut env), Some(expected));
    }

    #[cfg(all(not(windows), not(target_os = "macos")))]
    #[test]
    fn test_config_dir_from_falls_back_to_dot_config() {
        let mut env =
            |key: &'static str| (key == "HOME").then(|| OsString::from("/tmp/folio-home"));
        assert_eq!(
            config_dir_from(&mut env),
            Some(PathBuf::from("/tmp/folio-home/.config"))
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_dirs_none_when_no_env() {
        let mut env = |_: &'static str| None::<OsString>;
        assert_eq!(data_local_dir_from(&mut env), None);
        let mut env = |_: &'static str| None::<OsString>;
        assert_eq!(config_dir_from(&mut env), None);
    }
}
