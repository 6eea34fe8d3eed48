//! Display theme and host color-scheme detection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two-valued display theme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light background, dark text (fallback when nothing else is known).
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl ThemeMode {
    /// The literal written to durable storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this is the dark theme.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Resolve the theme at startup.
    ///
    /// Precedence is stored preference, then the host signal, then `Light`.
    #[must_use]
    pub fn resolve(stored: Option<Self>, prefers_dark: Option<bool>) -> Self {
        stored
            .or_else(|| prefers_dark.map(|dark| if dark { Self::Dark } else { Self::Light }))
            .unwrap_or_default()
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not `"light"` or `"dark"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct ParseThemeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

/// Read-only query for the host's color-scheme preference.
pub trait ColorSchemeProbe: fmt::Debug {
    /// `Some(true)` for a dark preference, `Some(false)` for light, `None`
    /// when the host gives no signal.
    fn prefers_dark(&self) -> Option<bool>;
}

/// Probe backed by the `COLORFGBG` environment variable.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvColorScheme;

impl ColorSchemeProbe for EnvColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        prefers_dark_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
    }
}

/// Probe with a fixed answer.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedColorScheme(pub Option<bool>);

impl ColorSchemeProbe for FixedColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }
}

/// Interpret a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// Background indices 7 and 15 are light; any other index is dark.
#[must_use]
pub fn prefers_dark_from_colorfgbg(colorfgbg: Option<&str>) -> Option<bool> {
    let bg = colorfgbg?.split(';').next_back()?.trim().parse::<u8>().ok()?;
    Some(bg != 7 && bg != 15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_is_strict_flip() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn test_storage_literals() -> Result<(), ParseThemeError> {
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!("dark".parse::<ThemeMode>()?, ThemeMode::Dark);
        assert_eq!("light".parse::<ThemeMode>()?, ThemeMode::Light);
        assert!("Dark".parse::<ThemeMode>().is_err());
        Ok(())
    }

    #[test]
    fn test_resolve_precedence() {
        assert_eq!(
            ThemeMode::resolve(Some(ThemeMode::Dark), Some(false)),
            ThemeMode::Dark
        );
        assert_eq!(
            ThemeMode::resolve(Some(ThemeMode::Light), Some(true)),
            ThemeMode::Light
        );
        assert_eq!(ThemeMode::resolve(None, Some(true)), ThemeMode::Dark);
        assert_eq!(ThemeMode::resolve(None, Some(false)), ThemeMode::Light);
        assert_eq!(ThemeMode::resolve(None, None), ThemeMode::Light);
    }

    #[test]
    fn test_colorfgbg_parsing() {
        assert_eq!(prefers_dark_from_colorfgbg(Some("15;0")), Some(true));
        assert_eq!(prefers_dark_from_colorfgbg(Some("0;15")), Some(false));
        assert_eq!(prefers_dark_from_colorfgbg(Some("0;default;7")), Some(false));
        assert_eq!(prefers_dark_from_colorfgbg(Some("garbage")), None);
        assert_eq!(prefers_dark_from_colorfgbg(None), None);
    }

    #[test]
    fn test_serde_uses_lowercase_literals() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark)?, "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"light\"")?;
        assert_eq!(parsed, ThemeMode::Light);
        Ok(())
    }
}
