//! Color palettes for the TUI
//!
//! One palette per theme; amber accent on slate (dark) or gray (light).

use crate::theme::ThemeMode;
use ratatui::style::Color;

/// Semantic colors used by every render function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Sidebar, cards and status bar
    pub surface: Color,
    /// Focused card / chip background
    pub surface_highlight: Color,
    /// Block borders
    pub border: Color,
    /// Body text
    pub text_primary: Color,
    /// Secondary text (descriptions, previews)
    pub text_dim: Color,
    /// Tertiary text (asset references, hints)
    pub text_muted: Color,
    /// Brand accent (active section, links, dates)
    pub accent: Color,
    /// Text drawn on top of the accent color
    pub on_accent: Color,
    /// Project detail background
    pub modal_bg: Color,
}

/// Slate background, light text
pub const DARK: Palette = Palette {
    background: Color::Rgb(2, 6, 23),
    surface: Color::Rgb(15, 23, 42),
    surface_highlight: Color::Rgb(30, 41, 59),
    border: Color::Rgb(51, 65, 85),
    text_primary: Color::Rgb(243, 244, 246),
    text_dim: Color::Rgb(156, 163, 175),
    text_muted: Color::Rgb(100, 116, 139),
    accent: Color::Rgb(245, 158, 11),
    on_accent: Color::Rgb(17, 24, 39),
    modal_bg: Color::Rgb(15, 23, 42),
};

/// Gray background, dark text
pub const LIGHT: Palette = Palette {
    background: Color::Rgb(249, 250, 251),
    surface: Color::Rgb(255, 255, 255),
    surface_highlight: Color::Rgb(243, 244, 246),
    border: Color::Rgb(209, 213, 219),
    text_primary: Color::Rgb(17, 24, 39),
    text_dim: Color::Rgb(75, 85, 99),
    text_muted: Color::Rgb(156, 163, 175),
    accent: Color::Rgb(217, 119, 6),
    on_accent: Color::Rgb(17, 24, 39),
    modal_bg: Color::Rgb(255, 255, 255),
};

/// Palette for a theme
#[must_use]
pub const fn palette(theme: ThemeMode) -> &'static Palette {
    match theme {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}
