//! Keybinding configuration

use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Show the Home section
    GoHome,
    /// Show the About section
    GoAbout,
    /// Show the Projects section
    GoProjects,
    /// Show the Blog section
    GoBlog,
    /// Move to the next section
    NextSection,
    /// Move to the previous section
    PrevSection,
    /// Flip between light and dark theme
    ToggleTheme,
    /// Focus the next project card
    NextCard,
    /// Focus the previous project card
    PrevCard,
    /// Open the detail view of the focused detail-only project
    SeeMore,
    /// Open the source link of the focused project
    OpenSource,
    /// Open the demo link of the focused project
    OpenDemo,
    /// Scroll content up
    ScrollUp,
    /// Scroll content down
    ScrollDown,
    /// Dismiss the project detail view
    Close,
    /// Quit application
    Quit,
}

impl Action {
    /// Get the display description for this action
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::GoHome => "Home",
            Self::GoAbout => "About",
            Self::GoProjects => "Projects",
            Self::GoBlog => "Blog",
            Self::NextSection => "Next section",
            Self::PrevSection => "Previous section",
            Self::ToggleTheme => "Toggle theme",
            Self::NextCard => "Next card",
            Self::PrevCard => "Previous card",
            Self::SeeMore => "See more",
            Self::OpenSource => "Open code",
            Self::OpenDemo => "Open demo",
            Self::ScrollUp => "Scroll up",
            Self::ScrollDown => "Scroll down",
            Self::Close => "Close",
            Self::Quit => "Quit",
        }
    }
}

/// Keybinding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Map of key strings to actions (for serialization)
    bindings: HashMap<String, Action>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("1".to_string(), Action::GoHome);
        bindings.insert("2".to_string(), Action::GoAbout);
        bindings.insert("3".to_string(), Action::GoProjects);
        bindings.insert("4".to_string(), Action::GoBlog);
        bindings.insert("Tab".to_string(), Action::NextSection);
        bindings.insert("l".to_string(), Action::NextSection);
        bindings.insert("Shift+Tab".to_string(), Action::PrevSection);
        bindings.insert("h".to_string(), Action::PrevSection);
        bindings.insert("t".to_string(), Action::ToggleTheme);
        bindings.insert("j".to_string(), Action::NextCard);
        bindings.insert("Down".to_string(), Action::NextCard);
        bindings.insert("k".to_string(), Action::PrevCard);
        bindings.insert("Up".to_string(), Action::PrevCard);
        bindings.insert("Enter".to_string(), Action::SeeMore);
        bindings.insert("c".to_string(), Action::OpenSource);
        bindings.insert("d".to_string(), Action::OpenDemo);
        bindings.insert("Ctrl+u".to_string(), Action::ScrollUp);
        bindings.insert("PageUp".to_string(), Action::ScrollUp);
        bindings.insert("Ctrl+d".to_string(), Action::ScrollDown);
        bindings.insert("PageDown".to_string(), Action::ScrollDown);
        bindings.insert("Esc".to_string(), Action::Close);
        bindings.insert("x".to_string(), Action::Close);
        bindings.insert("q".to_string(), Action::Quit);

        Self { bindings }
    }
}

impl KeyBindings {
    /// Merge in any missing default keybindings
    ///
    /// Keeps new defaults available to users with an older saved config.
    pub fn merge_defaults(&mut self) {
        let defaults = Self::default();
        for (key, action) in defaults.bindings {
            self.bindings.entry(key).or_insert(action);
        }
    }

    /// Get the action for a key event
    #[must_use]
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        let key_str = key_to_string(code, modifiers);
        self.bindings.get(&key_str).copied()
    }

    /// Get all bindings for an action
    #[must_use]
    pub fn keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings
            .iter()
            .filter_map(|(k, &v)| if v == action { Some(k.clone()) } else { None })
            .collect()
    }

    /// Shortest key for an action, used in hints (e.g. "t" over "Ctrl+t")
    #[must_use]
    pub fn primary_key(&self, action: Action) -> String {
        let mut keys = self.keys_for_action(action);
        keys.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
        keys.into_iter().next().unwrap_or_default()
    }

    /// Status bar hint text for the given actions
    #[must_use]
    pub fn hints(&self, actions: &[Action]) -> String {
        actions
            .iter()
            .map(|&action| {
                let key = self.primary_key(action);
                format!("[{key}] {}", action.description().to_lowercase())
            })
            .collect::<Vec<_>>()
            .join("  ")
    }
}

/// Convert a key code and modifiers to a string representation
#[must_use]
pub fn key_to_string(code: KeyCode, modifiers: KeyModifiers) -> String {
    let mut parts = Vec::new();

    if modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl".to_string());
    }
    if modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt".to_string());
    }
    if modifiers.contains(KeyModifiers::SHIFT)
        && !matches!(code, KeyCode::Char(_) | KeyCode::BackTab)
    {
        parts.push("Shift".to_string());
    }

    let key_part = match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "Shift+Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return String::new(),
    };

    parts.push(key_part);
    parts.join("+")
}
