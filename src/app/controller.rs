//! The single owner of theme, active section and modal state.

use tracing::{debug, info, warn};

use super::{ModalState, Section};
use crate::catalog::Project;
use crate::storage::ThemeStore;
use crate::theme::{ColorSchemeProbe, ThemeMode};

/// Authoritative holder of `{theme, section, modal}`.
///
/// Every transition is total: none of them can fail, and a failed theme
/// write only costs persistence for the rest of the session.
#[derive(Debug)]
pub struct ViewStateController {
    theme: ThemeMode,
    section: Section,
    modal: ModalState,
    scroll_reset: bool,
    store: Box<dyn ThemeStore>,
}

impl ViewStateController {
    /// Resolve the initial state.
    ///
    /// Theme precedence is stored preference, then the host color-scheme
    /// signal, then `Light`. The section starts at `Home`. Nothing is
    /// written to `store`.
    #[must_use]
    pub fn initialize(store: Box<dyn ThemeStore>, probe: &dyn ColorSchemeProbe) -> Self {
        let stored = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "Theme storage unreadable, ignoring stored preference");
            None
        });
        let prefers_dark = if stored.is_none() {
            probe.prefers_dark()
        } else {
            None
        };
        let theme = ThemeMode::resolve(stored, prefers_dark);
        debug!(%theme, ?stored, ?prefers_dark, "Resolved initial theme");

        Self {
            theme,
            section: Section::Home,
            modal: ModalState::closed(),
            scroll_reset: false,
            store,
        }
    }

    /// Current `(theme, section)` pair.
    #[must_use]
    pub const fn snapshot(&self) -> (ThemeMode, Section) {
        (self.theme, self.section)
    }

    /// Current theme.
    #[must_use]
    pub const fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Active section.
    #[must_use]
    pub const fn section(&self) -> Section {
        self.section
    }

    /// Modal visibility and selection.
    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    /// Flip the theme and persist it (best-effort). Returns the new theme.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        match self.store.save(self.theme) {
            Ok(()) => info!(theme = %self.theme, "Theme toggled"),
            Err(e) => warn!(
                theme = %self.theme,
                error = %e,
                "Failed to persist theme, keeping it for this session"
            ),
        }
        self.theme
    }

    /// Make `section` active, including when it already is.
    ///
    /// Also raises the scroll-reset signal for the renderer.
    pub fn navigate_to(&mut self, section: Section) {
        debug!(from = ?self.section, to = ?section, "Navigate");
        self.section = section;
        self.scroll_reset = true;
    }

    /// Consume the scroll-reset signal raised by [`Self::navigate_to`].
    pub const fn take_scroll_reset(&mut self) -> bool {
        let pending = self.scroll_reset;
        self.scroll_reset = false;
        pending
    }

    /// Open the detail view for `project`.
    ///
    /// Callers normally gate this on `!project.has_links()`, but linked
    /// projects are accepted too. If the view is already open the selection
    /// is replaced and the view stays open.
    pub fn open_project_detail(&mut self, project: &'static Project) {
        debug!(project = project.title, "Open project detail");
        self.modal.open(project);
    }

    /// Close the detail view and clear the selection.
    pub fn close_project_detail(&mut self) {
        if let Some(project) = self.modal.selected_project() {
            debug!(project = project.title, "Close project detail");
        }
        self.modal.close();
    }
}
