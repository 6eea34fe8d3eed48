//! Application state: the view-state controller plus terminal UI state.

use tracing::{debug, warn};

use super::{Section, UiState, ViewStateController};
use crate::catalog::{PROJECTS, Project};
use crate::config::{Action, Config};
use crate::links::{LinkKind, LinkOpener, SystemLinkOpener};
use crate::theme::ThemeMode;

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,

    /// Theme, section and modal state
    pub view: ViewStateController,

    /// Scroll positions, card focus and status line
    pub ui: UiState,

    /// Whether the application should quit
    pub should_quit: bool,

    opener: Box<dyn LinkOpener>,
}

impl App {
    /// Create a new application that opens links with the system handler
    #[must_use]
    pub fn new(config: Config, view: ViewStateController) -> Self {
        Self::with_opener(config, view, Box::new(SystemLinkOpener))
    }

    /// Create a new application with a custom link opener
    #[must_use]
    pub fn with_opener(
        config: Config,
        view: ViewStateController,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        Self {
            config,
            view,
            ui: UiState::new(),
            should_quit: false,
            opener,
        }
    }

    /// Make `section` active and scroll its content to the top
    pub fn navigate_to(&mut self, section: Section) {
        self.view.navigate_to(section);
        if self.view.take_scroll_reset() {
            self.ui.reset_scroll();
        }
        self.ui.clear_status();
    }

    /// Move to the next section in sidebar order
    pub fn next_section(&mut self) {
        self.navigate_to(self.view.section().next());
    }

    /// Move to the previous section in sidebar order
    pub fn prev_section(&mut self) {
        self.navigate_to(self.view.section().prev());
    }

    /// Flip the theme
    pub fn toggle_theme(&mut self) -> ThemeMode {
        let theme = self.view.toggle_theme();
        self.ui.set_status(format!("Theme: {theme}"));
        theme
    }

    /// The project card holding keyboard focus
    #[must_use]
    pub fn focused_project(&self) -> Option<&'static Project> {
        PROJECTS.get(self.ui.selected_card)
    }

    /// Focus the next project card (wraps)
    pub const fn select_next_card(&mut self) {
        if !PROJECTS.is_empty() {
            self.ui.selected_card = (self.ui.selected_card + 1) % PROJECTS.len();
        }
    }

    /// Focus the previous project card (wraps)
    pub const fn select_prev_card(&mut self) {
        if !PROJECTS.is_empty() {
            self.ui.selected_card = match self.ui.selected_card.checked_sub(1) {
                Some(idx) => idx,
                None => PROJECTS.len() - 1,
            };
        }
    }

    /// Activate the "see more" control of the focused card
    ///
    /// Only detail-only projects have that control; for linked projects this
    /// leaves a hint in the status bar instead.
    pub fn see_more(&mut self) {
        let Some(project) = self.focused_project() else {
            return;
        };
        if project.has_links() {
            let source = self.config.keys.primary_key(Action::OpenSource);
            let demo = self.config.keys.primary_key(Action::OpenDemo);
            self.ui.set_status(format!(
                "{} has links: [{source}] code  [{demo}] demo",
                project.title
            ));
            return;
        }
        self.open_project_detail(project);
    }

    /// Show the detail view for `project`
    pub fn open_project_detail(&mut self, project: &'static Project) {
        self.view.open_project_detail(project);
        self.ui.modal_scroll = 0;
        self.ui.clear_status();
    }

    /// Dismiss the detail view
    pub fn close_project_detail(&mut self) {
        self.view.close_project_detail();
        self.ui.modal_scroll = 0;
    }

    /// Project whose links the link controls currently act on
    ///
    /// The modal's project while it is open, otherwise the focused card on
    /// the Projects section.
    #[must_use]
    pub fn link_target(&self) -> Option<&'static Project> {
        if let Some(project) = self.view.modal().selected_project() {
            return Some(project);
        }
        if self.view.section() == Section::Projects {
            return self.focused_project();
        }
        None
    }

    /// Open one of the link target's links in the browser
    ///
    /// Returns whether a link was handed off. Failures are reported in the
    /// status bar and never change view state.
    pub fn open_link(&mut self, kind: LinkKind) -> bool {
        let Some(project) = self.link_target() else {
            return false;
        };
        let url = match kind {
            LinkKind::Source => project.github,
            LinkKind::Demo => project.demo,
        };
        let Some(url) = url else {
            self.ui.set_status(format!(
                "{} has no {} link",
                project.title,
                kind.label().to_lowercase()
            ));
            return false;
        };

        debug!(project = project.title, %url, ?kind, "Following project link");
        match self.opener.open(url) {
            Ok(()) => {
                self.ui.set_status(format!("Opened {url}"));
                true
            }
            Err(e) => {
                warn!(project = project.title, %url, error = %e, "Failed to open link");
                self.ui.set_status(format!("Could not open {url}: {e:#}"));
                false
            }
        }
    }

    /// Whether scrolling moves card focus instead of a text offset
    fn scrolls_cards(&self) -> bool {
        !self.view.modal().is_open() && self.view.section() == Section::Projects
    }

    /// Scroll whichever pane has focus up
    ///
    /// On Projects the list follows card focus, so focus moves one card
    /// toward the top and stops at the first.
    pub fn scroll_up(&mut self) {
        if self.scrolls_cards() {
            self.ui.selected_card = self.ui.selected_card.saturating_sub(1);
            return;
        }
        let in_modal = self.view.modal().is_open();
        self.ui.scroll_up(self.config.scroll_step, in_modal);
    }

    /// Scroll whichever pane has focus down
    ///
    /// On Projects focus moves one card toward the bottom and stops at the last.
    pub fn scroll_down(&mut self) {
        if self.scrolls_cards() {
            let last = PROJECTS.len().saturating_sub(1);
            self.ui.selected_card = (self.ui.selected_card + 1).min(last);
            return;
        }
        let in_modal = self.view.modal().is_open();
        self.ui.scroll_down(self.config.scroll_step, in_modal);
    }

    /// Ask the event loop to exit
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}
