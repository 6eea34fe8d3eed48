//! UI-related state: scroll positions, card focus, status line

/// UI-related state for the application
#[derive(Debug, Default)]
pub struct UiState {
    /// Scroll offset of the section content pane
    pub content_scroll: u16,

    /// Scroll offset inside the project detail view
    pub modal_scroll: u16,

    /// Index of the focused project card
    pub selected_card: usize,

    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl UiState {
    /// Create a new UI state with default values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            content_scroll: 0,
            modal_scroll: 0,
            selected_card: 0,
            status_message: None,
        }
    }

    /// Jump the section content back to the top
    ///
    /// The project list follows card focus, so focus returns to the first card.
    pub const fn reset_scroll(&mut self) {
        self.content_scroll = 0;
        self.selected_card = 0;
    }

    /// Scroll the content pane (or the modal when `in_modal`) up
    pub const fn scroll_up(&mut self, amount: u16, in_modal: bool) {
        if in_modal {
            self.modal_scroll = self.modal_scroll.saturating_sub(amount);
        } else {
            self.content_scroll = self.content_scroll.saturating_sub(amount);
        }
    }

    /// Scroll the content pane (or the modal when `in_modal`) down
    ///
    /// The renderer clamps offsets past the end of the content.
    pub const fn scroll_down(&mut self, amount: u16, in_modal: bool) {
        if in_modal {
            self.modal_scroll = self.modal_scroll.saturating_add(amount);
        } else {
            self.content_scroll = self.content_scroll.saturating_add(amount);
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
