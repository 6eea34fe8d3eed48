//! Project detail modal state.

use crate::catalog::Project;

/// Visibility of the project detail view.
///
/// The modal is open exactly when a project is selected, so an open modal
/// without a selection cannot be represented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModalState {
    selected: Option<&'static Project>,
}

impl ModalState {
    /// A closed modal with no selection.
    #[must_use]
    pub const fn closed() -> Self {
        Self { selected: None }
    }

    /// Whether the detail view is showing.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// The project being shown, if any.
    #[must_use]
    pub const fn selected_project(&self) -> Option<&'static Project> {
        self.selected
    }

    /// Show `project`, replacing any current selection.
    pub const fn open(&mut self, project: &'static Project) {
        self.selected = Some(project);
    }

    /// Hide the view and drop the selection in one step.
    pub const fn close(&mut self) {
        self.selected = None;
    }
}
