//! Key handling
//!
//! Keys resolve to an [`Action`] through the configured bindings. While the
//! project detail view is open only the actions that make sense on top of it
//! are honored; the rest are dropped so the page underneath stays put.

mod mouse;

pub use mouse::handle_mouse_event;

use crate::app::{App, Section};
use crate::config::Action;
use crate::links::LinkKind;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use tracing::trace;

/// Handle a key press
pub fn handle_key_event(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    let Some(action) = app.config.keys.get_action(code, modifiers) else {
        trace!(?code, ?modifiers, "Unbound key");
        return;
    };
    dispatch(app, action);
}

/// Whether `action` is honored while the detail view is open
#[must_use]
pub const fn allowed_in_modal(action: Action) -> bool {
    matches!(
        action,
        Action::Close
            | Action::ScrollUp
            | Action::ScrollDown
            | Action::OpenSource
            | Action::OpenDemo
            | Action::ToggleTheme
            | Action::Quit
    )
}

/// Apply `action` to the application
pub fn dispatch(app: &mut App, action: Action) {
    if app.view.modal().is_open() && !allowed_in_modal(action) {
        trace!(?action, "Ignored while project detail is open");
        return;
    }

    match action {
        Action::GoHome => app.navigate_to(Section::Home),
        Action::GoAbout => app.navigate_to(Section::About),
        Action::GoProjects => app.navigate_to(Section::Projects),
        Action::GoBlog => app.navigate_to(Section::Blog),
        Action::NextSection => app.next_section(),
        Action::PrevSection => app.prev_section(),
        Action::ToggleTheme => {
            app.toggle_theme();
        }
        Action::NextCard | Action::PrevCard | Action::SeeMore => {
            if app.view.section() != Section::Projects {
                return;
            }
            match action {
                Action::NextCard => app.select_next_card(),
                Action::PrevCard => app.select_prev_card(),
                _ => app.see_more(),
            }
        }
        Action::OpenSource => {
            app.open_link(LinkKind::Source);
        }
        Action::OpenDemo => {
            app.open_link(LinkKind::Demo);
        }
        Action::ScrollUp => app.scroll_up(),
        Action::ScrollDown => app.scroll_down(),
        Action::Close => app.close_project_detail(),
        Action::Quit => app.quit(),
    }
}
