//! Status bar: context-dependent key hints, status message, theme

use crate::app::{App, Section};
use crate::config::Action;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::colors::Palette;

/// Actions worth hinting at in the current state
#[must_use]
pub fn hint_actions(app: &App) -> &'static [Action] {
    if app.view.modal().is_open() {
        return &[Action::Close, Action::ScrollDown, Action::Quit];
    }
    match app.view.section() {
        Section::Projects => &[
            Action::NextCard,
            Action::SeeMore,
            Action::NextSection,
            Action::ToggleTheme,
            Action::Quit,
        ],
        Section::Home | Section::About | Section::Blog => {
            &[Action::NextSection, Action::ToggleTheme, Action::Quit]
        }
    }
}

/// Render the status bar
pub fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect, palette: &Palette) {
    let left = app.ui.status_message.as_ref().map_or_else(
        || {
            Span::styled(
                format!(" {}", app.config.keys.hints(hint_actions(app))),
                Style::default().fg(palette.text_muted),
            )
        },
        |message| Span::styled(format!(" {message}"), Style::default().fg(palette.accent)),
    );
    let theme = Span::styled(
        format!(" {} ", app.view.theme()),
        Style::default().fg(palette.text_dim),
    );

    let theme_width = u16::try_from(theme.width()).unwrap_or(0);
    let left_area = Rect {
        width: area.width.saturating_sub(theme_width),
        ..area
    };
    let right_area = Rect {
        x: area.x.saturating_add(left_area.width),
        width: area.width.saturating_sub(left_area.width),
        ..area
    };

    let background = Style::default().bg(palette.surface);
    frame.render_widget(Paragraph::new(Line::from(left)).style(background), left_area);
    frame.render_widget(Paragraph::new(Line::from(theme)).style(background), right_area);
}
