//! TUI rendering
//!
//! Rendering is a pure function of [`App`] state plus the static catalog:
//! - `colors`: light and dark palettes
//! - `sidebar`: profile name, section entries, theme toggle
//! - `sections`: content for the active section
//! - `modal`: project detail overlay
//! - `status_bar`: key hints and status message

pub mod colors;
pub mod modal;
pub mod sections;
pub mod sidebar;
pub mod status_bar;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
};

/// Fixed sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 24;

/// Screen regions of the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    /// Left navigation column
    pub sidebar: Rect,
    /// Active section content
    pub content: Rect,
    /// Bottom status line
    pub status: Rect,
}

/// Split the frame into sidebar, content and status bar
#[must_use]
pub fn main_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    MainLayout {
        sidebar: columns[0],
        content: columns[1],
        status: rows[1],
    }
}

/// Render the full application UI
pub fn render(frame: &mut Frame<'_>, app: &App) {
    let palette = colors::palette(app.view.theme());
    let layout = main_layout(frame.area());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        frame.area(),
    );

    sidebar::render_sidebar(frame, app, layout.sidebar, palette);
    sections::render_section(frame, app, layout.content, palette);
    status_bar::render_status_bar(frame, app, layout.status, palette);

    if let Some(project) = app.view.modal().selected_project() {
        modal::render_project_modal(frame, app, project, palette);
    }
}

/// Create a centered rect with percentage width and height
#[must_use]
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Whether `(x, y)` falls inside `rect`
#[must_use]
pub const fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Greedy word wrap to `max_width` columns (at least one word per line)
#[must_use]
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
