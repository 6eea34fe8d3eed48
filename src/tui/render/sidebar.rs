//! Sidebar: profile name, section entries and the theme toggle

use crate::app::{App, Section};
use crate::catalog::PROFILE;
use crate::config::Action;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::colors::Palette;

/// What a click on the sidebar landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarHit {
    /// A section entry
    Section(Section),
    /// The theme toggle at the bottom
    ToggleTheme,
}

/// Area inside the sidebar border
const fn inner(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

const fn nav_key(section: Section) -> Action {
    match section {
        Section::Home => Action::GoHome,
        Section::About => Action::GoAbout,
        Section::Projects => Action::GoProjects,
        Section::Blog => Action::GoBlog,
    }
}

/// Map a click position to a sidebar control.
///
/// Section entries occupy the first inner rows in [`Section::ALL`] order;
/// the theme toggle is the last inner row.
#[must_use]
pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<SidebarHit> {
    let inner = inner(area);
    if !super::rect_contains(inner, x, y) {
        return None;
    }

    let row = y - inner.y;
    if row == inner.height.saturating_sub(1) {
        return Some(SidebarHit::ToggleTheme);
    }
    Section::ALL
        .get(usize::from(row))
        .copied()
        .map(SidebarHit::Section)
}

/// Render the sidebar
pub fn render_sidebar(frame: &mut Frame<'_>, app: &App, area: Rect, palette: &Palette) {
    let active = app.view.section();
    let inner_height = usize::from(inner(area).height);

    let mut lines: Vec<Line<'_>> = Section::ALL
        .iter()
        .map(|&section| {
            let key = app.config.keys.primary_key(nav_key(section));
            let style = if section == active {
                Style::default()
                    .fg(palette.on_accent)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text_primary)
            };
            Line::from(vec![
                Span::styled(format!(" {key} "), style.fg(palette.text_muted)),
                Span::styled(format!("{:<14}", section.label()), style),
            ])
        })
        .collect();

    // Pin the theme toggle to the bottom row
    while lines.len() + 1 < inner_height {
        lines.push(Line::from(""));
    }
    let toggle_key = app.config.keys.primary_key(Action::ToggleTheme);
    let toggle_label = if app.view.theme().is_dark() {
        "Light mode"
    } else {
        "Dark mode"
    };
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {toggle_key} "),
            Style::default().fg(palette.text_muted),
        ),
        Span::styled(toggle_label, Style::default().fg(palette.text_dim)),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", PROFILE.name),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.border)),
        )
        .style(Style::default().bg(palette.surface));

    frame.render_widget(paragraph, area);
}
