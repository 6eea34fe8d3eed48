//! Project detail overlay

use crate::app::App;
use crate::catalog::Project;
use crate::config::Action;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::colors::Palette;
use super::sections::{chips, project_controls};

/// Screen area covered by the project detail view.
///
/// Clicks outside this rectangle count as clicks on the backdrop.
#[must_use]
pub fn modal_rect(frame_area: Rect) -> Rect {
    super::centered_rect(70, 80, frame_area)
}

/// Body lines of the detail view: gallery, long description, tags, links
#[must_use]
pub fn detail_lines(app: &App, project: &Project, palette: &Palette) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(
        format!("Gallery ({})", project.images.len()),
        heading,
    ))];
    for (i, image) in project.images.iter().enumerate() {
        lines.push(Line::from(Span::styled(
            format!("  {}. {image}", i + 1),
            Style::default().fg(palette.text_dim),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        project.long_description,
        Style::default().fg(palette.text_primary),
    )));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Technologies", heading)));
    lines.push(chips(project.tags, palette));

    if project.has_links() {
        lines.push(Line::from(""));
        lines.push(project_controls(app, project, palette));
    }

    let close_key = app.config.keys.primary_key(Action::Close);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("[{close_key}] close · click outside to dismiss"),
        Style::default().fg(palette.text_muted),
    )));
    lines
}

/// Render the detail view for `project` over the current screen
pub fn render_project_modal(
    frame: &mut Frame<'_>,
    app: &App,
    project: &Project,
    palette: &Palette,
) {
    let area = modal_rect(frame.area());
    let lines = detail_lines(app, project, palette);
    let max_scroll = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
    let scroll = app.ui.modal_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {} ", project.title),
                    Style::default()
                        .fg(palette.text_primary)
                        .add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .style(Style::default().bg(palette.modal_bg))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}
