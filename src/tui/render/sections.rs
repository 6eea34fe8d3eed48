//! Content pane for the active section
//!
//! Only the active section is built and drawn.

use crate::app::{App, Section};
use crate::catalog::{BLOG_POSTS, PROFILE, PROJECTS, Project};
use crate::config::Action;
use crate::links::LinkKind;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use super::colors::Palette;
use super::wrap_text;

/// Render the active section into `area`
pub fn render_section(frame: &mut Frame<'_>, app: &App, area: Rect, palette: &Palette) {
    let section = app.view.section();
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", section.heading()),
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border))
        .style(Style::default().bg(palette.background));

    match section {
        Section::Home => render_lines(frame, app, area, block, home_lines(palette)),
        Section::About => render_lines(frame, app, area, block, about_lines(palette)),
        Section::Projects => render_projects(frame, app, area, block, palette),
        Section::Blog => render_lines(frame, app, area, block, blog_lines(palette)),
    }
}

fn render_lines(
    frame: &mut Frame<'_>,
    app: &App,
    area: Rect,
    block: Block<'_>,
    lines: Vec<Line<'static>>,
) {
    let max_scroll = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);
    let scroll = app.ui.content_scroll.min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Hero: name, tagline badge, bio and social links
#[must_use]
pub fn home_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            PROFILE.name,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {} ", PROFILE.tagline),
            Style::default().fg(palette.on_accent).bg(palette.accent),
        )),
        Line::from(""),
        Line::from(Span::styled(
            PROFILE.bio,
            Style::default().fg(palette.text_primary),
        )),
        Line::from(""),
    ];

    for social in PROFILE.socials {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<10}", social.label),
                Style::default().fg(palette.accent),
            ),
            Span::styled(social.url, Style::default().fg(palette.text_dim)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        PROFILE.copyright,
        Style::default().fg(palette.text_muted),
    )));
    lines
}

/// About: headline, titled blocks and tech stack chips
#[must_use]
pub fn about_lines(palette: &Palette) -> Vec<Line<'static>> {
    let heading = Style::default()
        .fg(palette.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(PROFILE.name, heading)),
        Line::from(Span::styled(
            PROFILE.headline,
            Style::default().fg(palette.text_dim),
        )),
    ];

    for block in PROFILE.about {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(block.title, heading)));
        for item in block.items {
            lines.push(Line::from(Span::styled(
                format!("  • {item}"),
                Style::default().fg(palette.text_primary),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("Tech Stack", heading)));
    lines.push(chips(PROFILE.tech_stack, palette));
    lines
}

/// Blog: one card per post
#[must_use]
pub fn blog_lines(palette: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for post in BLOG_POSTS {
        lines.push(Line::from(Span::styled(
            post.date,
            Style::default().fg(palette.accent),
        )));
        lines.push(Line::from(Span::styled(
            post.title,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("▣ {}", post.thumbnail),
            Style::default().fg(palette.text_muted),
        )));
        lines.push(Line::from(Span::styled(
            post.preview,
            Style::default().fg(palette.text_dim),
        )));
        lines.push(Line::from(""));
    }
    lines
}

/// Tags rendered as inline chips
#[must_use]
pub fn chips(tags: &[&'static str], palette: &Palette) -> Line<'static> {
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for (i, tag) in tags.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(" {tag} "),
            Style::default()
                .fg(palette.text_primary)
                .bg(palette.surface_highlight),
        ));
    }
    Line::from(spans)
}

/// Controls of a project card: one per present link, or "see more"
#[must_use]
pub fn project_controls(app: &App, project: &Project, palette: &Palette) -> Line<'static> {
    let style = Style::default().fg(palette.accent);
    if !project.has_links() {
        let key = app.config.keys.primary_key(Action::SeeMore);
        return Line::from(Span::styled(format!("[{key}] See more →"), style));
    }

    let mut spans = Vec::new();
    let controls = [
        (Action::OpenSource, LinkKind::Source, project.github),
        (Action::OpenDemo, LinkKind::Demo, project.demo),
    ];
    for (action, kind, url) in controls {
        if url.is_none() {
            continue;
        }
        if !spans.is_empty() {
            spans.push(Span::raw("   "));
        }
        let key = app.config.keys.primary_key(action);
        spans.push(Span::styled(format!("[{key}] {} ↗", kind.label()), style));
    }
    Line::from(spans)
}

fn project_card(
    app: &App,
    project: &Project,
    focused: bool,
    width: usize,
    palette: &Palette,
) -> ListItem<'static> {
    let marker = if focused { "▶ " } else { "  " };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(
                project.title,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  ▣ {}", project.image),
            Style::default().fg(palette.text_muted),
        )),
    ];
    for line in wrap_text(project.description, width.saturating_sub(2)) {
        lines.push(Line::from(Span::styled(
            format!("  {line}"),
            Style::default().fg(palette.text_dim),
        )));
    }
    let mut controls = project_controls(app, project, palette);
    controls.spans.insert(0, Span::raw("  "));
    lines.push(controls);
    lines.push(Line::from(""));

    let style = if focused {
        Style::default().bg(palette.surface_highlight)
    } else {
        Style::default().bg(palette.surface)
    };
    ListItem::new(Text::from(lines)).style(style)
}

fn render_projects(
    frame: &mut Frame<'_>,
    app: &App,
    area: Rect,
    block: Block<'_>,
    palette: &Palette,
) {
    let width = usize::from(area.width.saturating_sub(2));
    let items: Vec<ListItem<'_>> = PROJECTS
        .iter()
        .enumerate()
        .map(|(i, project)| project_card(app, project, i == app.ui.selected_card, width, palette))
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.ui.selected_card));

    frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
}
