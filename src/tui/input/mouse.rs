//! Mouse input handling (sidebar clicks, backdrop dismiss, wheel scroll).

use crate::app::App;
use crate::tui::render::{main_layout, modal::modal_rect, rect_contains, sidebar};
use ratatui::{
    crossterm::event::{MouseButton, MouseEvent, MouseEventKind},
    layout::Rect,
};

/// Handle a mouse event against a frame of size `frame_area`.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, frame_area: Rect) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_left_click(app, mouse.column, mouse.row, frame_area);
        }
        MouseEventKind::ScrollUp => app.scroll_up(),
        MouseEventKind::ScrollDown => app.scroll_down(),
        _ => {}
    }
}

fn handle_left_click(app: &mut App, x: u16, y: u16, frame_area: Rect) {
    // With the detail view open the rest of the screen is backdrop.
    if app.view.modal().is_open() {
        if !rect_contains(modal_rect(frame_area), x, y) {
            app.close_project_detail();
        }
        return;
    }

    let layout = main_layout(frame_area);
    match sidebar::hit_test(layout.sidebar, x, y) {
        Some(sidebar::SidebarHit::Section(section)) => app.navigate_to(section),
        Some(sidebar::SidebarHit::ToggleTheme) => {
            app.toggle_theme();
        }
        None => {}
    }
}
