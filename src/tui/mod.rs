//! Terminal user interface for the portfolio

pub mod input;
pub mod render;

use crate::app::{App, Event, Handler};
use anyhow::Result;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;
use tracing::{debug, info};

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(mut app: App) -> Result<()> {
    let mouse = app.config.mouse;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    info!(theme = %app.view.theme(), "Starting TUI");

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    let mut frame_area = Rect::default();

    loop {
        terminal.draw(|frame| {
            frame_area = frame.area();
            render::render(frame, app);
        })?;

        match event_handler.next()? {
            Event::Tick => {}
            Event::Key(key) => input::handle_key_event(app, key.code, key.modifiers),
            Event::Mouse(mouse) => input::handle_mouse_event(app, mouse, frame_area),
            Event::Resize(width, height) => debug!(width, height, "Terminal resized"),
        }

        if app.should_quit {
            info!("Quitting");
            break;
        }
    }

    Ok(())
}
