//! Terminal input for the portfolio loop
//!
//! Crossterm reports are narrowed to what the view reacts to: key presses,
//! mouse input and resizes. Everything else becomes an idle [`Event::Tick`].

use anyhow::Result;
use ratatui::crossterm::event::{
    self, Event as CrosstermEvent, KeyEvent, KeyEventKind, MouseEvent,
};
use std::time::Duration;

/// One step of input for the draw loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Nothing to act on; redraw and poll again
    Tick,
    /// Key press
    Key(KeyEvent),
    /// Click or wheel
    Mouse(MouseEvent),
    /// New terminal size
    Resize(u16, u16),
}

impl From<CrosstermEvent> for Event {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            // Release and repeat reports come from enhanced keyboard protocols
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Self::Key(key),
            CrosstermEvent::Mouse(mouse) => Self::Mouse(mouse),
            CrosstermEvent::Resize(width, height) => Self::Resize(width, height),
            _ => Self::Tick,
        }
    }
}

/// Blocking poller bounded by the configured poll interval
#[derive(Debug, Clone, Copy)]
pub struct Handler {
    poll_interval: Duration,
}

impl Handler {
    /// Poll every `poll_interval_ms` milliseconds
    #[must_use]
    pub const fn new(poll_interval_ms: u64) -> Self {
        Self {
            poll_interval: Duration::from_millis(poll_interval_ms),
        }
    }

    /// Wait up to one poll interval for input
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be polled or read
    pub fn next(&self) -> Result<Event> {
        if event::poll(self.poll_interval)? {
            Ok(event::read()?.into())
        } else {
            Ok(Event::Tick)
        }
    }

    /// How long [`Handler::next`] waits before yielding a tick
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        self.poll_interval
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new(crate::config::Config::default().poll_interval_ms)
    }
}
