//! Folio - a personal portfolio in the terminal
//!
//! Four sections (Home, About, Projects, Blog), a light/dark theme that
//! survives restarts, and a detail view for projects that have no external
//! links. All view state lives in [`app::ViewStateController`]; the TUI only
//! renders it and feeds it input.

pub mod app;
pub mod catalog;
pub mod config;
pub mod links;
pub mod paths;
pub mod storage;
pub mod theme;
pub mod tui;

pub use app::{App, Section, ViewStateController};
pub use catalog::{BLOG_POSTS, PROJECTS, Project};
pub use config::Config;
pub use theme::ThemeMode;
