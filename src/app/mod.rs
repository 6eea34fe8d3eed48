//! Application state and logic

mod controller;
mod event;
mod modal;
mod section;
mod state;
mod ui;

pub use controller::ViewStateController;
pub use event::{Event, Handler};
pub use modal::ModalState;
pub use section::Section;
pub use state::App;
pub use ui::UiState;
