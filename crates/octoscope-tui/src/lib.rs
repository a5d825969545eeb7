//! octoscope-tui: Terminal UI for looking up GitHub profiles.

pub mod app;
pub mod state;
pub mod ui;
mod worker;

pub use app::run;
pub use state::{AppMode, AppState, Effect, Message};
