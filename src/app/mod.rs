mod state;

use std::time::Instant;

use crossterm::event::KeyCode;

pub use state::App;

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick(Instant),
    KeyPress(KeyCode),
}
