// App module for carstats
// Handles application state and playback controls

pub mod input;
pub mod state;

pub use input::handle_input;
pub use state::{App, AppScreen};
