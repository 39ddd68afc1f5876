use crate::app::state::App;
use crossterm::event::KeyCode;
use std::time::Instant;

pub fn handle_race_input(app: &mut App, key: KeyCode, now: Instant) {
    match key {
        KeyCode::Char('s') | KeyCode::Enter => app.start_race(now),
        KeyCode::Char('p' | ' ') => app.toggle_pause(now),
        KeyCode::Right | KeyCode::Char('l') => app.step_forward(now),
        KeyCode::Left | KeyCode::Char('h') => app.step_backward(now),
        KeyCode::Char('[') => app.rewind(now),
        _ => {}
    }
}
