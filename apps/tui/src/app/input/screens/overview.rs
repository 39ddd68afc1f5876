use crate::app::state::App;
use crossterm::event::KeyCode;

const PAGE: isize = 10;

pub fn handle_overview_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Up => app.scroll_countries(-1),
        KeyCode::Down => app.scroll_countries(1),
        KeyCode::PageUp => app.scroll_countries(-PAGE),
        KeyCode::PageDown => app.scroll_countries(PAGE),
        KeyCode::Home => app.country_offset = 0,
        KeyCode::End => app.scroll_countries(isize::MAX),
        _ => {}
    }
}
