use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;
use std::time::Instant;

mod help;
mod overview;
mod race;

pub fn dispatch_input(app: &mut App, key: KeyCode, now: Instant) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    if handle_global_input(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Overview => overview::handle_overview_input(app, key),
        AppScreen::Race => race::handle_race_input(app, key, now),
    }
}

fn handle_global_input(app: &mut App, key: KeyCode) -> bool {
    app.screen = match key {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.quit();
            return true;
        }
        KeyCode::Tab => app.screen.next(),
        KeyCode::BackTab => app.screen.previous(),
        KeyCode::Char('1') => AppScreen::Overview,
        KeyCode::Char('2') => AppScreen::Race,
        _ => return false,
    };
    true
}

#[cfg(test)]
mod tests {
    use super::dispatch_input;
    use crate::app::state::{App, AppScreen};
    use carstats::race::{RaceSettings, Series};
    use crossterm::event::KeyCode;
    use std::time::Instant;

    fn app() -> App {
        App::new(
            Series::from_csv("2000,A,1\n2001,A,2\n2002,A,3\n"),
            RaceSettings::default(),
        )
    }

    #[test]
    fn tab_cycles_screens() {
        let mut app = app();
        let now = Instant::now();
        dispatch_input(&mut app, KeyCode::Tab, now);
        assert_eq!(app.screen, AppScreen::Race);
        dispatch_input(&mut app, KeyCode::Tab, now);
        assert_eq!(app.screen, AppScreen::Overview);
        dispatch_input(&mut app, KeyCode::BackTab, now);
        assert_eq!(app.screen, AppScreen::Race);
    }

    #[test]
    fn race_keys_drive_playback() {
        let mut app = app();
        let now = Instant::now();
        dispatch_input(&mut app, KeyCode::Char('2'), now);
        dispatch_input(&mut app, KeyCode::Char('s'), now);
        assert!(app.playback().running);

        dispatch_input(&mut app, KeyCode::Char(' '), now);
        assert!(app.playback().paused);

        dispatch_input(&mut app, KeyCode::Right, now);
        dispatch_input(&mut app, KeyCode::Right, now);
        assert_eq!(app.playback().current_tick_index, 2);

        dispatch_input(&mut app, KeyCode::Char('['), now);
        assert_eq!(app.playback().current_tick_index, 0);
    }

    #[test]
    fn start_key_does_not_rewind_a_paused_race() {
        let mut app = app();
        let now = Instant::now();
        dispatch_input(&mut app, KeyCode::Char('2'), now);
        dispatch_input(&mut app, KeyCode::Char('s'), now);
        dispatch_input(&mut app, KeyCode::Char('p'), now);
        dispatch_input(&mut app, KeyCode::Right, now);
        dispatch_input(&mut app, KeyCode::Right, now);

        dispatch_input(&mut app, KeyCode::Char('s'), now);
        dispatch_input(&mut app, KeyCode::Enter, now);
        assert_eq!(app.playback().current_tick_index, 2);
        assert!(app.playback().paused);
    }

    #[test]
    fn race_keys_are_ignored_on_the_overview() {
        let mut app = app();
        dispatch_input(&mut app, KeyCode::Char('s'), Instant::now());
        assert!(!app.playback().running);
    }

    #[test]
    fn help_swallows_keys_until_closed() {
        let mut app = app();
        let now = Instant::now();
        dispatch_input(&mut app, KeyCode::F(1), now);
        assert!(app.show_help);
        dispatch_input(&mut app, KeyCode::Char('q'), now);
        assert!(app.running);
        dispatch_input(&mut app, KeyCode::Esc, now);
        assert!(!app.show_help);
        dispatch_input(&mut app, KeyCode::Char('q'), now);
        assert!(!app.running);
    }
}
