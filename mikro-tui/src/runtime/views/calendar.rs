use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::is_quit_key;

pub(super) fn handle_calendar_key(key: KeyEvent, app: &mut App) {
    if is_quit_key(key) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('g') | KeyCode::Char('G') => app.open_picker(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_events(true),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_events(false),
        _ => {}
    }
}
