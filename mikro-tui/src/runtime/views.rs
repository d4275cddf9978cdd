use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::action_queue::{Action, ActionTx};

mod calendar;
mod login;
mod picker;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

fn is_quit_key(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

pub(super) fn handle_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Login => login::handle_login_key(key, app, action_tx),
        View::Calendar => {
            if app.picker.is_some() {
                picker::handle_picker_key(key, app);
            } else {
                calendar::handle_calendar_key(key, app);
            }
        }
    }
}
