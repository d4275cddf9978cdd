use crate::app::{App, LoginField, LoginPhase, LoginVariant};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::{enqueue_action, is_quit_key};

pub(super) fn handle_login_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match &app.login.phase {
        LoginPhase::Connecting => {
            // Inputs and the submit key stay dead while an attempt runs.
            // Quitting is still allowed; the attempt is not cancellable and
            // its result is simply dropped on exit.
            if is_quit_key(key) {
                app.quit();
            }
            return;
        }
        LoginPhase::Failed(_) => {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                app.acknowledge_login_error();
            }
            return;
        }
        LoginPhase::Idle => {}
    }

    if browser_is_open(app) {
        handle_browser_key(key, app);
        return;
    }

    if is_quit_key(key) {
        app.quit();
        return;
    }

    match key.code {
        KeyCode::Tab => app.login.next_field(),
        KeyCode::BackTab => app.login.prev_field(),
        KeyCode::Enter => enqueue_action(action_tx, Action::SubmitLogin),
        KeyCode::Esc => app.quit(),
        KeyCode::Up if app.login.focused_field == LoginField::Service => {
            app.login.select_service(false);
        }
        KeyCode::Down if app.login.focused_field == LoginField::Service => {
            app.login.select_service(true);
        }
        KeyCode::Char('o') | KeyCode::Char('O')
            if key.modifiers.contains(KeyModifiers::CONTROL)
                && app.login.focused_field == LoginField::File =>
        {
            app.login.open_file_browser();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login.input_char(c);
        }
        KeyCode::Backspace => app.login.backspace(),
        KeyCode::Left => app.login.move_cursor(true),
        KeyCode::Right => app.login.move_cursor(false),
        KeyCode::Home => app.login.cursor_home_end(true),
        KeyCode::End => app.login.cursor_home_end(false),
        _ => {}
    }
}

fn browser_is_open(app: &App) -> bool {
    matches!(
        &app.login.variant,
        LoginVariant::Local {
            browser: Some(_),
            ..
        }
    )
}

fn handle_browser_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.login.close_file_browser(),
        KeyCode::Enter => {
            let picked = match &mut app.login.variant {
                LoginVariant::Local {
                    browser: Some(browser),
                    ..
                } => browser.enter(),
                _ => None,
            };
            if let Some(path) = picked {
                app.login.apply_file_selection(path);
            }
        }
        code => {
            if let LoginVariant::Local {
                browser: Some(browser),
                ..
            } = &mut app.login.variant
            {
                match code {
                    KeyCode::Down | KeyCode::Char('j') => browser.move_selection(true),
                    KeyCode::Up | KeyCode::Char('k') => browser.move_selection(false),
                    KeyCode::Backspace | KeyCode::Char('h') => browser.ascend(),
                    _ => {}
                }
            }
        }
    }
}
