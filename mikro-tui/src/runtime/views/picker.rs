use crate::app::{App, PickerField};
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_picker_key(key: KeyEvent, app: &mut App) {
    match key.code {
        // Confirm is gated on validity; an incomplete selection is a no-op.
        KeyCode::Enter => app.confirm_picker(),
        KeyCode::Esc => app.cancel_picker(),
        code => {
            let picker = match &mut app.picker {
                Some(picker) => picker,
                None => return,
            };
            match code {
                KeyCode::Tab | KeyCode::Right => picker.next_field(),
                KeyCode::BackTab | KeyCode::Left => picker.prev_field(),
                KeyCode::Up | KeyCode::Char('k') => picker.step_up(),
                KeyCode::Down | KeyCode::Char('j') => picker.step_down(),
                KeyCode::Char(c) if c.is_ascii_digit() && picker.focused == PickerField::Year => {
                    picker.selection.year.insert(c);
                }
                KeyCode::Backspace if picker.focused == PickerField::Year => {
                    picker.selection.year.backspace();
                }
                KeyCode::Char('r') | KeyCode::Char('R') => picker.reset(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, LoginState, View};
    use crossterm::event::KeyModifiers;
    use time::macros::datetime;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with_picker() -> App {
        let mut app = App::new(LoginState::local());
        app.current_view = View::Calendar;
        app.focused_time = Some(datetime!(2024-03-15 09:30));
        app.open_picker();
        app
    }

    #[test]
    fn enter_confirms_a_prefilled_selection() {
        let mut app = app_with_picker();
        handle_picker_key(key(KeyCode::Enter), &mut app);
        assert!(app.picker.is_none());
        assert_eq!(app.focused_time, Some(datetime!(2024-03-15 09:30)));
    }

    #[test]
    fn enter_on_an_incomplete_selection_keeps_the_dialog_open() {
        let mut app = app_with_picker();
        app.picker.as_mut().unwrap().selection.reset(None);
        handle_picker_key(key(KeyCode::Enter), &mut app);
        assert!(app.picker.is_some());
        // The previously confirmed value is untouched.
        assert_eq!(app.focused_time, Some(datetime!(2024-03-15 09:30)));
    }

    #[test]
    fn escape_discards_edits() {
        let mut app = app_with_picker();
        handle_picker_key(key(KeyCode::Up), &mut app); // edit the month
        handle_picker_key(key(KeyCode::Esc), &mut app);
        assert!(app.picker.is_none());
        assert_eq!(app.focused_time, Some(datetime!(2024-03-15 09:30)));
    }

    #[test]
    fn digits_go_into_the_year_field_only() {
        let mut app = app_with_picker();
        handle_picker_key(key(KeyCode::Char('9')), &mut app); // Month focused
        assert_eq!(app.picker.as_ref().unwrap().selection.year.value, "2024");
        handle_picker_key(key(KeyCode::Tab), &mut app); // Day
        handle_picker_key(key(KeyCode::Tab), &mut app); // Year
        handle_picker_key(key(KeyCode::Char('9')), &mut app);
        assert_eq!(app.picker.as_ref().unwrap().selection.year.value, "20249");
    }

    #[test]
    fn reset_key_restores_the_original_fields() {
        let mut app = app_with_picker();
        handle_picker_key(key(KeyCode::Up), &mut app);
        handle_picker_key(key(KeyCode::Char('r')), &mut app);
        assert_eq!(
            app.picker.as_ref().unwrap().selection.to_timestamp(),
            Some(datetime!(2024-03-15 09:30))
        );
    }
}
