use mikro_events::EventManager;
use time::PrimitiveDateTime;

mod login;
mod picker;
mod state;

pub use login::{BrowserEntry, FileBrowser, LoginState, LoginVariant};
pub use picker::{DateTimeSelection, PickerField, PickerState};
pub use state::{LoginField, LoginPhase, TextInput, View};

// Shown verbatim on a failed connect attempt; the underlying cause stays in
// the debug log only.
pub const LOGIN_FAILED_MESSAGE: &str = "Your username or password is invalid.";

pub struct App {
    pub running: bool,
    pub current_view: View,
    pub login: LoginState,

    // Present after a successful login.
    pub session: Option<EventManager>,

    // Date/time picker overlay and the timestamp it edits.
    pub picker: Option<PickerState>,
    pub focused_time: Option<PrimitiveDateTime>,

    // Calendar view scroll position.
    pub event_scroll: usize,

    pub status_message: Option<String>,

    // Busy indicator while a connect attempt is in flight.
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(login: LoginState) -> Self {
        Self {
            running: true,
            current_view: View::Login,
            login,
            session: None,
            picker: None,
            focused_time: None,
            event_scroll: 0,
            status_message: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Idle -> Connecting. Disables the whole form (editability follows the
    /// phase) and turns the busy indicator on before the worker is spawned.
    pub fn begin_connecting(&mut self) {
        self.login.error = None;
        self.login.phase = LoginPhase::Connecting;
        self.is_loading = true;
    }

    /// Connecting -> logged in: dismiss the form and land in the calendar
    /// view seeded from the handle.
    pub fn complete_login(&mut self, manager: EventManager) {
        self.is_loading = false;
        self.login.phase = LoginPhase::Idle;
        self.set_status(format!("Logged in as {}", manager.username()));
        self.session = Some(manager);
        self.event_scroll = 0;
        self.current_view = View::Calendar;
    }

    /// Connecting -> Failed. Field contents are untouched so the user can
    /// correct and resubmit.
    pub fn fail_login(&mut self) {
        self.is_loading = false;
        self.login.phase = LoginPhase::Failed(LOGIN_FAILED_MESSAGE.to_string());
    }

    /// Failed -> Idle: the error is acknowledged and every input re-enables.
    pub fn acknowledge_login_error(&mut self) {
        self.login.phase = LoginPhase::Idle;
    }

    pub fn open_picker(&mut self) {
        self.picker = Some(PickerState::new(self.focused_time));
    }

    /// Confirm the picker if its fields form a real timestamp; otherwise the
    /// confirm is a no-op (the OK affordance renders disabled).
    pub fn confirm_picker(&mut self) {
        if let Some(picker) = &self.picker {
            if let Some(timestamp) = picker.selection.to_timestamp() {
                self.focused_time = Some(timestamp);
                self.picker = None;
            }
        }
    }

    /// Cancel discards edits; the previous focused time is untouched.
    pub fn cancel_picker(&mut self) {
        self.picker = None;
    }

    pub fn scroll_events(&mut self, down: bool) {
        let count = self.session.as_ref().map(|s| s.events().len()).unwrap_or(0);
        if down {
            self.event_scroll = (self.event_scroll + 1).min(count.saturating_sub(1));
        } else {
            self.event_scroll = self.event_scroll.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;
    use time::Month;

    fn calendar_app() -> App {
        let mut app = App::new(LoginState::local());
        app.current_view = View::Calendar;
        app
    }

    #[test]
    fn cancel_leaves_focused_time_untouched() {
        let mut app = calendar_app();
        app.focused_time = Some(datetime!(2024-03-15 09:30));
        app.open_picker();
        app.picker.as_mut().unwrap().step_up(); // nudge the month
        app.cancel_picker();
        assert_eq!(app.focused_time, Some(datetime!(2024-03-15 09:30)));
        assert!(app.picker.is_none());
    }

    #[test]
    fn confirm_with_invalid_fields_keeps_the_picker_open() {
        let mut app = calendar_app();
        app.open_picker();
        app.confirm_picker();
        assert!(app.picker.is_some());
        assert_eq!(app.focused_time, None);
    }

    #[test]
    fn confirm_with_valid_fields_updates_focused_time() {
        let mut app = calendar_app();
        app.open_picker();
        {
            let picker = app.picker.as_mut().unwrap();
            picker.selection.month = Some(Month::March);
            picker.selection.day = Some(15);
            picker.selection.year = TextInput::from_str("2024");
            picker.selection.hour = 9;
            picker.selection.minute = 30;
        }
        app.confirm_picker();
        assert!(app.picker.is_none());
        assert_eq!(app.focused_time, Some(datetime!(2024-03-15 09:30)));
    }

    #[test]
    fn failure_acknowledgement_re_enables_the_form() {
        let mut app = App::new(LoginState::local());
        app.login.username_input = TextInput::from_str("terry");
        app.begin_connecting();
        assert!(!app.login.editable());
        app.fail_login();
        assert!(matches!(app.login.phase, LoginPhase::Failed(_)));
        app.acknowledge_login_error();
        assert!(app.login.editable());
        assert_eq!(app.login.username_input.value, "terry");
    }
}
