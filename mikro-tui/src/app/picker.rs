use time::{Date, Month, PrimitiveDateTime, Time};

use super::state::TextInput;

/// The five date/time fields of the picker. Month and day start unset; hour
/// and minute are bounded selectors and always in range.
#[derive(Debug, Clone, PartialEq)]
pub struct DateTimeSelection {
    pub month: Option<Month>,
    pub day: Option<u8>,
    pub year: TextInput,
    pub hour: u8,
    pub minute: u8,
}

impl DateTimeSelection {
    pub fn empty() -> Self {
        Self {
            month: None,
            day: None,
            year: TextInput::new(),
            hour: 0,
            minute: 0,
        }
    }

    pub fn from_timestamp(t: PrimitiveDateTime) -> Self {
        Self {
            month: Some(t.month()),
            day: Some(t.day()),
            year: TextInput::from_str(&t.year().to_string()),
            hour: t.hour(),
            minute: t.minute(),
        }
    }

    /// Repopulate from `existing`, or clear every field if there is none.
    pub fn reset(&mut self, existing: Option<PrimitiveDateTime>) {
        *self = match existing {
            Some(t) => Self::from_timestamp(t),
            None => Self::empty(),
        };
    }

    /// True iff month is set, day is set, and the year text parses as a
    /// non-negative integer. Hour and minute never affect validity.
    pub fn validate(&self) -> bool {
        self.month.is_some()
            && self.day.is_some()
            && self
                .year
                .value
                .parse::<i32>()
                .map(|y| y >= 0)
                .unwrap_or(false)
    }

    /// The selected timestamp with seconds zeroed, or None when the fields
    /// are incomplete or name a nonexistent calendar date (e.g. Feb 31).
    pub fn to_timestamp(&self) -> Option<PrimitiveDateTime> {
        if !self.validate() {
            return None;
        }
        let date = Date::from_calendar_date(self.year.value.parse().ok()?, self.month?, self.day?)
            .ok()?;
        let time_of_day = Time::from_hms(self.hour, self.minute, 0).ok()?;
        Some(PrimitiveDateTime::new(date, time_of_day))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerField {
    Month,
    Day,
    Year,
    Hour,
    Minute,
}

/// Modal picker overlay state. Lives on `App.picker` while open; dropping it
/// (cancel) leaves the original value untouched.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub selection: DateTimeSelection,
    pub original: Option<PrimitiveDateTime>,
    pub focused: PickerField,
}

impl PickerState {
    pub fn new(existing: Option<PrimitiveDateTime>) -> Self {
        let mut selection = DateTimeSelection::empty();
        selection.reset(existing);
        Self {
            selection,
            original: existing,
            focused: PickerField::Month,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = match self.focused {
            PickerField::Month => PickerField::Day,
            PickerField::Day => PickerField::Year,
            PickerField::Year => PickerField::Hour,
            PickerField::Hour => PickerField::Minute,
            PickerField::Minute => PickerField::Month,
        };
    }

    pub fn prev_field(&mut self) {
        self.focused = match self.focused {
            PickerField::Month => PickerField::Minute,
            PickerField::Day => PickerField::Month,
            PickerField::Year => PickerField::Day,
            PickerField::Hour => PickerField::Year,
            PickerField::Minute => PickerField::Hour,
        };
    }

    /// Step the focused selector forward. Month and day cycle through their
    /// unset position; hour and minute wrap. The year field is typed, not
    /// stepped.
    pub fn step_up(&mut self) {
        let s = &mut self.selection;
        match self.focused {
            PickerField::Month => {
                s.month = match s.month {
                    None => Some(Month::January),
                    Some(Month::December) => None,
                    Some(m) => Some(m.next()),
                }
            }
            PickerField::Day => {
                s.day = match s.day {
                    None => Some(1),
                    Some(31) => None,
                    Some(d) => Some(d + 1),
                }
            }
            PickerField::Year => {}
            PickerField::Hour => s.hour = (s.hour + 1) % 24,
            PickerField::Minute => s.minute = (s.minute + 1) % 60,
        }
    }

    pub fn step_down(&mut self) {
        let s = &mut self.selection;
        match self.focused {
            PickerField::Month => {
                s.month = match s.month {
                    None => Some(Month::December),
                    Some(Month::January) => None,
                    Some(m) => Some(m.previous()),
                }
            }
            PickerField::Day => {
                s.day = match s.day {
                    None => Some(31),
                    Some(1) => None,
                    Some(d) => Some(d - 1),
                }
            }
            PickerField::Year => {}
            PickerField::Hour => s.hour = (s.hour + 23) % 24,
            PickerField::Minute => s.minute = (s.minute + 59) % 60,
        }
    }

    pub fn reset(&mut self) {
        self.selection.reset(self.original);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn empty_selection_is_invalid() {
        assert!(!DateTimeSelection::empty().validate());
    }

    #[test]
    fn validate_requires_every_date_field() {
        let mut s = DateTimeSelection::empty();
        s.month = Some(Month::March);
        assert!(!s.validate());
        s.day = Some(15);
        assert!(!s.validate());
        s.year = TextInput::from_str("2024");
        assert!(s.validate());
    }

    #[test]
    fn negative_or_garbage_year_is_invalid() {
        let mut s = DateTimeSelection::empty();
        s.month = Some(Month::March);
        s.day = Some(15);
        s.year = TextInput::from_str("-1");
        assert!(!s.validate());
        s.year = TextInput::from_str("twenty");
        assert!(!s.validate());
        s.year = TextInput::from_str("");
        assert!(!s.validate());
        s.year = TextInput::from_str("0");
        assert!(s.validate());
    }

    #[test]
    fn to_timestamp_matches_selected_fields() {
        let mut s = DateTimeSelection::empty();
        s.month = Some(Month::March);
        s.day = Some(15);
        s.year = TextInput::from_str("2024");
        s.hour = 9;
        s.minute = 30;
        assert_eq!(s.to_timestamp(), Some(datetime!(2024-03-15 09:30)));
    }

    #[test]
    fn to_timestamp_is_none_when_invalid() {
        let mut s = DateTimeSelection::empty();
        s.hour = 9;
        s.minute = 30;
        assert_eq!(s.to_timestamp(), None);
    }

    #[test]
    fn nonexistent_calendar_date_yields_no_timestamp() {
        let mut s = DateTimeSelection::empty();
        s.month = Some(Month::February);
        s.day = Some(31);
        s.year = TextInput::from_str("2024");
        assert!(s.validate());
        assert_eq!(s.to_timestamp(), None);
    }

    #[test]
    fn reset_none_clears_all_fields() {
        let mut s = DateTimeSelection::from_timestamp(datetime!(2024-03-15 09:30));
        s.reset(None);
        assert_eq!(s, DateTimeSelection::empty());
        assert!(!s.validate());
    }

    #[test]
    fn reset_round_trips_through_to_timestamp() {
        // Seconds in the source are normalized away by the picker.
        let existing = datetime!(1999-12-31 23:59);
        let mut s = DateTimeSelection::empty();
        s.reset(Some(existing));
        assert!(s.validate());
        assert_eq!(s.to_timestamp(), Some(existing));
    }

    #[test]
    fn month_cycles_through_unset() {
        let mut p = PickerState::new(None);
        assert_eq!(p.selection.month, None);
        p.step_up();
        assert_eq!(p.selection.month, Some(Month::January));
        p.step_down();
        p.step_down();
        assert_eq!(p.selection.month, Some(Month::December));
    }

    #[test]
    fn hour_and_minute_wrap_in_range() {
        let mut p = PickerState::new(None);
        p.focused = PickerField::Hour;
        p.step_down();
        assert_eq!(p.selection.hour, 23);
        p.step_up();
        assert_eq!(p.selection.hour, 0);
        p.focused = PickerField::Minute;
        p.step_down();
        assert_eq!(p.selection.minute, 59);
    }

    #[test]
    fn picker_reset_restores_the_original_value() {
        let existing = datetime!(2024-03-15 09:30);
        let mut p = PickerState::new(Some(existing));
        p.focused = PickerField::Day;
        p.step_up();
        p.step_up();
        assert_ne!(p.selection.to_timestamp(), Some(existing));
        p.reset();
        assert_eq!(p.selection.to_timestamp(), Some(existing));
    }
}
