use crate::app::{App, View};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};

mod calendar_view;
mod login_view;
mod picker_dialog;
pub(super) mod utils;

pub fn render(frame: &mut Frame, app: &mut App) {
    match app.current_view {
        View::Login => login_view::render_login(frame, app),
        View::Calendar => {
            calendar_view::render_calendar(frame, app);
            if app.picker.is_some() {
                picker_dialog::render_picker_dialog(frame, app);
            }
        }
    }
}

fn field_label_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn field_value_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}
