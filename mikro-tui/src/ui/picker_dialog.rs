use super::utils::centered_rect;
use super::*;
use crate::app::PickerField;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn render_picker_dialog(frame: &mut Frame, app: &mut App) {
    let picker = match &app.picker {
        Some(picker) => picker,
        None => return,
    };
    let s = &picker.selection;

    let month_text = s
        .month
        .map(|m| MONTH_NAMES[u8::from(m) as usize - 1].to_string())
        .unwrap_or_else(|| "—".to_string());
    let day_text = s
        .day
        .map(|d| d.to_string())
        .unwrap_or_else(|| "—".to_string());
    let year_text = if s.year.value.is_empty() {
        "—".to_string()
    } else {
        s.year.value.clone()
    };

    let field = |label: &str, value: String, which: PickerField| {
        let focused = picker.focused == which;
        Line::from(vec![
            Span::styled(format!("{:<8}", label), field_label_style(focused)),
            Span::styled(value, field_value_style(focused)),
        ])
    };

    let valid = s.validate();
    let ok_style = if valid {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines = vec![
        Line::from(""),
        field("Month", month_text, PickerField::Month),
        field("Day", day_text, PickerField::Day),
        field("Year", year_text, PickerField::Year),
        field("Hour", format!("{:02}", s.hour), PickerField::Hour),
        field("Minute", format!("{:02}", s.minute), PickerField::Minute),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter] OK", ok_style),
            Span::raw("  "),
            Span::styled("[r] Reset", Style::default().fg(Color::Yellow)),
            Span::raw("  "),
            Span::styled("[Esc] Cancel", Style::default().fg(Color::Yellow)),
        ]),
    ];

    let area = centered_rect(44, 12, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(Span::styled(
                        " Date & Time ",
                        Style::default().fg(Color::Yellow),
                    ))
                    .padding(Padding::horizontal(2)),
            )
            .alignment(Alignment::Left),
        area,
    );
}
