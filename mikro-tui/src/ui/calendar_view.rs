use super::*;
use ratatui::layout::{Constraint, Direction, Layout};
use time::macros::format_description;

pub fn render_calendar(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_header(frame, app, root[0]);
    render_event_list(frame, app, root[1]);
    render_footer(frame, app, root[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let username = app
        .session
        .as_ref()
        .map(|s| s.username().to_string())
        .unwrap_or_default();

    let focus_format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    let focused = app
        .focused_time
        .and_then(|t| t.format(focus_format).ok())
        .unwrap_or_else(|| "none".to_string());

    let line = Line::from(vec![
        Span::styled(username, Style::default().fg(Color::Yellow)),
        Span::raw("  ·  focus: "),
        Span::styled(focused, Style::default().fg(Color::White)),
    ]);

    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" MikroCal ")
                .padding(Padding::horizontal(1)),
        ),
        area,
    );
}

fn render_event_list(frame: &mut Frame, app: &App, area: Rect) {
    let time_format = format_description!("[year]-[month]-[day] [hour]:[minute]");
    let events = app
        .session
        .as_ref()
        .map(|s| s.events())
        .unwrap_or_default();

    let items: Vec<ListItem> = if events.is_empty() {
        vec![ListItem::new("(no events)").style(Style::default().fg(Color::DarkGray))]
    } else {
        events
            .iter()
            .map(|event| {
                let when = event
                    .time
                    .and_then(|t| t.format(time_format).ok())
                    .unwrap_or_else(|| "            —   ".to_string());
                ListItem::new(Line::from(vec![
                    Span::styled(when, Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::styled(event.description.clone(), Style::default().fg(Color::White)),
                ]))
            })
            .collect()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Events ")
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !events.is_empty() {
        state.select(Some(app.event_scroll.min(events.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = if let Some(status) = &app.status_message {
        Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        ))
    } else {
        Line::from(vec![
            Span::styled("g", Style::default().fg(Color::Yellow)),
            Span::raw(": Pick date/time  "),
            Span::styled("j/k", Style::default().fg(Color::Yellow)),
            Span::raw(": Scroll  "),
            Span::styled("q", Style::default().fg(Color::Yellow)),
            Span::raw(": Quit"),
        ])
    };
    frame.render_widget(Paragraph::new(line), area);
}
