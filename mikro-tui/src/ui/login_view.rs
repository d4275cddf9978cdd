use super::utils::centered_rect;
use super::*;
use crate::app::{LoginField, LoginPhase, LoginVariant};

pub fn render_login(frame: &mut Frame, app: &mut App) {
    let connecting = app.login.phase == LoginPhase::Connecting;
    let dim = |style: Style| {
        if connecting {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        }
    };

    let focused = app.login.focused_field;
    let mut lines = vec![Line::from("")];

    if let LoginVariant::Remote {
        services,
        selected_service,
        ..
    } = &app.login.variant
    {
        let service_name = services
            .get(*selected_service)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| "<none>".to_string());
        lines.push(Line::from(vec![
            Span::styled("Service:  ", dim(field_label_style(focused == LoginField::Service))),
            Span::styled(
                format!("< {} >", service_name),
                dim(field_value_style(focused == LoginField::Service)),
            ),
        ]));
    }

    lines.push(Line::from(vec![
        Span::styled("Username: ", dim(field_label_style(focused == LoginField::Username))),
        Span::styled(
            app.login.username_input.value.clone(),
            dim(field_value_style(focused == LoginField::Username)),
        ),
    ]));

    match &app.login.variant {
        LoginVariant::Local { file_input, .. } => {
            lines.push(Line::from(vec![
                Span::styled("File:     ", dim(field_label_style(focused == LoginField::File))),
                Span::styled(
                    file_input.value.clone(),
                    dim(field_value_style(focused == LoginField::File)),
                ),
            ]));
        }
        LoginVariant::Remote { password_input, .. } => {
            lines.push(Line::from(vec![
                Span::styled("Password: ", dim(field_label_style(focused == LoginField::Password))),
                Span::styled(
                    "•".repeat(password_input.value.chars().count()),
                    dim(field_value_style(focused == LoginField::Password)),
                ),
            ]));
        }
    }

    lines.push(Line::from(""));

    if let Some(error) = &app.login.error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(""));
    }

    if connecting {
        lines.push(Line::from(Span::styled(
            "Connecting...",
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(hint_line(&app.login.variant));
    }

    let title = match &app.login.variant {
        LoginVariant::Local { .. } => " MikroCal Login — Local File ",
        LoginVariant::Remote { .. } => " MikroCal Login ",
    };

    let area = centered_rect(64, 12, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(Span::styled(title, Style::default().fg(Color::Yellow)))
                    .padding(Padding::horizontal(2)),
            )
            .alignment(Alignment::Left),
        area,
    );

    if connecting {
        render_throbber(frame, app, area);
    }

    if let LoginVariant::Local {
        browser: Some(_), ..
    } = &app.login.variant
    {
        render_file_browser(frame, app);
    }

    if let LoginPhase::Failed(message) = &app.login.phase {
        render_error_dialog(frame, message.clone());
    }
}

fn hint_line(variant: &LoginVariant) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Yellow)),
        Span::raw(": Switch field  "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(": Login  "),
    ];
    if matches!(variant, LoginVariant::Local { .. }) {
        spans.push(Span::styled("Ctrl+O", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(": Browse  "));
    }
    spans.push(Span::styled("Esc", Style::default().fg(Color::Yellow)));
    spans.push(Span::raw(": Quit"));
    Line::from(spans)
}

fn render_throbber(frame: &mut Frame, app: &mut App, dialog: Rect) {
    let throbber_area = Rect {
        x: dialog.x + 2,
        y: dialog.y + dialog.height.saturating_sub(1),
        width: 2.min(dialog.width),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(throbber_widgets_tui::WhichUse::Spin);
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
}

fn render_error_dialog(frame: &mut Frame, message: String) {
    let area = centered_rect(48, 7, frame.area());
    frame.render_widget(Clear, area);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(""),
        Line::from(Span::styled("[Enter] OK", Style::default().fg(Color::Yellow))),
    ];
    frame.render_widget(
        Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(Span::styled(" Error ", Style::default().fg(Color::Red)))
                    .padding(Padding::horizontal(1)),
            )
            .alignment(Alignment::Center),
        area,
    );
}

fn render_file_browser(frame: &mut Frame, app: &App) {
    let browser = match &app.login.variant {
        LoginVariant::Local {
            browser: Some(browser),
            ..
        } => browser,
        _ => return,
    };

    let area = centered_rect(70, 18, frame.area());
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = if browser.entries.is_empty() {
        vec![ListItem::new("(no JSON files here)")
            .style(Style::default().fg(Color::DarkGray))]
    } else {
        browser
            .entries
            .iter()
            .map(|entry| {
                let label = if entry.is_dir {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                };
                let style = if entry.is_dir {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(label).style(style)
            })
            .collect()
    };

    let title = format!(" {} — JSON files ", browser.dir.display());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(browser.selected));
    frame.render_stateful_widget(list, area, &mut state);
}
