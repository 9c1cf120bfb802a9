use crate::ui::app::{App, Demo};
use crate::ui::footer::Footer;
use crate::ui::form::{FormField, FormState};
use crate::ui::greeting::greeting;
use crate::ui::header::Header;
use crate::ui::layout::{popup_rect, Regions};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let Regions {
        header,
        body,
        footer,
    } = Regions::split(area);

    frame.render_widget(Header::new().widget(app.demo()), header);
    frame.render_widget(Clear, body);

    let lines = match app.demo() {
        Demo::People => people_lines(app),
        Demo::Fetch => fetch_lines(app),
        Demo::Form => form_lines(app.form()),
        Demo::Counter => counter_lines(app),
        Demo::Greeting => greeting_lines(app),
    };
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .title(app.demo().title())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        ),
        body,
    );

    frame.render_widget(Footer::new().widget(app.demo(), footer), footer);

    if let Some(message) = app.alert() {
        draw_alert(frame, message, area);
    }
}

fn heading(text: impl Into<String>) -> Line<'static> {
    Line::from(Span::styled(
        text.into(),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACTIVE_HIGHLIGHT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Span::styled(format!("[ {} ]", label), style)
}

fn people_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.people();
    let mut lines = Vec::new();

    if state.people.is_empty() {
        lines.push(Line::from(Span::styled(
            "No people.",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    for (idx, person) in state.people.iter().enumerate() {
        let selected = idx == app.people_selection();
        let marker = if selected { "> " } else { "  " };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(
                person.name.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            button("Remove User", selected),
        ]));
    }

    lines.push(Line::from(Span::styled(
        "─".repeat(24),
        Style::default().fg(MUTED_TEXT),
    )));
    lines.push(Line::from(vec![
        button("Reset", false),
        Span::raw(" "),
        button("Clear", false),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("user: {}  login: {}", state.user, state.login),
        Style::default().fg(MUTED_TEXT),
    )));
    lines
}

fn fetch_lines(app: &App) -> Vec<Line<'static>> {
    let state = app.fetch();
    let mut lines = vec![heading("Hello Fetch")];

    if state.loading {
        lines.push(Line::from(Span::styled(
            "Loading...",
            Style::default().fg(MUTED_TEXT),
        )));
    }
    for user in &state.users {
        lines.push(Line::from(vec![
            Span::styled(
                user.login.clone(),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(user.avatar_url.clone(), Style::default().fg(MUTED_TEXT)),
        ]));
    }
    lines
}

fn form_lines(form: &FormState) -> Vec<Line<'static>> {
    let field_line = |label: &str, value: &str, field: FormField| {
        let focused = form.focus == field;
        let value_style = if focused {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        let cursor = if focused { "_" } else { "" };
        Line::from(vec![
            Span::raw(format!("{:<9}", label)),
            Span::styled(format!("{}{}", value, cursor), value_style),
        ])
    };

    vec![
        Line::from(vec![button("Hello", form.focus == FormField::Hello)]),
        Line::from(""),
        heading(form.value.title.clone()),
        field_line("Title:", &form.value.title, FormField::Title),
        field_line("address:", &form.value.address, FormField::Address),
        Line::from(vec![button("Submit", form.focus == FormField::Submit)]),
    ]
}

fn counter_lines(app: &App) -> Vec<Line<'static>> {
    tracing::trace!(value = app.counter().value, "Hello Render");
    vec![
        heading(app.counter().value.to_string()),
        Line::from(vec![button("Count", true)]),
    ]
}

fn greeting_lines(app: &App) -> Vec<Line<'static>> {
    vec![
        heading(greeting(app.role())),
        Line::from(Span::styled(
            format!("role: {}", app.role().as_str()),
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}

const ALERT_TITLE: &str = "Alert";

fn draw_alert(frame: &mut Frame<'_>, message: &str, area: Rect) {
    let popup = popup_rect(ALERT_TITLE, message, area);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(Line::from(message.to_string()))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .title(ALERT_TITLE)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
        popup,
    );
}
