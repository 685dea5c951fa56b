use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, ConfirmState, ContactForm, Mode};

const TITLE: &str = "Книга контактов";
const COPIED_HINT: &str = " Скопировано!";
const PHONE_PLACEHOLDER: &str = "например, 89123456789";
const LIST_EMPTY: &str = "Нет сохранённых контактов";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(size);

    render_header(frame, chunks[0], app);
    render_list(frame, chunks[1], app);
    render_footer(frame, chunks[2], app);

    if app.show_help {
        render_help(frame, size);
    }

    match &app.mode {
        Mode::ModalAddContact(form) | Mode::ModalEditContact(form) => {
            render_contact_form(frame, size, form)
        }
        Mode::Confirm(state) => render_confirm(frame, size, state),
        Mode::List => {}
    }
}

fn render_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("  контактов: {}", app.contacts.len())),
        Span::raw("   "),
        Span::styled("a + Добавить контакт", Style::default().fg(Color::Green)),
    ]);
    let block = Block::default().borders(Borders::ALL).title("phonebook");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hint = match app.mode {
        Mode::List => "j/k move  a add  e/enter edit  d delete  y copy phone  r refresh  ? help  q quit",
        Mode::ModalAddContact(_) | Mode::ModalEditContact(_) => {
            "tab next  shift+tab prev  enter select  ctrl+u clear  esc cancel"
        }
        Mode::Confirm(_) => "y confirm  n/esc cancel",
    };

    let mut lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    ))];

    if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )));
    }
    if let Some(err) = &app.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    if app.contacts.is_empty() {
        let paragraph = Paragraph::new(LIST_EMPTY)
            .block(Block::default().borders(Borders::ALL).title("Контакты"))
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .contacts
        .iter()
        .map(|contact| {
            let mut spans = vec![
                Span::styled(
                    format!("({:^2})", contact.initials),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(" "),
                Span::styled(
                    contact.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(contact.phone.clone(), Style::default().fg(Color::Yellow)),
            ];
            if app.is_copied(contact.id) {
                spans.push(Span::styled(
                    COPIED_HINT,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::ITALIC),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.selected));

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Контакты"))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_contact_form(frame: &mut Frame<'_>, area: Rect, form: &ContactForm) {
    let modal = centered_rect(60, 50, area);
    frame.render_widget(Clear, modal);

    let (title, submit_label) = if form.is_editing() {
        ("Редактировать контакт", "[Сохранить]")
    } else {
        ("Новый контакт", "[Добавить]")
    };
    let block = Block::default().borders(Borders::ALL).title(title);

    let mut lines = vec![field_line("Имя", &form.name, "", form.is_name_focus())];
    if let Some(err) = &form.name_error {
        lines.push(error_line(err));
    }
    lines.push(field_line(
        "Телефон",
        &form.phone,
        PHONE_PLACEHOLDER,
        form.is_phone_focus(),
    ));
    if let Some(err) = &form.phone_error {
        lines.push(error_line(err));
    }
    lines.push(Line::from(""));

    let save_style = match (form.is_save_focus(), form.can_submit()) {
        (true, true) => Style::default().fg(Color::Black).bg(Color::LightGreen),
        (true, false) => Style::default().fg(Color::Black).bg(Color::DarkGray),
        (false, true) => Style::default().fg(Color::Green),
        (false, false) => Style::default().fg(Color::DarkGray),
    };
    let cancel_style = if form.is_cancel_focus() {
        Style::default().fg(Color::Black).bg(Color::LightRed)
    } else {
        Style::default().fg(Color::Red)
    };

    lines.push(Line::from(vec![
        Span::styled("[Отмена]", cancel_style),
        Span::raw("  "),
        Span::styled(submit_label, save_style),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, modal);
}

fn render_confirm(frame: &mut Frame<'_>, area: Rect, state: &ConfirmState) {
    let modal = centered_rect(50, 30, area);
    frame.render_widget(Clear, modal);
    let paragraph = Paragraph::new(state.message.clone())
        .block(Block::default().borders(Borders::ALL).title("Подтверждение"))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, modal);
}

fn render_help(frame: &mut Frame<'_>, area: Rect) {
    let modal = centered_rect(70, 60, area);
    frame.render_widget(Clear, modal);

    let text = vec![
        Line::from("Global: Ctrl+C quit, ? help (from the list)"),
        Line::from("List: j/k move, g/G first/last, a add, e or enter edit, d delete, y or c copy phone, r refresh, q quit"),
        Line::from("Form: tab/shift+tab move, enter activate, ctrl+u clear field, ctrl+w delete word, esc cancel"),
        Line::from("Confirm: y yes, n or esc no"),
        Line::from(""),
        Line::from("Phones are stored as +<digits>; a leading 8 becomes +7."),
    ];

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn field_line(label: &str, value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let value_span = if value.is_empty() && !placeholder.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value.to_string(), style)
    };
    Line::from(vec![
        Span::styled(
            format!("{}: ", label),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        value_span,
    ])
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("  {}", message),
        Style::default().fg(Color::Red),
    ))
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
