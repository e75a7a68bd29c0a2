//! Modal overlays: new-note form, delete confirmation, search, help.

use crate::state::{App, FormField, Modal, NoteForm, TextPrompt};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_form(f: &mut Frame<'_>, app: &App, form: &NoteForm) {
    let area = centered_rect(60, 14, f.size());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title("New Note")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border_focus));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = vec![
        text_field_line(app, form, FormField::Title, &form.title),
        text_field_line(app, form, FormField::Description, &form.description),
        text_field_line(app, form, FormField::DueDate, &form.due_date),
        choice_field_line(app, form, FormField::Priority, form.priority().as_str()),
        choice_field_line(app, form, FormField::Status, form.status().as_str()),
        Line::raw(""),
    ];
    if let Some(error) = &form.error {
        lines.push(Line::styled(
            error.clone(),
            Style::default().fg(app.theme.error),
        ));
    } else {
        lines.push(Line::styled(
            "Tab next field, Left/Right change value, Enter save, Esc cancel",
            Style::default().fg(app.theme.text_dim),
        ));
    }

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    f.render_widget(paragraph, inner);
}

fn text_field_line<'a>(
    app: &App,
    form: &NoteForm,
    field: FormField,
    value: &'a str,
) -> Line<'a> {
    let focused = form.focus == field;
    let cursor = if focused { "_" } else { "" };
    Line::from(vec![
        field_label(app, field, focused),
        Span::raw(format!("{value}{cursor}")),
    ])
}

fn choice_field_line<'a>(
    app: &App,
    form: &NoteForm,
    field: FormField,
    value: &'a str,
) -> Line<'a> {
    let focused = form.focus == field;
    let marker = if focused { format!("< {value} >") } else { value.to_string() };
    Line::from(vec![field_label(app, field, focused), Span::raw(marker)])
}

fn field_label(app: &App, field: FormField, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text_dim)
    };
    Span::styled(format!("{:>12}: ", field.label()), style)
}

pub fn render_confirm_delete(f: &mut Frame<'_>, app: &App) {
    let title = app
        .note_view
        .selected_note()
        .map(|n| n.title.clone())
        .unwrap_or_else(|| "this note".to_string());

    let area = centered_rect(50, 5, f.size());
    f.render_widget(Clear, area);

    let text = Text::from(vec![
        Line::raw(format!("Delete \"{title}\"?")),
        Line::styled(
            "Enter/y confirm, Esc/n cancel",
            Style::default().fg(app.theme.text_dim),
        ),
    ]);
    let widget = Paragraph::new(text).wrap(Wrap { trim: true }).block(
        Block::default()
            .title("Confirm Delete")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.warning)),
    );
    f.render_widget(widget, area);
}

pub fn render_prompt(f: &mut Frame<'_>, app: &App, prompt: &TextPrompt) {
    let area = bottom_bar(f.size());
    f.render_widget(Clear, area);

    let line = Line::from(vec![
        Span::styled("> ", Style::default().fg(app.theme.primary)),
        Span::raw(prompt.query.clone()),
        Span::raw("_"),
    ]);
    let widget = Paragraph::new(line).block(
        Block::default()
            .title(prompt.kind.label())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border_focus)),
    );
    f.render_widget(widget, area);
}

pub fn render_modal(f: &mut Frame<'_>, app: &App, modal: &Modal) {
    let area = centered_rect(60, 7, f.size());
    f.render_widget(Clear, area);

    let widget = Paragraph::new(modal.message.clone())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(modal.title.as_str())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.info)),
        );
    f.render_widget(widget, area);
}

fn centered_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(r);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}

fn bottom_bar(r: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(r);
    rows[1]
}
