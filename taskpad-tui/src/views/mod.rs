//! View rendering dispatch.

pub mod note;
pub mod overlay;

use crate::notifications::NotificationLevel;
use crate::state::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);
    note::render(f, app, layout[1]);
    render_footer(f, app, layout[2]);

    if let Some(form) = &app.form {
        overlay::render_form(f, app, form);
    } else if app.confirm_delete.is_some() {
        overlay::render_confirm_delete(f, app);
    } else if let Some(prompt) = &app.search {
        overlay::render_prompt(f, app, prompt);
    } else if let Some(modal) = &app.modal {
        overlay::render_modal(f, app, modal);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let title = format!("Taskpad | {}", app.config.api_base_url);
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(app.theme.primary),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let help = "j/k move | n new | d delete | s sort | f/p/u filter | / search | c clear | r refresh | ? help | q quit";
    let (text, style) = if let Some(note) = app.notifications.last() {
        let label = match note.level {
            NotificationLevel::Info => "INFO",
            NotificationLevel::Warning => "WARN",
            NotificationLevel::Error => "ERROR",
            NotificationLevel::Success => "OK",
        };
        let color = match note.level {
            NotificationLevel::Info => app.theme.info,
            NotificationLevel::Warning => app.theme.warning,
            NotificationLevel::Error => app.theme.error,
            NotificationLevel::Success => app.theme.success,
        };
        (format!("{}: {}", label, note.message), Style::default().fg(color))
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
