//! Note list view with detail pane.

use crate::state::App;
use crate::theme::{priority_color, status_color};
use crate::widgets::{DetailPanel, FilterBar, FilterOption};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filter_bar(f, app, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    render_list(f, app, columns[0]);
    render_detail(f, app, columns[1]);
}

fn render_filter_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let view = &app.note_view;
    let options = [
        FilterOption::new(format!("Sort: {}", view.sort.label()), true),
        FilterOption::new(
            format!(
                "Status: {}",
                view.filter.status.map(|s| s.as_str()).unwrap_or("ALL")
            ),
            view.filter.status.is_some(),
        ),
        FilterOption::new(
            format!(
                "Priority: {}",
                view.filter.priority.map(|p| p.as_str()).unwrap_or("ALL")
            ),
            view.filter.priority.is_some(),
        ),
        FilterOption::new(
            format!(
                "Due: {}",
                view.filter.due_date.as_deref().unwrap_or("ALL")
            ),
            view.filter.due_date.is_some(),
        ),
        FilterOption::new(
            format!(
                "Title: {}",
                view.filter.title_contains.as_deref().unwrap_or("-")
            ),
            view.filter.title_contains.is_some(),
        ),
    ];
    let bar = FilterBar {
        title: "View",
        filters: &options,
        active_style: Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
        inactive_style: Style::default().fg(app.theme.text_dim),
    };
    bar.render(f, area);
}

fn render_list(f: &mut Frame<'_>, app: &App, area: Rect) {
    let view = &app.note_view;
    let items: Vec<ListItem> = view
        .visible
        .iter()
        .map(|note| {
            let line = Line::from(vec![
                Span::styled(
                    format!("[{}] ", note.status.as_str()),
                    Style::default().fg(status_color(note.status, &app.theme)),
                ),
                Span::raw(note.title.clone()),
                Span::styled(
                    format!("  {}", note.priority.as_str()),
                    Style::default().fg(priority_color(note.priority, &app.theme)),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let title = if view.loading {
        format!("Notes ({}) [loading]", view.visible.len())
    } else {
        format!("Notes ({}/{})", view.visible.len(), view.notes.len())
    };

    let mut state = ListState::default();
    state.select(view.selected_index());

    let list = List::new(items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .bg(app.theme.bg_highlight)
                .fg(app.theme.primary),
        )
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut state);
}

fn render_detail(f: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(note) = app.note_view.selected_note() else {
        let empty = Paragraph::new("No note selected.")
            .block(Block::default().title("Details").borders(Borders::ALL))
            .style(Style::default().fg(app.theme.text_dim));
        f.render_widget(empty, area);
        return;
    };

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);

    let panel = DetailPanel::new(
        "Details",
        Style::default().fg(app.theme.secondary),
        Style::default().fg(app.theme.text_dim),
    )
    .field("ID", note.note_id.to_string())
    .field("Title", note.title.clone())
    .field("Due", note.due_date.clone())
    .field("Priority", note.priority.to_string())
    .field("Status", note.status.to_string())
    .field("Created", note.created_at.to_rfc3339())
    .field("Updated", note.updated_at.to_rfc3339());
    panel.render(f, right[0]);

    let description = Paragraph::new(note.description.clone())
        .block(Block::default().title("Description").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    f.render_widget(description, right[1]);
}
