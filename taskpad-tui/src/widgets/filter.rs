//! Sort and filter summary bar.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct FilterOption {
    pub label: String,
    pub active: bool,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, active: bool) -> Self {
        Self {
            label: label.into(),
            active,
        }
    }
}

pub struct FilterBar<'a> {
    pub title: &'a str,
    pub filters: &'a [FilterOption],
    pub active_style: Style,
    pub inactive_style: Style,
}

impl<'a> FilterBar<'a> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans: Vec<Span> = Vec::with_capacity(self.filters.len() * 2);
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", self.inactive_style));
            }
            let style = if filter.active {
                self.active_style
            } else {
                self.inactive_style
            };
            spans.push(Span::styled(filter.label.clone(), style));
        }

        let paragraph = Paragraph::new(Line::from(spans))
            .block(Block::default().title(self.title).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}
