//! Detail panel widget for showing field/value pairs.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub struct DetailPanel<'a> {
    title: &'a str,
    fields: Vec<(&'a str, String)>,
    label_style: Style,
    empty_style: Style,
}

impl<'a> DetailPanel<'a> {
    pub fn new(title: &'a str, label_style: Style, empty_style: Style) -> Self {
        Self {
            title,
            fields: Vec::new(),
            label_style,
            empty_style,
        }
    }

    pub fn field(mut self, label: &'a str, value: impl Into<String>) -> Self {
        self.fields.push((label, value.into()));
        self
    }

    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .fields
            .iter()
            .map(|(label, value)| {
                let value_span = if value.is_empty() {
                    Span::styled("-", self.empty_style)
                } else {
                    Span::raw(value.clone())
                };
                Line::from(vec![
                    Span::styled(format!("{label}: "), self.label_style),
                    value_span,
                ])
            })
            .collect();

        let widget = Paragraph::new(Text::from(lines))
            .block(Block::default().title(self.title).borders(Borders::ALL))
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}
