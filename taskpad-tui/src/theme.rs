//! Slate theme and color utilities.

use ratatui::style::Color;
use taskpad_core::{Priority, Status};

#[derive(Debug, Clone)]
pub struct SlateTheme {
    pub bg: Color,
    pub bg_secondary: Color,
    pub bg_highlight: Color,
    pub primary: Color,
    pub primary_dim: Color,
    pub secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl SlateTheme {
    pub fn slate() -> Self {
        Self {
            bg: Color::Rgb(15, 17, 21),
            bg_secondary: Color::Rgb(26, 29, 36),
            bg_highlight: Color::Rgb(42, 47, 58),
            primary: Color::Rgb(122, 162, 247),
            primary_dim: Color::Rgb(61, 89, 161),
            secondary: Color::Rgb(187, 154, 247),
            success: Color::Rgb(158, 206, 106),
            warning: Color::Rgb(224, 175, 104),
            error: Color::Rgb(247, 118, 142),
            info: Color::Rgb(125, 207, 255),
            text: Color::Rgb(192, 202, 245),
            text_dim: Color::Rgb(86, 95, 137),
            border: Color::Rgb(59, 66, 97),
            border_focus: Color::Rgb(122, 162, 247),
        }
    }
}

impl Default for SlateTheme {
    fn default() -> Self {
        Self::slate()
    }
}

pub fn priority_color(priority: Priority, theme: &SlateTheme) -> Color {
    match priority {
        Priority::Low => theme.text_dim,
        Priority::Medium => theme.warning,
        Priority::High => theme.error,
    }
}

pub fn status_color(status: Status, theme: &SlateTheme) -> Color {
    match status {
        Status::Todo => theme.primary,
        Status::InProgress => theme.warning,
        Status::Done => theme.success,
    }
}
