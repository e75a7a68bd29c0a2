//! Keybinding definitions for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    NewNote,
    DeleteNote,
    Refresh,
    CycleSort,
    CycleStatusFilter,
    CyclePriorityFilter,
    ClearFilters,
    OpenSearch,
    OpenDueDateFilter,
    OpenHelp,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::OpenHelp),
        KeyCode::Char('/') => Some(Action::OpenSearch),
        KeyCode::Char('n') => Some(Action::NewNote),
        KeyCode::Char('d') => Some(Action::DeleteNote),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('s') => Some(Action::CycleSort),
        KeyCode::Char('f') => Some(Action::CycleStatusFilter),
        KeyCode::Char('p') => Some(Action::CyclePriorityFilter),
        KeyCode::Char('u') => Some(Action::OpenDueDateFilter),
        KeyCode::Char('c') => Some(Action::ClearFilters),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        _ => None,
    }
}
