//! Application state and view state definitions.

use crate::api_client::RestClient;
use crate::config::TuiConfig;
use crate::notifications::{Notification, NotificationLevel};
use crate::theme::SlateTheme;
use crossterm::event::{KeyCode, KeyEvent};
use taskpad_api::types::CreateNoteRequest;
use taskpad_core::filter::{sort_notes, NoteFilter, SortKey};
use taskpad_core::{
    parse_due_date, Note, NoteId, Priority, Status, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN,
};

#[derive(Clone)]
pub struct App {
    pub config: TuiConfig,
    pub theme: SlateTheme,
    pub api: RestClient,
    pub note_view: NoteViewState,
    pub form: Option<NoteForm>,
    pub confirm_delete: Option<NoteId>,
    pub search: Option<TextPrompt>,
    pub modal: Option<Modal>,
    pub notifications: Vec<Notification>,
}

impl App {
    pub fn new(config: TuiConfig, api: RestClient) -> Self {
        let theme = SlateTheme::slate();
        Self {
            config,
            theme,
            api,
            note_view: NoteViewState::new(),
            form: None,
            confirm_delete: None,
            search: None,
            modal: None,
            notifications: Vec::new(),
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification::new(level, message));
    }

    pub fn open_form(&mut self) {
        self.form = Some(NoteForm::new());
    }

    pub fn open_title_search(&mut self) {
        let query = self
            .note_view
            .filter
            .title_contains
            .clone()
            .unwrap_or_default();
        self.search = Some(TextPrompt {
            kind: PromptKind::TitleContains,
            query,
        });
    }

    pub fn open_due_date_filter(&mut self) {
        let query = self.note_view.filter.due_date.clone().unwrap_or_default();
        self.search = Some(TextPrompt {
            kind: PromptKind::DueDate,
            query,
        });
    }

    pub fn open_help(&mut self) {
        self.modal = Some(Modal {
            title: "Keybindings".to_string(),
            message: "j/k or arrows move, n new, d delete, s sort, f status filter, \
                      p priority filter, u due date filter, / title search, \
                      c clear filters, r refresh, q quit."
                .to_string(),
        });
    }

    /// Ask for confirmation before deleting the selected note.
    pub fn request_delete(&mut self) {
        if let Some(note) = self.note_view.selected_note() {
            self.confirm_delete = Some(note.note_id);
        } else {
            self.notify(NotificationLevel::Info, "No note selected.");
        }
    }
}

#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub message: String,
}

// ============================================================================
// NOTE VIEW STATE
// ============================================================================

/// Server list order plus the client-side sort and filter transform.
///
/// `notes` holds whatever the server last returned. `visible` is the
/// filtered-then-sorted projection the list widget renders. Selection is
/// tracked by id so it survives re-sorting.
#[derive(Debug, Clone)]
pub struct NoteViewState {
    pub notes: Vec<Note>,
    pub visible: Vec<Note>,
    pub selected: Option<NoteId>,
    pub sort: SortKey,
    pub filter: NoteFilter,
    pub loading: bool,
}

impl NoteViewState {
    pub fn new() -> Self {
        Self {
            notes: Vec::new(),
            visible: Vec::new(),
            selected: None,
            sort: SortKey::CreatedAt,
            filter: NoteFilter::none(),
            loading: false,
        }
    }

    pub fn set_notes(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.apply_view();
    }

    /// Recompute `visible` from `notes` and fix up the selection.
    pub fn apply_view(&mut self) {
        let mut visible = self.notes.clone();
        self.filter.apply(&mut visible);
        sort_notes(&mut visible, self.sort);

        let selection_valid = self
            .selected
            .map(|id| visible.iter().any(|n| n.note_id == id))
            .unwrap_or(false);
        if !selection_valid {
            self.selected = visible.first().map(|n| n.note_id);
        }
        self.visible = visible;
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.selected
            .and_then(|id| self.visible.iter().find(|n| n.note_id == id))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
            .and_then(|id| self.visible.iter().position(|n| n.note_id == id))
    }

    pub fn select_next(&mut self) {
        if self.visible.is_empty() {
            self.selected = None;
            return;
        }
        let next = match self.selected_index() {
            Some(index) => (index + 1) % self.visible.len(),
            None => 0,
        };
        self.selected = Some(self.visible[next].note_id);
    }

    pub fn select_previous(&mut self) {
        if self.visible.is_empty() {
            self.selected = None;
            return;
        }
        let prev = match self.selected_index() {
            Some(0) | None => self.visible.len() - 1,
            Some(index) => index - 1,
        };
        self.selected = Some(self.visible[prev].note_id);
    }

    pub fn cycle_sort(&mut self) {
        let index = SortKey::ALL
            .iter()
            .position(|k| *k == self.sort)
            .unwrap_or(0);
        self.sort = SortKey::ALL[(index + 1) % SortKey::ALL.len()];
        self.apply_view();
    }

    pub fn cycle_status_filter(&mut self) {
        self.filter.status = cycle_option(self.filter.status, &Status::ALL);
        self.apply_view();
    }

    pub fn cycle_priority_filter(&mut self) {
        self.filter.priority = cycle_option(self.filter.priority, &Priority::ALL);
        self.apply_view();
    }

    pub fn set_title_filter(&mut self, query: String) {
        let trimmed = query.trim().to_string();
        self.filter.title_contains = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        };
        self.apply_view();
    }

    pub fn set_due_date_filter(&mut self, query: String) {
        let trimmed = query.trim().to_string();
        self.filter.due_date = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        };
        self.apply_view();
    }

    pub fn clear_filters(&mut self) {
        self.filter = NoteFilter::none();
        self.apply_view();
    }

    pub fn remove(&mut self, id: NoteId) {
        self.notes.retain(|n| n.note_id != id);
        self.apply_view();
    }
}

impl Default for NoteViewState {
    fn default() -> Self {
        Self::new()
    }
}

// None -> first value -> ... -> last value -> None.
fn cycle_option<T: Copy + PartialEq>(current: Option<T>, all: &[T]) -> Option<T> {
    match current {
        None => all.first().copied(),
        Some(value) => all
            .iter()
            .position(|v| *v == value)
            .and_then(|index| all.get(index + 1))
            .copied(),
    }
}

// ============================================================================
// NEW NOTE FORM
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    DueDate,
    Priority,
    Status,
}

impl FormField {
    pub const ALL: [FormField; 5] = [
        FormField::Title,
        FormField::Description,
        FormField::DueDate,
        FormField::Priority,
        FormField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::DueDate => "Due date",
            FormField::Priority => "Priority",
            FormField::Status => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    Continue,
    Submit,
    Cancel,
}

#[derive(Debug, Clone)]
pub struct NoteForm {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority_index: usize,
    pub status_index: usize,
    pub focus: FormField,
    pub error: Option<String>,
}

impl NoteForm {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            due_date: String::new(),
            priority_index: 1,
            status_index: 0,
            focus: FormField::Title,
            error: None,
        }
    }

    pub fn priority(&self) -> Priority {
        Priority::ALL[self.priority_index]
    }

    pub fn status(&self) -> Status {
        Status::ALL[self.status_index]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => return FormOutcome::Cancel,
            KeyCode::Enter => return FormOutcome::Submit,
            KeyCode::Tab | KeyCode::Down => self.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.prev_field(),
            KeyCode::Left => self.cycle_choice(false),
            KeyCode::Right => self.cycle_choice(true),
            KeyCode::Backspace => {
                if let Some(text) = self.focused_text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.focused_text_mut() {
                    text.push(c);
                }
            }
            _ => {}
        }
        FormOutcome::Continue
    }

    fn next_field(&mut self) {
        let index = FormField::ALL.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = FormField::ALL[(index + 1) % FormField::ALL.len()];
    }

    fn prev_field(&mut self) {
        let index = FormField::ALL.iter().position(|f| *f == self.focus).unwrap_or(0);
        let prev = if index == 0 {
            FormField::ALL.len() - 1
        } else {
            index - 1
        };
        self.focus = FormField::ALL[prev];
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::DueDate => Some(&mut self.due_date),
            FormField::Priority | FormField::Status => None,
        }
    }

    fn cycle_choice(&mut self, forward: bool) {
        match self.focus {
            FormField::Priority => {
                self.priority_index =
                    step_index(self.priority_index, Priority::ALL.len(), forward);
            }
            FormField::Status => {
                self.status_index = step_index(self.status_index, Status::ALL.len(), forward);
            }
            _ => {}
        }
    }

    /// Client-side validation mirrors what the server enforces, so most
    /// rejections are caught before a request goes out.
    pub fn to_request(&self) -> Result<CreateNoteRequest, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required.".to_string());
        }
        if title.chars().count() > TITLE_MAX_LEN {
            return Err(format!("Title must be at most {} characters.", TITLE_MAX_LEN));
        }
        if self.description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(format!(
                "Description must be at most {} characters.",
                DESCRIPTION_MAX_LEN
            ));
        }
        let due_date = self.due_date.trim();
        if parse_due_date(due_date).is_none() {
            return Err("Due date must be YYYY-MM-DD.".to_string());
        }
        Ok(CreateNoteRequest {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            due_date: due_date.to_string(),
            priority: self.priority(),
            status: self.status(),
        })
    }
}

impl Default for NoteForm {
    fn default() -> Self {
        Self::new()
    }
}

fn step_index(index: usize, len: usize, forward: bool) -> usize {
    if forward {
        (index + 1) % len
    } else if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

// ============================================================================
// TEXT PROMPTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    TitleContains,
    DueDate,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::TitleContains => "Title filter",
            PromptKind::DueDate => "Due date filter",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TextPrompt {
    pub kind: PromptKind,
    pub query: String,
}

impl TextPrompt {
    pub fn handle_key(&mut self, key: KeyEvent) -> FormOutcome {
        match key.code {
            KeyCode::Esc => FormOutcome::Cancel,
            KeyCode::Enter => FormOutcome::Submit,
            KeyCode::Backspace => {
                self.query.pop();
                FormOutcome::Continue
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                FormOutcome::Continue
            }
            _ => FormOutcome::Continue,
        }
    }
}
