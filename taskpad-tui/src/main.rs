//! Taskpad TUI entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use taskpad_tui::api_client::RestClient;
use taskpad_tui::config::TuiConfig;
use taskpad_tui::error::TuiError;
use taskpad_tui::events::TuiEvent;
use taskpad_tui::keys::{map_key, Action};
use taskpad_tui::notifications::NotificationLevel;
use taskpad_tui::state::{App, FormOutcome, PromptKind};
use taskpad_tui::views::render_view;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    let api = RestClient::new(&config)?;
    let mut app = App::new(config, api);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());

    if let Err(err) = refresh_notes(&mut app).await {
        app.notify(
            NotificationLevel::Error,
            format!("Initial refresh failed: {}", err),
        );
    }

    let tick_rate = Duration::from_millis(app.config.refresh_interval_ms);
    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                let _ = event_tx.send(TuiEvent::Tick).await;
            }
            Some(event) = event_rx.recv() => {
                if handle_event(&mut app, event).await? {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                match evt {
                    CrosstermEvent::Key(key) => {
                        let _ = sender.blocking_send(TuiEvent::Input(key));
                    }
                    CrosstermEvent::Resize(width, height) => {
                        let _ = sender.blocking_send(TuiEvent::Resize { width, height });
                    }
                    _ => {}
                }
            }
        }
    });
}

async fn handle_event(app: &mut App, event: TuiEvent) -> Result<bool, TuiError> {
    match event {
        TuiEvent::Input(key) => {
            // Overlays own the keyboard while open.
            if app.form.is_some() {
                return handle_form_key(app, key).await;
            }
            if app.confirm_delete.is_some() {
                return handle_confirm_key(app, key).await;
            }
            if let Some(prompt) = app.search.as_mut() {
                match prompt.handle_key(key) {
                    FormOutcome::Submit => {
                        let kind = prompt.kind;
                        let query = prompt.query.clone();
                        app.search = None;
                        match kind {
                            PromptKind::TitleContains => app.note_view.set_title_filter(query),
                            PromptKind::DueDate => app.note_view.set_due_date_filter(query),
                        }
                    }
                    FormOutcome::Cancel => app.search = None,
                    FormOutcome::Continue => {}
                }
                return Ok(false);
            }
            if app.modal.is_some() {
                app.modal = None;
                return Ok(false);
            }
            if let Some(action) = map_key(key) {
                return handle_action(app, action).await;
            }
        }
        TuiEvent::Tick => {
            if let Err(err) = refresh_notes(app).await {
                app.notify(NotificationLevel::Warning, format!("Refresh failed: {}", err));
            }
        }
        TuiEvent::Resize { .. } => {}
    }
    Ok(false)
}

async fn handle_action(app: &mut App, action: Action) -> Result<bool, TuiError> {
    match action {
        Action::Quit => return Ok(true),
        Action::MoveDown => app.note_view.select_next(),
        Action::MoveUp => app.note_view.select_previous(),
        Action::NewNote => app.open_form(),
        Action::DeleteNote => app.request_delete(),
        Action::Refresh => {
            if let Err(err) = refresh_notes(app).await {
                app.notify(NotificationLevel::Error, format!("Refresh failed: {}", err));
            }
        }
        Action::CycleSort => app.note_view.cycle_sort(),
        Action::CycleStatusFilter => app.note_view.cycle_status_filter(),
        Action::CyclePriorityFilter => app.note_view.cycle_priority_filter(),
        Action::ClearFilters => app.note_view.clear_filters(),
        Action::OpenSearch => app.open_title_search(),
        Action::OpenDueDateFilter => app.open_due_date_filter(),
        Action::OpenHelp => app.open_help(),
    }
    Ok(false)
}

async fn handle_form_key(app: &mut App, key: crossterm::event::KeyEvent) -> Result<bool, TuiError> {
    let Some(form) = app.form.as_mut() else {
        return Ok(false);
    };
    match form.handle_key(key) {
        FormOutcome::Cancel => {
            app.form = None;
        }
        FormOutcome::Submit => match form.to_request() {
            Ok(request) => {
                form.error = None;
                match app.api.add_note(&request).await {
                    Ok(response) => {
                        app.form = None;
                        app.notify(NotificationLevel::Success, response.message);
                        if let Err(err) = refresh_notes(app).await {
                            app.notify(
                                NotificationLevel::Warning,
                                format!("Refresh failed: {}", err),
                            );
                        }
                    }
                    Err(err) => {
                        if let Some(form) = app.form.as_mut() {
                            form.error = Some(err.to_string());
                        }
                    }
                }
            }
            Err(message) => {
                form.error = Some(message);
            }
        },
        FormOutcome::Continue => {}
    }
    Ok(false)
}

async fn handle_confirm_key(
    app: &mut App,
    key: crossterm::event::KeyEvent,
) -> Result<bool, TuiError> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('y') => {
            if let Some(note_id) = app.confirm_delete.take() {
                match app.api.delete_note(note_id).await {
                    Ok(response) => {
                        app.note_view.remove(note_id);
                        app.notify(NotificationLevel::Success, response.message);
                        if let Err(err) = refresh_notes(app).await {
                            app.notify(
                                NotificationLevel::Warning,
                                format!("Refresh failed: {}", err),
                            );
                        }
                    }
                    Err(err) => {
                        app.notify(NotificationLevel::Error, format!("Delete failed: {}", err));
                    }
                }
            }
        }
        KeyCode::Esc | KeyCode::Char('n') => {
            app.confirm_delete = None;
        }
        _ => {}
    }
    Ok(false)
}

async fn refresh_notes(app: &mut App) -> Result<(), TuiError> {
    app.note_view.loading = true;
    let result = app.api.list_notes().await;
    app.note_view.loading = false;
    app.note_view.set_notes(result?);
    Ok(())
}
