//! Main application loop and event handling.

use crate::state::{AppMode, AppState, Effect, Message};
use crate::ui;
use crate::worker::{self, WorkerCommand, WorkerEvent};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use octoscope_core::{Config, FilePreferenceStore, ThemePreference};
use octoscope_github::GitHubClient;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// Run the TUI application
pub fn run(config: Config) -> Result<()> {
    let client = GitHubClient::new(&config.api)?;

    let store = FilePreferenceStore::open_default();
    let theme = ThemePreference::initialize(&store, config.theme.resolve_hint());
    let mut app = AppState::new(theme, Box::new(store));

    let (cmd_tx, cmd_rx) = mpsc::channel();
    let (evt_tx, evt_rx) = mpsc::channel();
    let worker = worker::start_worker(client, cmd_rx, evt_tx).context("Failed to start worker")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick = Duration::from_millis(config.ui.tick_rate_ms);
    let res = run_app(&mut terminal, &mut app, &cmd_tx, &evt_rx, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let _ = cmd_tx.send(WorkerCommand::Quit);
    if worker.join().is_err() {
        tracing::warn!("Worker thread panicked");
    }

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
    cmd_tx: &Sender<WorkerCommand>,
    evt_rx: &Receiver<WorkerEvent>,
    tick: Duration,
) -> Result<()> {
    loop {
        // Apply finished lookups before drawing.
        while let Ok(evt) = evt_rx.try_recv() {
            app.dispatch(Message::from(evt));
        }

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if let Some(effect) = handle_key_event(app, key) {
                    run_effect(effect, cmd_tx)?;
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

fn run_effect(effect: Effect, cmd_tx: &Sender<WorkerCommand>) -> Result<()> {
    match effect {
        Effect::Lookup { token, username } => cmd_tx
            .send(WorkerCommand::Lookup { token, username })
            .context("Worker is not running"),
    }
}

/// Handle keyboard events
pub fn handle_key_event(app: &mut AppState, key: KeyEvent) -> Option<Effect> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match app.mode {
        AppMode::Search => handle_search_keys(app, key.code, key.modifiers),
        AppMode::Help => {
            handle_help_keys(app, key.code);
            None
        }
    }
}

/// Handle keys in search mode
fn handle_search_keys(app: &mut AppState, key: KeyCode, modifiers: KeyModifiers) -> Option<Effect> {
    match (key, modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => app.quit(),
        (KeyCode::Char('t'), KeyModifiers::CONTROL) => {
            return app.dispatch(Message::ToggleTheme);
        }
        (KeyCode::Char('o'), KeyModifiers::CONTROL) => open_profile(app),
        (KeyCode::F(1), _) => app.toggle_help(),
        (KeyCode::Enter, _) => {
            let query = app.search.query.clone();
            return app.dispatch(Message::SubmitQuery(query));
        }
        (KeyCode::Esc, _) => app.search.clear_query(),
        (KeyCode::Char(c), KeyModifiers::NONE) | (KeyCode::Char(c), KeyModifiers::SHIFT) => {
            app.search.insert_char(c);
        }
        (KeyCode::Backspace, _) => app.search.delete_char(),
        (KeyCode::Left, _) => app.search.move_cursor_left(),
        (KeyCode::Right, _) => app.search.move_cursor_right(),
        (KeyCode::Home, _) => app.search.move_cursor_home(),
        (KeyCode::End, _) => app.search.move_cursor_end(),
        _ => {}
    }
    None
}

/// Handle keys in help mode
fn handle_help_keys(app: &mut AppState, key: KeyCode) {
    match key {
        KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q') => app.toggle_help(),
        _ => {}
    }
}

fn open_profile(app: &mut AppState) {
    let Some(url) = app.current_profile_url().map(str::to_string) else {
        return;
    };
    if let Err(e) = open::that_detached(&url) {
        tracing::warn!("Failed to open {}: {}", url, e);
        app.status = Some(format!("Could not open {url}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use octoscope_core::{MemoryPreferenceStore, SystemHint, ThemeChoice};

    fn app() -> AppState {
        let store = MemoryPreferenceStore::new();
        let theme = ThemePreference::initialize(&store, SystemHint::Unknown);
        AppState::new(theme, Box::new(store))
    }

    fn press(app: &mut AppState, code: KeyCode, modifiers: KeyModifiers) -> Option<Effect> {
        handle_key_event(app, KeyEvent::new(code, modifiers))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn enter_submits_trimmed_query() {
        let mut app = app();
        type_text(&mut app, " octocat ");

        let effect = press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            effect,
            Some(Effect::Lookup {
                token: 1,
                username: "octocat".to_string()
            })
        );
        assert!(app.is_loading());
    }

    #[test]
    fn enter_on_blank_input_does_nothing() {
        let mut app = app();
        type_text(&mut app, "   ");
        assert_eq!(press(&mut app, KeyCode::Enter, KeyModifiers::NONE), None);
        assert!(!app.is_loading());
    }

    #[test]
    fn ctrl_t_toggles_theme_and_ctrl_c_quits() {
        let mut app = app();
        assert_eq!(app.theme().choice, ThemeChoice::Light);

        press(&mut app, KeyCode::Char('t'), KeyModifiers::CONTROL);
        assert_eq!(app.theme().choice, ThemeChoice::Dark);
        assert!(app.search.query.is_empty());

        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit());
    }

    #[test]
    fn help_swallows_typing() {
        let mut app = app();
        press(&mut app, KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Help);

        type_text(&mut app, "ab");
        assert!(app.search.query.is_empty());

        press(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.mode, AppMode::Search);
    }
}
