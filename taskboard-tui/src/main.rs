//! Taskboard terminal entry point.

use crossterm::{
    event::{self, Event as CrosstermEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use taskboard_llm::{GeminiClient, TaskAssistant};
use taskboard_store::SheetsClient;
use taskboard_tui::config::TuiConfig;
use taskboard_tui::error::TuiError;
use taskboard_tui::events::TuiEvent;
use taskboard_tui::logging;
use taskboard_tui::persistence;
use taskboard_tui::state::App;
use taskboard_tui::views::render_view;
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    let config = TuiConfig::load()?;
    logging::init(&config.log_path)?;

    let store = SheetsClient::new(config.store_endpoint.clone(), config.request_timeout())?;
    let assistant = build_assistant(&config)?;

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    let mut app = App::new(config, Arc::new(store), Some(assistant), event_tx.clone());
    app.apply_persisted(persistence::load_or_default(&app.config.persistence_path));

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard;

    spawn_input_reader(event_tx.clone());
    app.start_load();

    let mut ticker = tokio::time::interval(app.config.tick_interval());

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        let event = tokio::select! {
            _ = ticker.tick() => TuiEvent::Tick,
            Some(event) = event_rx.recv() => event,
        };
        if app.handle_event(event) {
            break;
        }
    }

    if let Err(err) = persistence::save(&app.config.persistence_path, &app.persisted_state()) {
        warn!(error = %err, "failed to save UI state");
    }
    info!("taskboard exiting");
    Ok(())
}

fn build_assistant(config: &TuiConfig) -> Result<TaskAssistant, TuiError> {
    let api_key = config.api_key();
    if api_key.is_none() {
        warn!("no generation API key configured; assistant features will report unavailable");
    }
    let client = GeminiClient::new(
        config.generation.endpoint.clone(),
        api_key,
        config.request_timeout(),
    )?;
    Ok(TaskAssistant::new(Arc::new(client)).with_policy(config.retry_policy()))
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
            let sent = match event::read() {
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    sender.blocking_send(TuiEvent::Input(key))
                }
                Ok(CrosstermEvent::Resize(width, height)) => {
                    sender.blocking_send(TuiEvent::Resize { width, height })
                }
                _ => Ok(()),
            };
            if sent.is_err() {
                break;
            }
        }
    });
}
