//! WAKEEL TUI entry point.

use chrono::Utc;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent, KeyEventKind,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use wakeel_tui::api_client::{ListSource, RestClient};
use wakeel_tui::config::TuiConfig;
use wakeel_tui::error::TuiError;
use wakeel_tui::events::TuiEvent;
use wakeel_tui::keys::map_key;
use wakeel_tui::loader::spawn_list_loads;
use wakeel_tui::logging::init_logging;
use wakeel_tui::state::App;
use wakeel_tui::views::render_view;

#[tokio::main]
async fn main() -> Result<(), TuiError> {
    color_eyre::install()?;
    let config = TuiConfig::load()?;
    init_logging(&config.log_path)?;

    let source: Arc<dyn ListSource> = Arc::new(RestClient::new(&config)?);
    let tick_rate = Duration::from_millis(config.tick_rate_ms);
    let mut app = App::new(config);

    let mut terminal = setup_terminal()?;
    let _guard = TerminalGuard {};

    let (event_tx, mut event_rx) = mpsc::channel::<TuiEvent>(256);
    spawn_input_reader(event_tx.clone());
    drain_pending_loads(&mut app, &source, &event_tx);

    let mut ticker = tokio::time::interval(tick_rate);

    loop {
        terminal.draw(|f| render_view(f, &app))?;

        tokio::select! {
            _ = ticker.tick() => {
                app.tick(Utc::now());
            }
            Some(event) = event_rx.recv() => {
                let area = terminal.size()?;
                handle_event(&mut app, event, area);
                drain_pending_loads(&mut app, &source, &event_tx);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
    }
}

fn spawn_input_reader(sender: mpsc::Sender<TuiEvent>) {
    std::thread::spawn(move || loop {
        if let Ok(true) = event::poll(Duration::from_millis(200)) {
            if let Ok(evt) = event::read() {
                let event = match evt {
                    CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                        Some(TuiEvent::Input(key))
                    }
                    CrosstermEvent::Mouse(mouse) => match mouse.kind {
                        MouseEventKind::Down(_) => Some(TuiEvent::Click {
                            column: mouse.column,
                            row: mouse.row,
                        }),
                        _ => None,
                    },
                    CrosstermEvent::Resize(width, height) => {
                        Some(TuiEvent::Resize { width, height })
                    }
                    _ => None,
                };
                if let Some(event) = event {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
            }
        }
    });
}

fn drain_pending_loads(app: &mut App, source: &Arc<dyn ListSource>, sender: &mpsc::Sender<TuiEvent>) {
    let domains = app.take_pending_loads();
    if !domains.is_empty() {
        spawn_list_loads(Arc::clone(source), app.session, domains, sender.clone());
    }
}

fn handle_event(app: &mut App, event: TuiEvent, area: Rect) {
    match event {
        TuiEvent::Input(key) => {
            if let Some(action) = map_key(key, app.input_mode()) {
                app.handle_key_action(action);
            }
        }
        TuiEvent::Click { column, row } => app.click(column, row, area),
        TuiEvent::Loaded { session, list } => app.resolve(session, list),
        TuiEvent::Resize { width, height } => {
            tracing::debug!(width, height, "Terminal resized");
        }
    }
}
