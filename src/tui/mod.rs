// TUI module - Terminal User Interface
//
// Sets up the terminal, runs the event loop, and restores the terminal on
// exit. Lookups run on spawned tasks and report back through a channel so
// the UI keeps animating while a request is in flight.

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod theme;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::status::{self, StatusError, StatusQuery, StatusResponse, StatusSource, StatusWidget};
use anyhow::{Context, Result};
use app::{Action, App};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

type Outcome = (u64, Result<StatusResponse, StatusError>);

/// Run the TUI
///
/// Mounts the widget (starting the first lookup if the location names a
/// user) and runs until the user quits.
pub async fn run_tui(
    widget: StatusWidget,
    source: Arc<dyn StatusSource>,
    log_buffer: LogBuffer,
    config: Config,
) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(widget, &config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app, source).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Start a lookup on a background task
///
/// The outcome is tagged with the query's generation; the widget drops it
/// if a newer attempt has started by the time it arrives.
fn spawn_lookup(source: &Arc<dyn StatusSource>, query: StatusQuery, tx: &mpsc::Sender<Outcome>) {
    let source = Arc::clone(source);
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = status::execute(source.as_ref(), query).await;
        // Receiver is gone only when the TUI has exited
        let _ = tx.send(outcome).await;
    });
}

/// Main event loop
///
/// Waits on keyboard input, a redraw tick, and finished lookups, whichever
/// comes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    source: Arc<dyn StatusSource>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::channel::<Outcome>(16);
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    if let Some(query) = app.mount() {
        spawn_lookup(&source, query, &tx);
    }

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            action = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        return app.handle_key(key);
                    }
                }
                Action::None
            } => {
                match action {
                    Action::None => {}
                    Action::Lookup(query) => spawn_lookup(&source, query, &tx),
                    Action::CopyMessage(text) => {
                        let strings = app.strings();
                        match clipboard::copy_to_clipboard(&text) {
                            Ok(()) => app.show_toast(strings.copied),
                            Err(e) => {
                                tracing::warn!("Clipboard copy failed: {:#}", e);
                                app.show_toast(strings.copy_failed);
                            }
                        }
                    }
                }
            }

            // Periodic tick for spinner and toast expiry
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Finished lookups
            Some((generation, outcome)) = rx.recv() => {
                app.widget.complete(generation, outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
