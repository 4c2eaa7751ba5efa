// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, finished catalog requests)
// - Spawning catalog requests so the UI never waits on the network

pub mod app;
pub mod components;
pub mod form;
pub mod modal;
pub mod render;
pub mod theme;
pub mod views;

use crate::catalog::CatalogApi;
use crate::config::Config;
use crate::events::{Outcome, Request};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Capacity of the outcome channel
const OUTCOME_BUFFER: usize = 64;

/// Run the TUI
///
/// Sets up the terminal, issues the initial product load, runs the event
/// loop and restores the terminal when done.
pub async fn run_tui<C: CatalogApi>(config: Config, client: C, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(&config, log_buffer);
    let result = run_event_loop(&mut terminal, &mut app, &client).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources:
/// 1. Keyboard input, which may produce a catalog Request
/// 2. Timer ticks, for the busy spinner
/// 3. Outcomes of spawned requests, applied in arrival order
async fn run_event_loop<C: CatalogApi>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &C,
) -> Result<()> {
    let (outcome_tx, mut outcome_rx) = mpsc::channel::<Outcome>(OUTCOME_BUFFER);
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    let initial = app.initial_request();
    dispatch(app, client, &outcome_tx, initial);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            maybe_key = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key)) => Some(key),
                        _ => None,
                    }
                } else {
                    None
                }
            } => {
                if let Some(request) = maybe_key.and_then(|key| app.handle_key(key)) {
                    dispatch(app, client, &outcome_tx, request);
                }
            }

            _ = tick_interval.tick() => {
                app.tick = app.tick.wrapping_add(1);
            }

            Some(outcome) = outcome_rx.recv() => {
                app.apply(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    if app.in_flight > 0 {
        tracing::debug!("Quitting with {} request(s) still pending", app.in_flight);
    }

    Ok(())
}

/// Spawn a request; its outcome comes back on `tx`
fn dispatch<C: CatalogApi>(app: &mut App, client: &C, tx: &mpsc::Sender<Outcome>, request: Request) {
    app.track(&request);

    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = request.execute(&client).await;
        if tx.send(outcome).await.is_err() {
            tracing::debug!("UI closed before outcome arrived");
        }
    });
}
