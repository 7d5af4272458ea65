//! TUI module
//!
//! Terminal front end for editing a schema's values, built with ratatui.

pub mod app;
mod constants;
mod theme;
pub mod views;

pub use app::*;
pub use theme::*;

use crate::store::AppletConfig;
use anyhow::Result;
use constants::EVENT_POLL_MS;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Run the form until the user quits, returning the final values
pub async fn run_tui(mut app: FormApp) -> Result<AppletConfig> {
    tracing::debug!("Initializing TUI");

    let enable_mouse = app.config.ui.enable_mouse;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if enable_mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::debug!("TUI initialized, entering main loop");

    let result = event_loop(&mut terminal, &mut app).await;

    tracing::debug!("TUI shutting down");

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if enable_mouse {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    result?;
    Ok(app.export())
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut FormApp,
) -> Result<()> {
    loop {
        app.tick();
        terminal.draw(|f| app.render(f))?;

        // Handle input events (non-blocking)
        if event::poll(std::time::Duration::from_millis(EVENT_POLL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) == Some(true) {
                    return Ok(());
                }
            }
        }

        // Give spawned asset loads a chance to run between frames
        tokio::task::yield_now().await;
    }
}
