use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crate::app::{App, AppEvent};

const TICK_RATE: Duration = Duration::from_millis(250);

/// Polls for crossterm events and maps them to `AppEvent`s.
pub fn poll(timeout: Duration) -> Result<Option<AppEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(None);
            }
            return Ok(Some(AppEvent::KeyPress(key.code)));
        }
        return Ok(None);
    }
    Ok(Some(AppEvent::Tick))
}

/// Runs the main event loop until the app asks to quit.
pub fn run(app: &mut App, terminal: &mut crate::tui::Terminal) -> Result<()> {
    tracing::info!("entering event loop");
    while app.running {
        terminal.draw(|frame| crate::ui::draw(frame, app))?;

        if let Some(event) = poll(TICK_RATE)? {
            app.update(event);
        }
    }
    tracing::info!("event loop finished");
    Ok(())
}
