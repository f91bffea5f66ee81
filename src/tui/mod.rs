//! Terminal User Interface module using ratatui

mod app;
mod events;
mod keys;
mod pagination;

pub use app::App;
pub use events::{Event, EventHandler};
pub use pagination::PaginationStyle;

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Write};

use crate::config::Config;
use crate::roster::Roster;

pub type Backend = CrosstermBackend<io::Stdout>;
pub type Frame<'a> = ratatui::Frame<'a>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Leave the alternate screen and hand mouse and cursor back to the shell
pub fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Restore the terminal to normal mode
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode()?;
    leave_screen(terminal.backend_mut())?;
    terminal.show_cursor()?;
    Ok(())
}

/// Main TUI entry point
pub async fn run(config: &Config, roster: Roster) -> Result<()> {
    let students = roster.len();
    let mut app = App::new(config, roster);
    let mut event_handler = EventHandler::new();
    event_handler.send(Event::StatusMessage(format!(
        "Loaded {} students. Press / to search, q to quit.",
        students
    )))?;

    let mut terminal = init_terminal()?;
    let result = run_app(&mut terminal, &mut app, &mut event_handler).await;

    restore_terminal(&mut terminal)?;
    result
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<Backend>,
    app: &mut App,
    event_handler: &mut EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let event = event_handler.next().await?;
        if app.handle_event(event)? {
            break; // Exit requested
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_screen_resets_terminal() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();

        assert!(written.contains("\x1b[?1049l"), "alternate screen: {written:?}");
        assert!(written.contains("\x1b[?1000l"), "mouse capture: {written:?}");
        assert!(written.contains("\x1b[?25h"), "cursor: {written:?}");
    }
}
