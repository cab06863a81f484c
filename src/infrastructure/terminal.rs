//! Terminal setup, frame output and input polling via crossterm.

use crate::app::{map_key, Event};
use crate::domain::Result;
use crate::ui::Frame;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event as TermEvent};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use std::io::{self, Write};
use std::time::Duration;

/// Raw mode plus alternate screen for the lifetime of the guard.
pub struct TerminalGuard;

impl TerminalGuard {
    /// Switches the terminal into full-screen mode.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be configured.
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        if let Err(error) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
    }
}

/// Hands the terminal back to the user (for the editor) until dropped.
pub struct TerminalSuspendGuard;

impl TerminalSuspendGuard {
    /// Leaves raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the terminal cannot be restored; full-screen
    /// mode is re-entered before returning it.
    pub fn new() -> Result<Self> {
        let mut stdout = io::stdout();
        disable_raw_mode()?;
        if let Err(error) = execute!(stdout, Show, LeaveAlternateScreen) {
            let _ = enable_raw_mode();
            let _ = execute!(stdout, EnterAlternateScreen, Hide);
            return Err(error.into());
        }
        stdout.flush()?;
        Ok(Self)
    }
}

impl Drop for TerminalSuspendGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = enable_raw_mode();
        let _ = execute!(stdout, EnterAlternateScreen, Hide, Clear(ClearType::All));
        let _ = stdout.flush();
    }
}

/// Current terminal size as `(width, height)`.
///
/// # Errors
///
/// Returns an I/O error if the size cannot be queried.
pub fn size() -> Result<(usize, usize)> {
    let (cols, rows) = terminal::size()?;
    Ok((usize::from(cols), usize::from(rows)))
}

/// Writes `frame` from the top-left corner, clearing leftovers of the
/// previous frame.
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn draw<W: Write>(out: &mut W, frame: &Frame) -> Result<()> {
    for (row, line) in frame.lines().iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row))?;
        out.write_all(line.as_bytes())?;
        queue!(out, Clear(ClearType::UntilNewLine))?;
    }
    let next_row = u16::try_from(frame.lines().len()).unwrap_or(u16::MAX);
    queue!(out, MoveTo(0, next_row), Clear(ClearType::FromCursorDown))?;
    out.flush()?;
    Ok(())
}

/// Waits up to `timeout` for terminal input.
///
/// Returns `None` on timeout or for input that maps to no event.
///
/// # Errors
///
/// Returns an I/O error if the terminal cannot be read.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(translate(&event::read()?))
}

fn translate(event: &TermEvent) -> Option<Event> {
    match event {
        TermEvent::Key(key) => map_key(key).map(Event::Input),
        TermEvent::Resize(cols, rows) => Some(Event::Resize {
            width: usize::from(*cols),
            height: usize::from(*rows),
        }),
        _ => None,
    }
}
