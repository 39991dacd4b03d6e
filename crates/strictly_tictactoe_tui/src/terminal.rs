//! Raw-mode and alternate-screen lifetime.

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::warn;

/// Holds the terminal in raw mode on the alternate screen until dropped.
///
/// Restoration runs on every exit path, including `?` returns between
/// [`enter`](Self::enter) and the end of the session.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Switches to raw mode and the alternate screen on `out`.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { out };
        execute!(guard.out, EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, LeaveAlternateScreen) {
            warn!(error = %e, "Failed to leave alternate screen");
        }
        if let Err(e) = disable_raw_mode() {
            warn!(error = %e, "Failed to disable raw mode");
        }
    }
}
