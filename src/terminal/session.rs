//! Terminal session guard: raw mode and alternate screen lifecycle.

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

use crate::config::EditorConfig;

/// RAII guard over the host terminal's mode.
///
/// Construction switches the terminal into raw mode (and, by default, the
/// alternate screen) and hides the cursor; `Drop` restores everything
/// unconditionally, so the shell comes back intact on every exit path.
pub struct TerminalSession {
    alternate_screen: bool,
}

impl TerminalSession {
    /// Take over the terminal.
    ///
    /// # Errors
    ///
    /// Returns an error if raw mode or alternate screen setup fails; this is
    /// a fatal startup condition for the caller.
    pub fn new(config: &EditorConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        let mut stdout = io::stdout();
        if config.alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;

        Ok(Self {
            alternate_screen: config.alternate_screen,
        })
    }

    /// Current terminal size as (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the size query fails.
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Restore terminal state
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
