//! Editor core: buffer, cursor, viewport, and the modal dispatcher.
//!
//! This module contains:
//! - [`Editor`]: the single owner of all editing state, the edit
//!   operations, and the key dispatcher
//! - [`Cursor`]: logical cursor navigation
//! - [`Viewport`]: just-enough scrolling
//! - [`Mode`]: the command/insert state machine
//! - [`StatusMessage`]: the bounded transient message slot

mod cursor;
mod message;
mod mode;
mod viewport;

pub use cursor::Cursor;
pub use message::{StatusMessage, MESSAGE_CAPACITY};
pub use mode::Mode;
pub use viewport::Viewport;

use std::path::Path;

use tracing::{debug, trace, warn};

use crate::buffer::TextBuffer;
use crate::config::EditorConfig;
use crate::error::{EditError, Result};
use crate::input::{InputEvent, KeyCode, KeyModifiers};

/// Rows at the bottom of the screen reserved for the status and message
/// bars.
const CHROME_ROWS: usize = 2;

/// The editor: one buffer, one cursor, one viewport, one mode.
///
/// All state is owned here and mutated only from the main loop; every
/// keystroke's effect completes before the next frame is composed. The
/// terminal itself is someone else's problem: the editor consumes
/// [`InputEvent`]s and is drawn by [`Screen`](crate::Screen).
pub struct Editor {
    config: EditorConfig,
    buffer: TextBuffer,
    cursor: Cursor,
    viewport: Viewport,
    mode: Mode,
    message: StatusMessage,
    screen_cols: usize,
    screen_rows: usize,
    /// Armed by a quit request on a dirty buffer; the next key decides.
    quit_pending: bool,
    running: bool,
    /// Set by a resize, consumed by the next frame as a full clear.
    pending_clear: bool,
}

impl Editor {
    /// Create an editor over an empty buffer.
    pub fn new(config: EditorConfig, width: u16, height: u16) -> Self {
        Self {
            config,
            buffer: TextBuffer::new(),
            cursor: Cursor::new(),
            viewport: Viewport::new(),
            mode: Mode::Command,
            message: StatusMessage::new(),
            screen_cols: width as usize,
            screen_rows: height as usize,
            quit_pending: false,
            running: true,
            pending_clear: false,
        }
    }

    /// Replace the buffer with the contents of `path`.
    ///
    /// # Errors
    ///
    /// Propagates load failures; the previous buffer is kept on error.
    pub fn open(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.buffer = TextBuffer::open(path.as_ref())?;
        self.cursor = Cursor::new();
        self.viewport = Viewport::new();
        Ok(())
    }

    /// The open buffer.
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The logical cursor.
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The current viewport offsets.
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The active mode.
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether the main loop should keep running.
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Screen width in columns.
    pub const fn width(&self) -> usize {
        self.screen_cols
    }

    /// Screen height in rows, including the two chrome rows.
    pub const fn height(&self) -> usize {
        self.screen_rows
    }

    /// Rows available for buffer content.
    pub const fn text_height(&self) -> usize {
        self.screen_rows.saturating_sub(CHROME_ROWS)
    }

    /// Set the transient status message.
    pub fn set_message(&mut self, text: impl Into<String>) {
        self.message.set(text);
    }

    /// The status message, if still fresh.
    pub fn message(&self) -> Option<&str> {
        self.message.current(self.config.message_ttl)
    }

    /// Consume the pending full-clear flag set by a resize.
    pub const fn take_pending_clear(&mut self) -> bool {
        let pending = self.pending_clear;
        self.pending_clear = false;
        pending
    }

    /// Recompute the rendered cursor column and pull the viewport after it.
    ///
    /// Called once per frame, before any drawing.
    pub fn prepare_frame(&mut self) {
        self.cursor.render_col = self
            .buffer
            .row(self.cursor.line)
            .map_or(0, |row| row.render_col(self.cursor.col));
        self.viewport.scroll(
            self.cursor.line,
            self.cursor.render_col,
            self.screen_cols,
            self.text_height(),
        );
    }

    /// Route one event from the key source.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Key { code, modifiers } => self.process_key(*code, *modifiers),
            InputEvent::Resize { width, height } => self.handle_resize(*width, *height),
            InputEvent::Error(err) => {
                warn!(error = %err, "input error");
                self.set_message(format!("ERR: {err}"));
            }
            InputEvent::Shutdown => self.running = false,
        }
    }

    /// New screen dimensions; the next frame clears and redraws everything.
    pub const fn handle_resize(&mut self, width: u16, height: u16) {
        self.screen_cols = width as usize;
        self.screen_rows = height as usize;
        self.pending_clear = true;
    }

    /// Dispatch one keystroke against the current mode.
    ///
    /// Failures from edit operations mean "ignore this keystroke": edge
    /// conditions silently, anything else with a trace.
    pub fn process_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        trace!(?code, ?modifiers, mode = ?self.mode, "key");

        // An armed quit confirmation consumes this key: repeat to quit,
        // anything else disarms and dispatches normally.
        if self.quit_pending {
            self.quit_pending = false;
            if Self::is_quit_key(code, modifiers) {
                self.running = false;
                return;
            }
            self.message.clear();
        }

        if Self::is_quit_key(code, modifiers) {
            self.request_quit();
            return;
        }
        if code == KeyCode::Char('s') && modifiers.control {
            self.save();
            return;
        }

        // Navigation behaves identically in both modes.
        match code {
            KeyCode::Left => return self.cursor.move_left(&self.buffer),
            KeyCode::Right => return self.cursor.move_right(&self.buffer),
            KeyCode::Up => return self.cursor.move_up(&self.buffer),
            KeyCode::Down => return self.cursor.move_down(&self.buffer),
            KeyCode::Home => return self.cursor.line_start(),
            KeyCode::End => return self.cursor.line_end(&self.buffer),
            KeyCode::PageUp => return self.page_up(),
            KeyCode::PageDown => return self.page_down(),
            KeyCode::Delete => return self.absorb(Self::delete_right, "delete"),
            _ => {}
        }

        match self.mode {
            Mode::Command => match code {
                KeyCode::Char('i') if !modifiers.any() => self.enter_insert_mode(),
                KeyCode::Char('I') => {
                    self.cursor.line_start();
                    self.enter_insert_mode();
                }
                KeyCode::Char('g') if !modifiers.any() => self.cursor.top(),
                KeyCode::Char('G') => self.cursor.bottom(&self.buffer),
                // Unrecognized keys in command mode are ignored.
                _ => {}
            },
            Mode::Insert => match code {
                KeyCode::Esc => self.leave_insert_mode(),
                KeyCode::Enter => self.absorb(Self::insert_newline, "newline"),
                KeyCode::Backspace => self.absorb(Self::backspace, "backspace"),
                KeyCode::Tab => self.absorb(|e| e.insert_char('\t'), "insert"),
                KeyCode::Char(c) if !modifiers.control && !modifiers.alt => {
                    self.absorb(|e| e.insert_char(c), "insert");
                }
                // Anything else outside the printable range is ignored.
                _ => {}
            },
        }
    }

    /// Insert a character at the cursor, creating a row on the virtual
    /// past-end line first.
    ///
    /// # Errors
    ///
    /// Cannot fail in practice; row creation propagates its bounds check.
    pub fn insert_char(&mut self, c: char) -> Result<()> {
        if self.cursor.line == self.buffer.len() {
            self.buffer.insert_row(self.cursor.line, "")?;
        }
        let col = self.cursor.col;
        self.current_row_mut()?.insert_char(col, c);
        self.cursor.col += c.len_utf8();
        self.buffer.mark_dirty();
        Ok(())
    }

    /// Break the current line at the cursor.
    ///
    /// At column 0 a fresh empty row is inserted above and the current row
    /// is untouched; otherwise the row is split at the cursor. Either way
    /// the cursor lands at the start of the next line.
    ///
    /// # Errors
    ///
    /// Propagates row-store bounds errors (none reachable from dispatch).
    pub fn insert_newline(&mut self) -> Result<()> {
        if self.cursor.col == 0 {
            self.buffer.insert_row(self.cursor.line, "")?;
        } else {
            let col = self.cursor.col;
            let tail = self.current_row_mut()?.split_off(col);
            self.buffer.insert_row(self.cursor.line + 1, tail)?;
        }
        self.cursor.line += 1;
        self.cursor.col = 0;
        Ok(())
    }

    /// Delete leftward: the char before the cursor, or at column 0 join the
    /// current row onto the previous one.
    ///
    /// # Errors
    ///
    /// [`EditError::AtBufferStart`] at `(0, 0)` and
    /// [`EditError::AtBufferEnd`] on the virtual row; both are silent
    /// no-ops to the dispatcher.
    pub fn backspace(&mut self) -> Result<()> {
        if self.cursor.line == self.buffer.len() {
            return Err(EditError::AtBufferEnd);
        }
        if self.cursor.line == 0 && self.cursor.col == 0 {
            return Err(EditError::AtBufferStart);
        }

        if self.cursor.col > 0 {
            let col = self.cursor.col;
            let row = self.current_row_mut()?;
            let prev = row.prev_char_start(col);
            row.delete_char(prev)?;
            self.cursor.col = prev;
            self.buffer.mark_dirty();
        } else {
            let removed = self.buffer.delete_row(self.cursor.line)?;
            self.cursor.line -= 1;
            let prev_len = self.buffer.row_len(self.cursor.line);
            self.current_row_mut()?.append_str(removed.raw());
            self.cursor.col = prev_len;
        }
        Ok(())
    }

    /// Delete the character under the cursor.
    ///
    /// Deliberately does not join rows at end-of-line (asymmetric with
    /// [`backspace`](Self::backspace)).
    ///
    /// # Errors
    ///
    /// [`EditError::AtBufferEnd`] at end-of-row or on the virtual row; a
    /// silent no-op to the dispatcher.
    pub fn delete_right(&mut self) -> Result<()> {
        let col = self.cursor.col;
        let row = self
            .buffer
            .row_mut(self.cursor.line)
            .ok_or(EditError::AtBufferEnd)?;
        if col >= row.len() {
            return Err(EditError::AtBufferEnd);
        }
        row.delete_char(col)?;
        self.buffer.mark_dirty();
        Ok(())
    }

    /// Write the buffer out, reporting the result on the status line.
    pub fn save(&mut self) {
        match self.buffer.save() {
            Ok((lines, bytes)) => {
                self.set_message(format!("{lines}L {bytes}B written out to disk"));
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.set_message(format!("ERR: {e}"));
            }
        }
    }

    /// Move the cursor one screenful up, re-anchored to the top of the
    /// window.
    fn page_up(&mut self) {
        self.cursor.line = self.viewport.row_offset;
        for _ in 0..self.text_height() {
            self.cursor.move_up(&self.buffer);
        }
    }

    /// Move the cursor one screenful down, re-anchored to the bottom of the
    /// window.
    fn page_down(&mut self) {
        self.cursor.line =
            (self.viewport.row_offset + self.text_height().saturating_sub(1)).min(self.buffer.len());
        for _ in 0..self.text_height() {
            self.cursor.move_down(&self.buffer);
        }
    }

    fn enter_insert_mode(&mut self) {
        debug!("enter insert mode");
        self.mode = Mode::Insert;
        self.set_message("-- INSERT --");
    }

    fn leave_insert_mode(&mut self) {
        debug!("leave insert mode");
        self.mode = Mode::Command;
        self.message.clear();
    }

    /// Quit immediately when clean; arm the confirmation when dirty.
    fn request_quit(&mut self) {
        if self.buffer.is_dirty() {
            self.quit_pending = true;
            self.set_message("Unsaved changes. Press Ctrl-Q again to quit.");
        } else {
            self.running = false;
        }
    }

    const fn is_quit_key(code: KeyCode, modifiers: KeyModifiers) -> bool {
        matches!(code, KeyCode::Char('q')) && modifiers.control
    }

    /// Run an edit operation, absorbing its failure per the dispatch
    /// contract.
    fn absorb(&mut self, op: impl FnOnce(&mut Self) -> Result<()>, what: &'static str) {
        match op(self) {
            Ok(()) | Err(EditError::AtBufferStart | EditError::AtBufferEnd) => {}
            Err(e) => trace!(error = %e, what, "keystroke rejected"),
        }
    }

    fn current_row_mut(&mut self) -> Result<&mut crate::buffer::Row> {
        let line = self.cursor.line;
        let rows = self.buffer.len();
        self.buffer
            .row_mut(line)
            .ok_or(EditError::RowOutOfRange { index: line, rows })
    }
}
