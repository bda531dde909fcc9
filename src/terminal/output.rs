//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use super::style::{Rgb, Style};
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// The whole frame is accumulated here, then flushed in a single `write()`
/// syscall to prevent terminal flickering.
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for a typical terminal (4KB).
    pub fn new() -> Self {
        Self::with_capacity(4096)
    }

    /// Clear the buffer for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data
            .extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    pub fn cursor_move(&mut self, x: u16, y: u16) {
        // CSI row ; col H
        write!(self.data, "\x1b[{};{}H", y + 1, x + 1).unwrap();
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set foreground color (true color).
    #[inline]
    pub fn set_fg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Set background color (true color).
    #[inline]
    pub fn set_bg(&mut self, color: Rgb) {
        write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b).unwrap();
    }

    /// Set text style attributes as one SGR sequence.
    pub fn set_style(&mut self, style: Style) {
        for (flag, code) in [
            (Style::BOLD, b'1'),
            (Style::DIM, b'2'),
            (Style::UNDERLINE, b'4'),
            (Style::REVERSED, b'7'),
        ] {
            if style.contains(flag) {
                self.data.extend_from_slice(b"\x1b[");
                self.data.push(code);
                self.data.push(b'm');
            }
        }
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Clear from the cursor to the end of the line.
    #[inline]
    pub fn clear_line(&mut self) {
        self.data.extend_from_slice(b"\x1b[K");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_cursor_move_is_one_indexed() {
        let mut out = OutputBuffer::new();
        out.cursor_move(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H");
    }

    #[test]
    fn test_output_style_sequences() {
        let mut out = OutputBuffer::new();
        out.set_style(Style::BOLD | Style::REVERSED);
        assert_eq!(out.as_bytes(), b"\x1b[1m\x1b[7m");
    }

    #[test]
    fn test_output_flush_round_trip() {
        let mut out = OutputBuffer::new();
        out.write_str("hi");
        out.write_char('!');
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"hi!");
    }
}
