//! Cursor navigation over the buffer.
//!
//! All moves are pure position updates: infallible, allocation-free, and
//! idempotent at the buffer edges. Vertical moves clamp the column to the
//! destination row (rows are not fixed-width), snapping down to a `char`
//! boundary. `line == n_rows` is the virtual past-end row, valid only as an
//! insertion point; the column is forced to 0 there.

use crate::buffer::TextBuffer;

/// The logical cursor, in raw-byte coordinates of the current row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Line number, `0..=n_rows`.
    pub line: usize,
    /// Byte offset into the current row, always on a `char` boundary.
    pub col: usize,
    /// Display column of `col` after tab expansion; recomputed every frame.
    pub render_col: usize,
}

impl Cursor {
    /// Cursor at the origin.
    pub const fn new() -> Self {
        Self {
            line: 0,
            col: 0,
            render_col: 0,
        }
    }

    /// Move one column left; at column 0, wrap to the end of the previous
    /// row.
    pub fn move_left(&mut self, buffer: &TextBuffer) {
        if self.col > 0 {
            self.col = buffer
                .row(self.line)
                .map_or(0, |row| row.prev_char_start(self.col));
        } else if self.line > 0 {
            self.line -= 1;
            self.col = buffer.row_len(self.line);
        }
        self.snap_to_row(buffer);
    }

    /// Move one column right; at the end of a row, wrap to the start of the
    /// next.
    pub fn move_right(&mut self, buffer: &TextBuffer) {
        if let Some(row) = buffer.row(self.line) {
            if self.col < row.len() {
                self.col = row.next_char_end(self.col);
            } else {
                self.line += 1;
                self.col = 0;
            }
        }
        self.snap_to_row(buffer);
    }

    /// Move one line up, clamping the column to the new row.
    pub fn move_up(&mut self, buffer: &TextBuffer) {
        if self.line > 0 {
            self.line -= 1;
        }
        self.snap_to_row(buffer);
    }

    /// Move one line down, clamping the column to the new row.
    ///
    /// The cursor may land on the virtual past-end row.
    pub fn move_down(&mut self, buffer: &TextBuffer) {
        if self.line < buffer.len() {
            self.line += 1;
        }
        self.snap_to_row(buffer);
    }

    /// Jump to the start of the current line.
    pub const fn line_start(&mut self) {
        self.col = 0;
    }

    /// Jump to the end of the current line.
    pub fn line_end(&mut self, buffer: &TextBuffer) {
        if self.line < buffer.len() {
            self.col = buffer.row_len(self.line);
        }
    }

    /// Jump to the top of the buffer.
    pub const fn top(&mut self) {
        self.line = 0;
        self.col = 0;
    }

    /// Jump to the start of the last row.
    pub fn bottom(&mut self, buffer: &TextBuffer) {
        self.line = buffer.len().saturating_sub(1);
        self.col = 0;
    }

    /// Clamp the column into the current row.
    fn snap_to_row(&mut self, buffer: &TextBuffer) {
        self.col = buffer
            .row(self.line)
            .map_or(0, |row| row.clamp_col(self.col));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer() -> TextBuffer {
        TextBuffer::from_lines(["hello", "hi", "longer line"])
    }

    #[test]
    fn test_cursor_left_wraps_to_previous_row_end() {
        let buf = buffer();
        let mut cursor = Cursor {
            line: 1,
            col: 0,
            render_col: 0,
        };
        cursor.move_left(&buf);
        assert_eq!((cursor.line, cursor.col), (0, 5));
    }

    #[test]
    fn test_cursor_left_idempotent_at_origin() {
        let buf = buffer();
        let mut cursor = Cursor::new();
        cursor.move_left(&buf);
        assert_eq!((cursor.line, cursor.col), (0, 0));
    }

    #[test]
    fn test_cursor_right_wraps_to_next_row_start() {
        let buf = buffer();
        let mut cursor = Cursor {
            line: 0,
            col: 5,
            render_col: 0,
        };
        cursor.move_right(&buf);
        assert_eq!((cursor.line, cursor.col), (1, 0));
    }

    #[test]
    fn test_cursor_right_stops_on_virtual_row() {
        let buf = buffer();
        let mut cursor = Cursor {
            line: 3,
            col: 0,
            render_col: 0,
        };
        cursor.move_right(&buf);
        assert_eq!((cursor.line, cursor.col), (3, 0));
    }

    #[test]
    fn test_cursor_vertical_clamps_column() {
        let buf = buffer();
        let mut cursor = Cursor {
            line: 0,
            col: 5,
            render_col: 0,
        };
        cursor.move_down(&buf);
        // "hi" is shorter; the column snaps back.
        assert_eq!((cursor.line, cursor.col), (1, 2));
        cursor.move_down(&buf);
        assert_eq!((cursor.line, cursor.col), (2, 2));
    }

    #[test]
    fn test_cursor_down_allows_virtual_row() {
        let buf = buffer();
        let mut cursor = Cursor {
            line: 2,
            col: 4,
            render_col: 0,
        };
        cursor.move_down(&buf);
        assert_eq!((cursor.line, cursor.col), (3, 0));
        cursor.move_down(&buf);
        assert_eq!((cursor.line, cursor.col), (3, 0));
    }

    #[test]
    fn test_cursor_line_end_on_virtual_row_is_noop() {
        let buf = buffer();
        let mut cursor = Cursor {
            line: 3,
            col: 0,
            render_col: 0,
        };
        cursor.line_end(&buf);
        assert_eq!(cursor.col, 0);
    }

    #[test]
    fn test_cursor_top_bottom() {
        let buf = buffer();
        let mut cursor = Cursor {
            line: 1,
            col: 2,
            render_col: 0,
        };
        cursor.bottom(&buf);
        assert_eq!((cursor.line, cursor.col), (2, 0));
        cursor.top();
        assert_eq!((cursor.line, cursor.col), (0, 0));
    }

    #[test]
    fn test_cursor_bottom_of_empty_buffer() {
        let buf = TextBuffer::new();
        let mut cursor = Cursor::new();
        cursor.bottom(&buf);
        assert_eq!((cursor.line, cursor.col), (0, 0));
    }

    #[test]
    fn test_cursor_bounds_invariant_under_random_walk() {
        let buf = buffer();
        let mut cursor = Cursor::new();
        let moves: [fn(&mut Cursor, &TextBuffer); 4] = [
            Cursor::move_left,
            Cursor::move_right,
            Cursor::move_up,
            Cursor::move_down,
        ];
        // Deterministic walk hitting every edge.
        for i in 0..200 {
            moves[(i * 7 + i / 3) % 4](&mut cursor, &buf);
            assert!(cursor.line <= buf.len());
            assert!(cursor.col <= buf.row_len(cursor.line));
        }
    }
}
