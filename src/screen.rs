//! Frame compositor: projects the editor onto the terminal.
//!
//! Each refresh builds the entire frame (visible rows, fringe or welcome
//! screen, status bar, message bar, final cursor placement) into an
//! [`OutputBuffer`] and flushes it in one syscall. Drawing never touches
//! editor state beyond consuming the pending-clear flag and recomputing the
//! frame-derived cursor/viewport values.

use std::io::{self, Write};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::editor::Editor;
use crate::terminal::{OutputBuffer, Rgb, Style};

/// Status bar background.
const BAR_BG: Rgb = Rgb::new(40, 40, 40);
/// Status bar foreground.
const BAR_FG: Rgb = Rgb::WHITE;

/// The frame compositor.
///
/// Stateless apart from the reused output buffer; all layout is derived
/// from the editor each frame.
#[derive(Default)]
pub struct Screen {
    out: OutputBuffer,
}

impl Screen {
    /// Create a compositor with a fresh output buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose and flush one frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the final flush to `writer` fails.
    pub fn refresh<W: Write>(&mut self, editor: &mut Editor, writer: &mut W) -> io::Result<()> {
        editor.prepare_frame();

        self.out.clear();
        self.out.cursor_hide();
        if editor.take_pending_clear() {
            self.out.clear_screen();
        }
        self.out.cursor_move(0, 0);

        self.draw_rows(editor);
        self.draw_status_bar(editor);
        self.draw_message_bar(editor);

        let cursor = editor.cursor();
        let viewport = editor.viewport();
        #[allow(clippy::cast_possible_truncation)]
        self.out.cursor_move(
            (cursor.render_col - viewport.col_offset) as u16,
            (cursor.line - viewport.row_offset) as u16,
        );
        self.out.cursor_show();

        self.out.flush_to(writer)
    }

    /// Draw the text area: visible rows, then fringe tildes (or the welcome
    /// banner on an empty buffer).
    fn draw_rows(&mut self, editor: &Editor) {
        let width = editor.width();
        let buffer = editor.buffer();
        let viewport = editor.viewport();

        for y in 0..editor.text_height() {
            let file_row = viewport.row_offset + y;
            if let Some(row) = buffer.row(file_row) {
                for c in row.rendered().chars().skip(viewport.col_offset).take(width) {
                    self.out.write_char(c);
                }
            } else if buffer.is_empty() && y == editor.text_height() / 3 {
                self.draw_welcome(width);
            } else {
                self.out.set_style(Style::DIM);
                self.out.write_str("~");
                self.out.reset_attrs();
            }
            self.out.clear_line();
            self.out.write_str("\r\n");
        }
    }

    /// Centered welcome banner with the fringe tilde when padding allows.
    fn draw_welcome(&mut self, width: usize) {
        let welcome = format!("Quill editor -- version {}", env!("CARGO_PKG_VERSION"));
        let welcome = clip(&welcome, width);

        let mut padding = width.saturating_sub(welcome.width()) / 2;
        if padding > 0 {
            self.out.set_style(Style::DIM);
            self.out.write_str("~");
            self.out.reset_attrs();
            padding -= 1;
        }
        for _ in 0..padding {
            self.out.write_char(' ');
        }
        self.out.write_str(welcome);
    }

    /// One colored line: file name and modified marker on the left, mode in
    /// the middle, cursor position on the right.
    fn draw_status_bar(&mut self, editor: &Editor) {
        let name = editor.buffer().path().and_then(|p| p.file_name()).map_or_else(
            || String::from("[No Name]"),
            |n| n.to_string_lossy().into_owned(),
        );
        let left = if editor.buffer().is_dirty() {
            format!("{name} (modified)")
        } else {
            name
        };
        let right = format!("{}/{}", editor.cursor().line + 1, editor.buffer().len());
        let bar = compose_bar(&left, editor.mode().as_str(), &right, editor.width());

        self.out.set_style(Style::BOLD);
        self.out.set_fg(BAR_FG);
        self.out.set_bg(BAR_BG);
        self.out.write_str(&bar);
        self.out.reset_attrs();
        self.out.write_str("\r\n");
    }

    /// The transient message line, blank once the message expires.
    fn draw_message_bar(&mut self, editor: &Editor) {
        self.out.clear_line();
        if let Some(msg) = editor.message() {
            self.out.write_str(clip(msg, editor.width()));
        }
    }
}

/// Lay out three sections on one line of exactly `width` columns.
///
/// The left section wins on narrow screens; center and right are dropped
/// whole when they no longer fit.
fn compose_bar(left: &str, center: &str, right: &str, width: usize) -> String {
    let left = clip(left, width);
    let mut bar = String::with_capacity(width + 8);
    bar.push_str(left);
    let mut col = left.width();

    let center_w = center.width();
    let right_w = right.width();
    let center_start = width.saturating_sub(center_w) / 2;
    if center_start >= col && center_start + center_w + right_w <= width {
        for _ in col..center_start {
            bar.push(' ');
        }
        bar.push_str(center);
        col = center_start + center_w;
    }
    if col + right_w <= width {
        for _ in col..width - right_w {
            bar.push(' ');
        }
        bar.push_str(right);
        col = width;
    }
    for _ in col..width {
        bar.push(' ');
    }
    bar
}

/// Truncate to at most `max` display columns, on a `char` boundary.
fn clip(s: &str, max: usize) -> &str {
    let mut w = 0;
    for (idx, c) in s.char_indices() {
        let cw = UnicodeWidthChar::width(c).unwrap_or(0);
        if w + cw > max {
            return &s[..idx];
        }
        w += cw;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;

    fn frame(editor: &mut Editor) -> Vec<u8> {
        let mut screen = Screen::new();
        let mut sink = Vec::new();
        screen.refresh(editor, &mut sink).unwrap();
        sink
    }

    #[test]
    fn test_compose_bar_layout() {
        let bar = compose_bar("file.txt", "COMMAND", "1/10", 30);
        assert_eq!(bar.width(), 30);
        assert!(bar.starts_with("file.txt"));
        assert!(bar.ends_with("1/10"));
        assert!(bar.contains("COMMAND"));
    }

    #[test]
    fn test_compose_bar_narrow_drops_sections() {
        let bar = compose_bar("a-rather-long-file-name.txt", "COMMAND", "1/1", 10);
        assert_eq!(bar.width(), 10);
        assert!(!bar.contains("COMMAND"));
    }

    #[test]
    fn test_clip_stops_at_width() {
        assert_eq!(clip("hello", 3), "hel");
        assert_eq!(clip("hello", 10), "hello");
    }

    #[test]
    fn test_frame_shows_welcome_on_empty_buffer() {
        let mut editor = Editor::new(EditorConfig::default(), 80, 24);
        let bytes = frame(&mut editor);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Quill editor"));
        assert!(text.contains('~'));
    }

    #[test]
    fn test_frame_shows_rows_and_status() {
        let mut editor = Editor::new(EditorConfig::default(), 80, 24);
        for c in "alpha".chars() {
            editor.insert_char(c).unwrap();
        }
        editor.insert_newline().unwrap();
        for c in "beta".chars() {
            editor.insert_char(c).unwrap();
        }

        let bytes = frame(&mut editor);
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("alpha"));
        assert!(text.contains("beta"));
        assert!(text.contains("(modified)"));
        assert!(text.contains("COMMAND"));
        assert!(text.contains("2/2"));
    }
}
