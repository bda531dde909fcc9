//! `TextBuffer`: the ordered collection of rows for one open file.
//!
//! Indices are dense `0..n`; a buffer with zero rows is the valid empty-file
//! state (the compositor shows the welcome screen instead of rows). The
//! buffer also owns the dirty flag and the optional backing path.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::row::Row;
use crate::error::{EditError, Result};

/// The ordered sequence of rows for the currently open file.
#[derive(Debug, Default)]
pub struct TextBuffer {
    /// Rows in line order; index = line number.
    rows: Vec<Row>,
    /// Backing file, if any.
    path: Option<PathBuf>,
    /// Unsaved mutations exist since the last successful save.
    dirty: bool,
}

impl TextBuffer {
    /// Create an empty buffer with no backing file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a buffer from already-split lines. Leaves the buffer clean.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: lines.into_iter().map(Row::new).collect(),
            path: None,
            dirty: false,
        }
    }

    /// Load a buffer from a file, stripping trailing CR/LF from each line.
    ///
    /// A nonexistent path yields an empty buffer bound to that path, so a
    /// new file can be created by saving.
    ///
    /// # Errors
    ///
    /// Returns any I/O failure other than the file not existing.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let rows = match File::open(&path) {
            Ok(file) => {
                let mut rows = Vec::new();
                for line in BufReader::new(file).lines() {
                    let line = line?;
                    rows.push(Row::new(line.trim_end_matches(['\n', '\r'])));
                }
                rows
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), rows = rows.len(), "loaded buffer");
        Ok(Self {
            rows,
            path: Some(path),
            dirty: false,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check for the empty-file state.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by line number.
    #[inline]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a mutable row by line number.
    ///
    /// Callers that mutate through this handle must also call
    /// [`mark_dirty`](Self::mark_dirty).
    #[inline]
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Byte length of a row; 0 for the virtual past-end row.
    #[inline]
    pub fn row_len(&self, index: usize) -> usize {
        self.rows.get(index).map_or(0, Row::len)
    }

    /// Insert a new row, shifting later rows down.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::RowOutOfRange`] unless `0 <= index <= n_rows`.
    pub fn insert_row(&mut self, index: usize, text: impl Into<String>) -> Result<usize> {
        if index > self.rows.len() {
            return Err(EditError::RowOutOfRange {
                index,
                rows: self.rows.len(),
            });
        }
        self.rows.insert(index, Row::new(text));
        self.dirty = true;
        Ok(self.rows.len())
    }

    /// Remove a row, shifting later rows up, and return it.
    ///
    /// The removed row is handed back because the backspace join needs its
    /// raw bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::RowOutOfRange`] unless `0 <= index < n_rows`.
    pub fn delete_row(&mut self, index: usize) -> Result<Row> {
        if index >= self.rows.len() {
            return Err(EditError::RowOutOfRange {
                index,
                rows: self.rows.len(),
            });
        }
        let row = self.rows.remove(index);
        self.dirty = true;
        Ok(row)
    }

    /// Whether unsaved mutations exist.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flag the buffer as holding unsaved mutations.
    ///
    /// Only a successful [`save`](Self::save) (or a fresh load) clears it.
    #[inline]
    pub const fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// The backing file path, if any.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Serialize every row followed by a single `\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|r| r.len() + 1).sum();
        let mut bytes = Vec::with_capacity(total);
        for row in &self.rows {
            bytes.extend_from_slice(row.raw().as_bytes());
            bytes.push(b'\n');
        }
        bytes
    }

    /// Write the whole buffer to its backing file.
    ///
    /// Success clears the dirty flag and reports `(lines, bytes)` for the
    /// status line; failure leaves the flag set.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::NoFileName`] without a backing path, or the
    /// underlying I/O failure.
    pub fn save(&mut self) -> Result<(usize, usize)> {
        let path = self.path.as_ref().ok_or(EditError::NoFileName)?;
        let bytes = self.to_bytes();
        std::fs::write(path, &bytes)?;
        self.dirty = false;
        debug!(path = %path.display(), bytes = bytes.len(), "saved buffer");
        Ok((self.rows.len(), bytes.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_starts_empty_and_clean() {
        let buffer = TextBuffer::new();
        assert!(buffer.is_empty());
        assert!(!buffer.is_dirty());
        assert_eq!(buffer.row_len(0), 0);
    }

    #[test]
    fn test_buffer_from_lines() {
        let buffer = TextBuffer::from_lines(["ab", "cd"]);
        assert_eq!(buffer.len(), 2);
        assert_eq!(buffer.row(1).unwrap().raw(), "cd");
        assert!(!buffer.is_dirty());
    }

    #[test]
    fn test_buffer_insert_row_bounds() {
        let mut buffer = TextBuffer::from_lines(["x"]);
        assert_eq!(buffer.insert_row(1, "y").unwrap(), 2);
        assert!(matches!(
            buffer.insert_row(5, "z"),
            Err(EditError::RowOutOfRange { index: 5, rows: 2 })
        ));
    }

    #[test]
    fn test_buffer_delete_row_bounds() {
        let mut buffer = TextBuffer::from_lines(["a", "b"]);
        let removed = buffer.delete_row(0).unwrap();
        assert_eq!(removed.raw(), "a");
        assert_eq!(buffer.len(), 1);
        assert!(matches!(
            buffer.delete_row(1),
            Err(EditError::RowOutOfRange { index: 1, rows: 1 })
        ));
    }

    #[test]
    fn test_buffer_dirty_lifecycle() {
        let mut buffer = TextBuffer::from_lines(["a"]);
        assert!(!buffer.is_dirty());
        buffer.insert_row(1, "b").unwrap();
        assert!(buffer.is_dirty());
    }

    #[test]
    fn test_buffer_to_bytes() {
        let buffer = TextBuffer::from_lines(["ab", "", "c"]);
        assert_eq!(buffer.to_bytes(), b"ab\n\nc\n");
    }

    #[test]
    fn test_buffer_save_without_path() {
        let mut buffer = TextBuffer::from_lines(["x"]);
        assert!(matches!(buffer.save(), Err(EditError::NoFileName)));
    }

    #[test]
    fn test_buffer_open_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "one\ttab\r\ntwo\nthree\n").unwrap();

        let mut buffer = TextBuffer::open(&path).unwrap();
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.row(0).unwrap().raw(), "one\ttab");
        assert!(!buffer.is_dirty());

        buffer.mark_dirty();
        let (lines, bytes) = buffer.save().unwrap();
        assert_eq!(lines, 3);
        assert!(!buffer.is_dirty());
        assert_eq!(std::fs::read(&path).unwrap().len(), bytes);
        assert_eq!(std::fs::read(&path).unwrap(), b"one\ttab\ntwo\nthree\n");
    }

    #[test]
    fn test_buffer_open_missing_file_binds_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("new.txt");

        let mut buffer = TextBuffer::open(&path).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.path(), Some(path.as_path()));

        buffer.insert_row(0, "fresh").unwrap();
        buffer.save().unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"fresh\n");
    }
}
