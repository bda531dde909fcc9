//! Error types shared across the editor.
//!
//! Edit operations report failure instead of panicking; the dispatcher maps
//! any error to "ignore this keystroke". Edge conditions (`AtBufferStart`,
//! `AtBufferEnd`) are absorbed silently, I/O failures surface on the status
//! line.

use thiserror::Error;

/// Errors produced by buffer and editor operations.
#[derive(Debug, Error)]
pub enum EditError {
    /// A row index fell outside the dense `0..n_rows` range.
    #[error("row {index} out of range ({rows} rows)")]
    RowOutOfRange {
        /// The offending row index.
        index: usize,
        /// Number of rows in the buffer at the time of the call.
        rows: usize,
    },

    /// A column offset fell outside a row, or off a character boundary.
    #[error("column {col} out of range (row length {len})")]
    ColumnOutOfRange {
        /// The offending byte offset.
        col: usize,
        /// Length of the row in bytes.
        len: usize,
    },

    /// Backspace at the very start of the buffer.
    #[error("already at start of buffer")]
    AtBufferStart,

    /// Delete past the end of a row, or an edit on the virtual past-end row.
    #[error("already at end of row")]
    AtBufferEnd,

    /// Save requested on a buffer with no backing path.
    #[error("no file name")]
    NoFileName,

    /// Underlying I/O failure during load or save.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EditError>;
