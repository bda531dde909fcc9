//! # Quill
//!
//! A modal, terminal-resident plain-text editor.
//!
//! Quill keeps the whole file in memory as an ordered sequence of rows, each
//! owning its raw bytes and a tab-expanded rendered form, and projects that
//! buffer onto a bounded terminal viewport with offset-based scrolling.
//! Input is routed through a two-mode (command/insert) dispatcher; every
//! keystroke completes fully before the next frame is composed.
//!
//! ## Core Concepts
//!
//! - **Row store**: raw line bytes plus a derived rendered form, re-derived
//!   on every mutation
//! - **Just-enough scrolling**: viewport offsets move only when the cursor
//!   would fall outside the visible window
//! - **Modal dispatch**: command and insert modes share navigation, differ
//!   on everything else
//! - **Single-syscall frames**: each refresh is accumulated in an output
//!   buffer and flushed with one `write`
//!
//! ## Example
//!
//! ```rust,ignore
//! use quill::{Editor, EditorConfig};
//!
//! let mut editor = Editor::new(EditorConfig::default(), 80, 24);
//! editor.open("notes.txt")?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod config;
pub mod editor;
pub mod error;
pub mod input;
pub mod screen;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Row, TextBuffer, TAB_STOP};
pub use config::EditorConfig;
pub use editor::{Cursor, Editor, Mode, StatusMessage, Viewport};
pub use error::{EditError, Result};
pub use input::{InputEvent, InputReader, KeyCode, KeyModifiers};
pub use screen::Screen;
pub use terminal::{OutputBuffer, Rgb, Style, TerminalSession};
