//! Input module: the key source feeding the dispatcher.
//!
//! A dedicated reader thread polls terminal events and forwards them over a
//! bounded crossbeam channel:
//!
//! ```text
//! ┌──────────────┐     InputEvent      ┌──────────────┐
//! │ Input Thread │ ─────────────────▶  │  Main Loop   │
//! └──────────────┘   (bounded chan)    └──────────────┘
//! ```
//!
//! The main loop receives with a short timeout so the frame cycle keeps
//! ticking (status-message expiry) even without keystrokes. Everything the
//! dispatcher sees is an [`InputEvent`]; crossterm types stop at the reader.

mod keys;
mod reader;

pub use keys::{InputEvent, KeyCode, KeyModifiers};
pub use reader::InputReader;
