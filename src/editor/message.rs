//! Transient status messages.

use std::time::{Duration, Instant};

/// Maximum stored message length in bytes; longer text is truncated on set.
pub const MESSAGE_CAPACITY: usize = 96;

/// A bounded, time-stamped status message.
///
/// Setting a message records the current instant; the compositor shows it
/// only while younger than the configured TTL. Truncation to
/// [`MESSAGE_CAPACITY`] is part of the contract, not an error.
#[derive(Debug, Default)]
pub struct StatusMessage {
    text: String,
    set_at: Option<Instant>,
}

impl StatusMessage {
    /// Create an empty message slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the message, truncating to capacity on a `char` boundary.
    pub fn set(&mut self, text: impl Into<String>) {
        let mut text = text.into();
        if text.len() > MESSAGE_CAPACITY {
            let mut end = MESSAGE_CAPACITY;
            while !text.is_char_boundary(end) {
                end -= 1;
            }
            text.truncate(end);
        }
        self.text = text;
        self.set_at = Some(Instant::now());
    }

    /// Drop the message immediately.
    pub fn clear(&mut self) {
        self.text.clear();
        self.set_at = None;
    }

    /// The message, if one is set and still younger than `ttl`.
    pub fn current(&self, ttl: Duration) -> Option<&str> {
        let set_at = self.set_at?;
        if self.text.is_empty() || set_at.elapsed() > ttl {
            return None;
        }
        Some(&self.text)
    }
}
