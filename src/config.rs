//! Editor configuration.

use std::time::Duration;

/// Configuration for an [`Editor`](crate::Editor) instance.
///
/// The defaults reproduce the editor's historical behavior: a 100 ms input
/// timeout (so the frame loop can expire stale messages without a
/// keystroke) and a five-second status-message lifetime.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// How long the input thread waits for a terminal event, and how long
    /// the main loop blocks on the channel before redrawing anyway.
    pub input_poll_timeout: Duration,
    /// How long a transient status message stays visible.
    pub message_ttl: Duration,
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            input_poll_timeout: Duration::from_millis(100),
            message_ttl: Duration::from_secs(5),
            alternate_screen: true,
        }
    }
}
