//! Editor modes.

/// Keystroke interpretation mode.
///
/// Exactly one mode is active at any time and transitions are explicit:
/// `i`/`I` enter [`Insert`](Mode::Insert), `Esc` returns to
/// [`Command`](Mode::Command). Navigation keys behave identically in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Navigation and command-key interpretation.
    #[default]
    Command,
    /// Literal character insertion.
    Insert,
}

impl Mode {
    /// Status-bar label for the mode.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Command => "COMMAND",
            Self::Insert => "INSERT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_labels() {
        assert_eq!(Mode::Command.as_str(), "COMMAND");
        assert_eq!(Mode::Insert.as_str(), "INSERT");
    }

    #[test]
    fn test_mode_default_is_command() {
        assert_eq!(Mode::default(), Mode::Command);
    }
}
