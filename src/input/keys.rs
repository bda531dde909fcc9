//! Key and event types consumed by the dispatcher.
//!
//! The dispatcher compares opaque keycodes against these constants; it never
//! sees crossterm types directly.

/// Key codes the dispatcher understands.
///
/// A simplified subset of crossterm's `KeyCode`; anything the editor does
/// not react to is filtered out before it reaches the channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A printable character.
    Char(char),
    /// Backspace key.
    Backspace,
    /// Enter/Return key.
    Enter,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Tab key.
    Tab,
    /// Delete key.
    Delete,
    /// Escape key.
    Esc,
}

/// Key modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeyModifiers {
    /// Shift key held.
    pub shift: bool,
    /// Control key held.
    pub control: bool,
    /// Alt/Option key held.
    pub alt: bool,
    /// Super/Command/Windows key held.
    pub super_key: bool,
}

impl KeyModifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        super_key: false,
    };

    /// Control only.
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        super_key: false,
    };

    /// Check if any modifier is active.
    pub const fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.super_key
    }
}

/// Events from the input thread.
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A key was pressed.
    Key {
        /// The key code.
        code: KeyCode,
        /// Modifiers held during the keypress.
        modifiers: KeyModifiers,
    },

    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },

    /// Input thread encountered an error.
    Error(String),

    /// Input thread is shutting down.
    Shutdown,
}
