//! Color and text-style primitives for frame composition.

use bitflags::bitflags;

/// True-color RGB representation.
///
/// Three bytes, 24-bit depth; emitted as SGR truecolor sequences by
/// [`OutputBuffer`](super::OutputBuffer).
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255, 255, 255);
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

bitflags! {
    /// Text style attributes.
    ///
    /// Combined with bitwise OR and emitted as a single SGR sequence.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Style: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Underlined text
        const UNDERLINE = 0b0000_0100;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0000_1000;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_debug_is_hex() {
        assert_eq!(format!("{:?}", Rgb::new(255, 0, 16)), "#ff0010");
    }

    #[test]
    fn test_style_combines() {
        let style = Style::BOLD | Style::DIM;
        assert!(style.contains(Style::BOLD));
        assert!(!style.contains(Style::REVERSED));
    }
}
