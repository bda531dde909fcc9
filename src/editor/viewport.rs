//! Viewport: the visible window into the buffer.

/// Top-left buffer coordinate currently visible.
///
/// Offsets follow a minimal-adjustment policy: they move only when the
/// cursor would otherwise fall outside the visible window, never to center
/// it. The vertical axis tracks the cursor line, the horizontal axis the
/// rendered (tab-expanded) column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First visible line.
    pub row_offset: usize,
    /// First visible rendered column.
    pub col_offset: usize,
}

impl Viewport {
    /// Viewport at the origin.
    pub const fn new() -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// Pull the offsets just far enough to keep the cursor visible.
    ///
    /// After this call, `row_offset <= line < row_offset + height` and
    /// `col_offset <= render_col < col_offset + width` hold for any prior
    /// offsets (given nonzero dimensions).
    pub const fn scroll(&mut self, line: usize, render_col: usize, width: usize, height: usize) {
        if line < self.row_offset {
            self.row_offset = line;
        }
        if line >= self.row_offset + height {
            self.row_offset = line + 1 - height;
        }
        if render_col < self.col_offset {
            self.col_offset = render_col;
        }
        if render_col >= self.col_offset + width {
            self.col_offset = render_col + 1 - width;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_no_move_when_visible() {
        let mut vp = Viewport {
            row_offset: 10,
            col_offset: 5,
        };
        vp.scroll(12, 7, 80, 24);
        assert_eq!(vp, Viewport {
            row_offset: 10,
            col_offset: 5
        });
    }

    #[test]
    fn test_viewport_scrolls_up_and_left() {
        let mut vp = Viewport {
            row_offset: 10,
            col_offset: 5,
        };
        vp.scroll(3, 2, 80, 24);
        assert_eq!(vp, Viewport {
            row_offset: 3,
            col_offset: 2
        });
    }

    #[test]
    fn test_viewport_scrolls_down_just_enough() {
        let mut vp = Viewport::new();
        vp.scroll(30, 0, 80, 24);
        assert_eq!(vp.row_offset, 30 - 24 + 1);
    }

    #[test]
    fn test_viewport_window_invariant() {
        let (width, height) = (40, 12);
        for prior in [0usize, 3, 17, 100] {
            for line in 0..150 {
                for render_col in [0usize, 1, 39, 40, 80] {
                    let mut vp = Viewport {
                        row_offset: prior,
                        col_offset: prior,
                    };
                    vp.scroll(line, render_col, width, height);
                    assert!(vp.row_offset <= line && line < vp.row_offset + height);
                    assert!(vp.col_offset <= render_col && render_col < vp.col_offset + width);
                }
            }
        }
    }
}
