//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    pub ascii_only: bool,
    pub high_contrast: bool,
}

/// Cursor over a vertical option list.
///
/// The list length is supplied on every move; the cursor never stores it, so
/// it cannot go stale when the rendered view changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: usize,
}

impl Selection {
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }

    /// Index clamped to a list of `len` entries.
    #[must_use]
    pub fn clamped(self, len: usize) -> usize {
        self.index.min(len.saturating_sub(1))
    }

    pub fn up(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = if self.clamped(len) == 0 {
            len - 1
        } else {
            self.clamped(len) - 1
        };
    }

    pub fn down(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
            return;
        }
        self.index = (self.clamped(len) + 1) % len;
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::Selection;

    #[test]
    fn wraps_in_both_directions() {
        let mut sel = Selection::default();
        sel.up(3);
        assert_eq!(sel.index(), 2);
        sel.down(3);
        assert_eq!(sel.index(), 0);
        sel.down(3);
        assert_eq!(sel.index(), 1);
    }

    #[test]
    fn shrinking_list_clamps() {
        let mut sel = Selection::default();
        sel.down(5);
        sel.down(5);
        sel.down(5);
        assert_eq!(sel.clamped(2), 1);
        sel.down(2);
        assert_eq!(sel.index(), 0);
    }

    #[test]
    fn empty_list_pins_to_zero() {
        let mut sel = Selection::default();
        sel.down(0);
        assert_eq!(sel.index(), 0);
        sel.up(0);
        assert_eq!(sel.index(), 0);
    }
}
