//! Cursor movement and glyph navigation
//!
//! The edit grid always spans the full 32×32 cell, independent of the
//! glyph width and font height, so pixels outside the rendered area can be
//! edited as well.

use super::{FontEditState, GRID_SIZE};

impl FontEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Edit Grid Cursor
    // ═══════════════════════════════════════════════════════════════════════

    /// Get cursor position in edit grid
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor_pos
    }

    /// Set cursor position in edit grid (clamps to 0..32)
    pub fn set_cursor(&mut self, x: i32, y: i32) {
        self.cursor_pos = (x.clamp(0, GRID_SIZE - 1), y.clamp(0, GRID_SIZE - 1));
    }

    /// Move cursor by delta, X and Y wrap independently at 32.
    pub fn move_cursor(&mut self, dx: i32, dy: i32) {
        let (x, y) = self.cursor_pos;
        self.cursor_pos = ((x + dx).rem_euclid(GRID_SIZE), (y + dy).rem_euclid(GRID_SIZE));
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Active Glyph
    // ═══════════════════════════════════════════════════════════════════════

    /// Commit the scratch and make `ch` the active glyph.
    pub fn change_to(&mut self, ch: u8) {
        self.commit();
        self.current_char = ch;
        self.reload_scratch();
    }

    pub fn next_char(&mut self) {
        self.change_to(self.current_char.wrapping_add(1));
    }

    pub fn prev_char(&mut self) {
        self.change_to(self.current_char.wrapping_sub(1));
    }
}
