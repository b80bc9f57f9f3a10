//! Single glyph operations: pixel editing and the row transforms.
//!
//! All of these work on the scratch rows of the active glyph, except for a
//! marked [`FontEditState::invert`] which works on the stored font.

use gfe_engine::{GLYPH_ROWS, LEFTMOST_PIXEL};

use super::FontEditState;

/// Leftmost two pixel block, shifted right by `2 * j` to double pixel `j`
const DOUBLE_PIXEL: u32 = 0xC000_0000;

impl FontEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Pixel Editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Get a pixel of the active glyph. Outside the 32×32 grid is off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        match grid_index(x, y) {
            Some((x, y)) => self.scratch[y] & (LEFTMOST_PIXEL >> x) != 0,
            None => false,
        }
    }

    /// Set a pixel of the active glyph. Outside the 32×32 grid is ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: bool) {
        let Some((x, y)) = grid_index(x, y) else {
            return;
        };
        let bit = LEFTMOST_PIXEL >> x;
        if value {
            self.scratch[y] |= bit;
        } else {
            self.scratch[y] &= !bit;
        }
    }

    /// Toggle the pixel under the cursor.
    pub fn toggle_pixel(&mut self) {
        let (x, y) = self.cursor_pos;
        self.set_pixel(x, y, !self.pixel(x, y));
    }

    /// Move the cursor to a grid cell and toggle it (pointer click).
    pub fn click(&mut self, x: i32, y: i32) {
        self.set_cursor(x, y);
        self.toggle_pixel();
    }

    /// Clear all 32 rows of the active glyph.
    pub fn clear_glyph(&mut self) {
        self.scratch = [0; GLYPH_ROWS];
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Transforms
    // ═══════════════════════════════════════════════════════════════════════

    /// Rotate every row one bit to the left, bit 31 wraps to bit 0.
    pub fn rotate_left(&mut self) {
        for row in &mut self.scratch {
            *row = row.rotate_left(1);
        }
    }

    /// Rotate every row one bit to the right, bit 0 wraps to bit 31.
    pub fn rotate_right(&mut self) {
        for row in &mut self.scratch {
            *row = row.rotate_right(1);
        }
    }

    /// Move all rows up by one; row 0 becomes row 31.
    pub fn shift_up(&mut self) {
        self.scratch.rotate_left(1);
    }

    /// Move all rows down by one; row 31 becomes row 0.
    pub fn shift_down(&mut self) {
        self.scratch.rotate_right(1);
    }

    /// Scale the top left 16×16 pixels up to 32×32.
    ///
    /// Works from row 15 upwards so no source row is overwritten before it
    /// has been read.
    pub fn double_glyph(&mut self) {
        for i in (0..GLYPH_ROWS / 2).rev() {
            let source = self.scratch[i];
            let mut doubled = 0u32;
            for j in 0..16 {
                if source & (LEFTMOST_PIXEL >> j) != 0 {
                    doubled |= DOUBLE_PIXEL >> (2 * j);
                }
            }
            self.scratch[2 * i] = doubled;
            self.scratch[2 * i + 1] = doubled;
        }
    }

    /// Invert all 32 × 32 bits.
    ///
    /// Without a mark only the active glyph is inverted. With a mark every
    /// glyph between the mark and the active glyph (inclusive) is inverted in
    /// the font and the mark is cleared.
    ///
    /// Returns the number of inverted glyphs.
    pub fn invert(&mut self) -> usize {
        let Some((first, last)) = self.marked_range() else {
            for row in &mut self.scratch {
                *row ^= u32::MAX;
            }
            return 1;
        };

        self.commit();
        for code in first..=last {
            for row in &mut self.font.glyph_mut(code).rows {
                *row ^= u32::MAX;
            }
        }
        self.reload_scratch();
        self.mark = None;
        (last - first) as usize + 1
    }
}

fn grid_index(x: i32, y: i32) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok().filter(|&x| x < GLYPH_ROWS)?;
    let y = usize::try_from(y).ok().filter(|&y| y < GLYPH_ROWS)?;
    Some((x, y))
}
