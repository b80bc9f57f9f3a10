//! Font-level metrics: width of the active glyph and the font height.

use gfe_engine::{MAX_FONT_HEIGHT, MAX_GLYPH_WIDTH, MIN_FONT_HEIGHT, MIN_GLYPH_WIDTH};

use super::FontEditState;

impl FontEditState {
    /// Make the active glyph one pixel wider (max 32). Returns the new width.
    pub fn grow_width(&mut self) -> u8 {
        self.resize_current_width(1)
    }

    /// Make the active glyph one pixel narrower (min 1). Returns the new width.
    pub fn shrink_width(&mut self) -> u8 {
        self.resize_current_width(-1)
    }

    /// Add a row to the font (max 32). Returns the new height.
    pub fn grow_height(&mut self) -> u8 {
        self.resize_height(1)
    }

    /// Remove a row from the font (min 1). Returns the new height.
    pub fn shrink_height(&mut self) -> u8 {
        self.resize_height(-1)
    }

    fn resize_current_width(&mut self, delta: i8) -> u8 {
        let glyph = self.font.glyph_mut(self.current_char);
        glyph.width = glyph.width.saturating_add_signed(delta).clamp(MIN_GLYPH_WIDTH, MAX_GLYPH_WIDTH);
        glyph.width
    }

    fn resize_height(&mut self, delta: i8) -> u8 {
        self.font.height = self.font.height.saturating_add_signed(delta).clamp(MIN_FONT_HEIGHT, MAX_FONT_HEIGHT);
        self.font.height
    }
}
