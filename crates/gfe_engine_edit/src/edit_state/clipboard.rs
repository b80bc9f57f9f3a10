//! Mark, copy and paste of glyph ranges.
//!
//! The mark is the second end of an inclusive code point range, the active
//! glyph being the other end. The clipboard holds the raw row masks of the
//! copied range; widths are not part of it.

use super::FontEditState;

impl FontEditState {
    /// Place the mark on the active glyph.
    pub fn set_mark(&mut self) {
        self.mark = Some(self.current_char);
    }

    /// Set or clear the mark directly (used when restoring a session).
    pub fn restore_mark(&mut self, mark: Option<u8>) {
        self.mark = mark;
    }

    /// Inclusive range between the mark and the active glyph.
    pub fn marked_range(&self) -> Option<(u8, u8)> {
        self.mark
            .map(|mark| (mark.min(self.current_char), mark.max(self.current_char)))
    }

    /// Copy the marked range (or only the active glyph) to the clipboard.
    ///
    /// Replaces the previous clipboard and clears the mark. Returns the number
    /// of copied glyphs.
    pub fn copy(&mut self) -> usize {
        self.commit();
        let (first, last) = self.marked_range().unwrap_or((self.current_char, self.current_char));
        self.clipboard = (first..=last).map(|code| self.font.glyph(code).rows).collect();
        self.mark = None;
        self.clipboard.len()
    }

    /// Paste the clipboard starting at the active glyph.
    ///
    /// Code points wrap around after 255. Only row masks are written, widths
    /// stay as they are. Returns the number of pasted glyphs.
    pub fn paste(&mut self) -> usize {
        self.commit();
        let mut code = self.current_char;
        for rows in &self.clipboard {
            self.font.glyph_mut(code).rows = *rows;
            code = code.wrapping_add(1);
        }
        self.reload_scratch();
        self.clipboard.len()
    }

    /// Replace the clipboard directly (used when restoring a session).
    pub fn set_clipboard(&mut self, clipboard: Vec<gfe_engine::GlyphRows>) {
        self.clipboard = clipboard;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_without_mark_takes_active_glyph() {
        let mut state = FontEditState::new();
        state.set_pixel(3, 3, true);
        assert_eq!(state.copy(), 1);
        assert_eq!(state.clipboard()[0][3], 0x1000_0000);
        assert_eq!(state.mark(), None);
    }

    #[test]
    fn test_paste_wraps_around() {
        let mut state = FontEditState::new();
        state.change_to(254);
        state.set_mark();
        state.change_to(255);
        state.set_pixel(0, 0, true);
        assert_eq!(state.copy(), 2);

        state.change_to(255);
        assert_eq!(state.paste(), 2);
        assert_eq!(state.font().glyph(0).rows[0], 0x8000_0000);
        assert_eq!(state.glyph_rows(255)[0], 0);
    }

    #[test]
    fn test_paste_keeps_widths() {
        let mut state = FontEditState::new();
        state.grow_width();
        state.set_pixel(0, 0, true);
        state.copy();
        state.change_to(b'Z');
        state.paste();
        assert_eq!(state.current_width(), 8);
        assert!(state.pixel(0, 0));
    }
}
