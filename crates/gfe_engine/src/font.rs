//! Glyph store for bitmap fonts up to 32x32 pixels.
//!
//! Each glyph keeps all 32 row masks regardless of the font height, and every
//! row mask keeps all 32 bits regardless of the glyph width. Bit 31 is the
//! leftmost pixel of a row. Rows beyond the height and bits beyond the width
//! are not rendered but are persisted unchanged.

/// Number of glyphs in a font (code points 0-255)
pub const GLYPH_COUNT: usize = 256;

/// Number of row masks stored per glyph
pub const GLYPH_ROWS: usize = 32;

/// Maximum glyph width in pixels (one 32-bit row mask)
pub const MAX_GLYPH_WIDTH: u8 = 32;

/// Minimum glyph width in pixels
pub const MIN_GLYPH_WIDTH: u8 = 1;

/// Maximum font height (rows per glyph)
pub const MAX_FONT_HEIGHT: u8 = 32;

/// Minimum font height (rows per glyph)
pub const MIN_FONT_HEIGHT: u8 = 1;

/// Height of a freshly created font
pub const DEFAULT_FONT_HEIGHT: u8 = 16;

/// Glyph width of a freshly created font
pub const DEFAULT_GLYPH_WIDTH: u8 = 8;

/// Row mask bit of the leftmost pixel
pub const LEFTMOST_PIXEL: u32 = 0x8000_0000;

/// Raw row masks of a single glyph
pub type GlyphRows = [u32; GLYPH_ROWS];

/// A single glyph: 32 row masks plus the rendered width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// Row masks, top to bottom. Bit 31 = leftmost pixel.
    pub rows: GlyphRows,
    /// Pixels rendered from each row mask, left-justified from bit 31 (1-32)
    pub width: u8,
}

impl Default for Glyph {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Glyph {
    /// A blank glyph with the default width
    pub const EMPTY: Self = Self {
        rows: [0; GLYPH_ROWS],
        width: DEFAULT_GLYPH_WIDTH,
    };

    /// Create a blank glyph with the given width.
    #[inline]
    pub const fn new(width: u8) -> Self {
        Self { rows: [0; GLYPH_ROWS], width }
    }

    /// Create a glyph from row masks. Missing rows are zero, extra rows are dropped.
    pub fn from_rows(width: u8, rows: &[u32]) -> Self {
        let mut data = [0u32; GLYPH_ROWS];
        let copy_len = rows.len().min(GLYPH_ROWS);
        data[..copy_len].copy_from_slice(&rows[..copy_len]);
        Self { rows: data, width }
    }

    /// Get a pixel value. Coordinates outside the 32x32 cell are always off.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        if x >= GLYPH_ROWS || y >= GLYPH_ROWS {
            return false;
        }
        self.rows[y] & (LEFTMOST_PIXEL >> x) != 0
    }

    /// Set a pixel value. Does nothing outside the 32x32 cell.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, value: bool) {
        if x >= GLYPH_ROWS || y >= GLYPH_ROWS {
            return;
        }
        let bit = LEFTMOST_PIXEL >> x;
        if value {
            self.rows[y] |= bit;
        } else {
            self.rows[y] &= !bit;
        }
    }

    /// A glyph is defined if any of its 32 row masks is non-zero.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.rows.iter().any(|&row| row != 0)
    }

    /// Width clamped to what a row mask can hold.
    #[inline]
    pub fn render_width(&self) -> usize {
        self.width.min(MAX_GLYPH_WIDTH) as usize
    }

    /// Bytes needed for one row in the packed export format.
    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.render_width().div_ceil(8)
    }
}

/// Whether all glyphs share one width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontLayout {
    /// All 256 glyphs have this width
    Fixed { width: u8 },
    /// At least two glyphs differ in width
    Variable,
}

/// A complete 256 glyph font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Font {
    /// Rows actually used per glyph (1-32)
    pub height: u8,
    /// All 256 glyphs, index = code point
    pub glyphs: [Glyph; GLYPH_COUNT],
}

impl Default for Font {
    fn default() -> Self {
        Self::new()
    }
}

impl Font {
    /// Create a blank font: 256 empty glyphs, height 16, width 8.
    pub fn new() -> Self {
        Self {
            height: DEFAULT_FONT_HEIGHT,
            glyphs: [Glyph::EMPTY; GLYPH_COUNT],
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Height clamped to the 32 stored rows.
    #[inline]
    pub fn render_height(&self) -> usize {
        self.height.min(MAX_FONT_HEIGHT) as usize
    }

    #[inline]
    pub fn glyph(&self, code: u8) -> &Glyph {
        &self.glyphs[code as usize]
    }

    #[inline]
    pub fn glyph_mut(&mut self, code: u8) -> &mut Glyph {
        &mut self.glyphs[code as usize]
    }

    /// Width of the glyph for a character, `None` above code point 255.
    pub fn char_width(&self, ch: char) -> Option<usize> {
        u8::try_from(u32::from(ch)).ok().map(|code| self.glyph(code).render_width())
    }

    /// Widest glyph in the font.
    pub fn max_width(&self) -> u8 {
        self.glyphs.iter().map(|g| g.width).max().unwrap_or(DEFAULT_GLYPH_WIDTH)
    }

    /// Fixed if all 256 widths are equal, variable otherwise.
    pub fn layout(&self) -> FontLayout {
        let width = self.glyphs[0].width;
        if self.glyphs[1..].iter().all(|g| g.width == width) {
            FontLayout::Fixed { width }
        } else {
            FontLayout::Variable
        }
    }

    pub fn is_variable(&self) -> bool {
        self.layout() == FontLayout::Variable
    }

    /// First glyph with any non-zero row mask.
    pub fn first_defined(&self) -> Option<u8> {
        self.glyphs.iter().position(Glyph::is_defined).map(|i| i as u8)
    }

    /// Last glyph with any non-zero row mask.
    pub fn last_defined(&self) -> Option<u8> {
        self.glyphs.iter().rposition(Glyph::is_defined).map(|i| i as u8)
    }

    /// Inclusive code point range written by the source exporters.
    ///
    /// A first defined glyph of 1 or 33 is moved back by one slot.
    pub fn export_range(&self) -> Option<(u8, u8)> {
        let first = match self.first_defined()? {
            first @ (1 | 33) => first - 1,
            first => first,
        };
        let last = self.last_defined()?;
        Some((first, last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_font() {
        let font = Font::new();
        assert_eq!(font.height, 16);
        assert!(font.glyphs.iter().all(|g| g.width == 8 && !g.is_defined()));
        assert_eq!(font.layout(), FontLayout::Fixed { width: 8 });
        assert_eq!(font.first_defined(), None);
        assert_eq!(font.last_defined(), None);
        assert_eq!(font.export_range(), None);
    }

    #[test]
    fn test_pixels_msb_first() {
        let mut glyph = Glyph::EMPTY;
        glyph.set_pixel(0, 3, true);
        glyph.set_pixel(31, 3, true);
        assert_eq!(glyph.rows[3], 0x8000_0001);
        assert!(glyph.get_pixel(0, 3));
        assert!(glyph.get_pixel(31, 3));
        assert!(!glyph.get_pixel(32, 3));

        glyph.set_pixel(0, 3, false);
        assert_eq!(glyph.rows[3], 1);
    }

    #[test]
    fn test_export_range_legacy_step_back() {
        let mut font = Font::new();
        font.glyph_mut(33).rows[0] = 1;
        font.glyph_mut(126).rows[5] = 1;
        assert_eq!(font.export_range(), Some((32, 126)));

        let mut font = Font::new();
        font.glyph_mut(1).rows[31] = 1;
        assert_eq!(font.export_range(), Some((0, 1)));

        let mut font = Font::new();
        font.glyph_mut(34).rows[0] = 1;
        assert_eq!(font.export_range(), Some((34, 34)));
    }

    #[test]
    fn test_variable_layout() {
        let mut font = Font::new();
        font.glyph_mut(255).width = 9;
        assert!(font.is_variable());
        assert_eq!(font.max_width(), 9);
    }

    #[test]
    fn test_bytes_per_row() {
        assert_eq!(Glyph::new(1).bytes_per_row(), 1);
        assert_eq!(Glyph::new(8).bytes_per_row(), 1);
        assert_eq!(Glyph::new(9).bytes_per_row(), 2);
        assert_eq!(Glyph::new(32).bytes_per_row(), 4);
    }
}
