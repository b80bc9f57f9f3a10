//! Font Edit State
//!
//! The main state container for font editing, free of any presentation code.
//!
//! # Scratch buffer
//!
//! The active glyph is edited in a scratch copy of its 32 row masks. The
//! scratch is written back into the font whenever the active glyph changes
//! and before every operation that reads the stored glyphs: save, export,
//! specimen, copy, range invert, paste and sample rendering. [`FontEditState::commit`]
//! does the write back explicitly. Glyph widths and the font height are not
//! buffered and always live in the font.
//!
//! # Module Organization
//!
//! - `state.rs` - Struct definition, constructors, getters
//! - `cursor.rs` - Cursor movement, glyph navigation
//! - `glyph_operations.rs` - Pixel editing and transforms
//! - `font_operations.rs` - Width and height
//! - `clipboard.rs` - Mark, copy, paste
//! - `file_operations.rs` - File handling

use std::path::{Path, PathBuf};

use gfe_engine::{Font, GlyphRows};

/// Glyph selected after creating or loading a font
pub const DEFAULT_CHAR: u8 = b'A';

/// Side length of the edit grid; cursor coordinates wrap at this size
pub const GRID_SIZE: i32 = 32;

// ═══════════════════════════════════════════════════════════════════════════
// Font Edit State
// ═══════════════════════════════════════════════════════════════════════════

/// Main state container for font editing
///
/// Holds everything an editing session works on:
/// - the font with all 256 glyphs
/// - the scratch rows of the active glyph
/// - the edit grid cursor
/// - the copy mark and the clipboard
/// - the current file path
#[derive(Debug, Clone)]
pub struct FontEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Font Data
    // ═══════════════════════════════════════════════════════════════════════
    /// The font; the active glyph's rows may lag behind `scratch`
    pub(crate) font: Font,

    /// Working copy of the active glyph's row masks
    pub(crate) scratch: GlyphRows,

    // ═══════════════════════════════════════════════════════════════════════
    // Selection & Cursor
    // ═══════════════════════════════════════════════════════════════════════
    /// Active code point
    pub(crate) current_char: u8,

    /// Cursor position in the edit grid (x, y), both 0..32
    pub(crate) cursor_pos: (i32, i32),

    /// Other end of a glyph range for copy and invert
    pub(crate) mark: Option<u8>,

    /// Row masks of the last copied glyph range
    pub(crate) clipboard: Vec<GlyphRows>,

    // ═══════════════════════════════════════════════════════════════════════
    // File State
    // ═══════════════════════════════════════════════════════════════════════
    /// File path (if loaded from/saved to file)
    pub(crate) file_path: Option<PathBuf>,
}

impl Default for FontEditState {
    fn default() -> Self {
        Self::new()
    }
}

impl FontEditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create a state with a blank font, `'A'` active
    pub fn new() -> Self {
        Self::from_font(Font::new())
    }

    /// Create a state editing an existing font, `'A'` active
    pub fn from_font(font: Font) -> Self {
        let scratch = font.glyph(DEFAULT_CHAR).rows;
        Self {
            font,
            scratch,
            current_char: DEFAULT_CHAR,
            cursor_pos: (0, 0),
            mark: None,
            clipboard: Vec::new(),
            file_path: None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Scratch Buffer
    // ═══════════════════════════════════════════════════════════════════════

    /// Write the scratch rows back into the font.
    pub fn commit(&mut self) {
        self.font.glyph_mut(self.current_char).rows = self.scratch;
    }

    /// Discard the scratch and reload it from the font.
    pub(crate) fn reload_scratch(&mut self) {
        self.scratch = self.font.glyph(self.current_char).rows;
    }

    /// Replace the whole font and start over at `'A'`.
    pub(crate) fn replace_font(&mut self, font: Font) {
        self.font = font;
        self.current_char = DEFAULT_CHAR;
        self.reload_scratch();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    /// The stored font. Call [`Self::commit`] first for a view that
    /// includes pending edits of the active glyph.
    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Commit and return the complete font.
    pub fn committed_font(&mut self) -> &Font {
        self.commit();
        &self.font
    }

    /// Row masks of a glyph, taken from the scratch for the active glyph.
    pub fn glyph_rows(&self, ch: u8) -> &GlyphRows {
        if ch == self.current_char {
            &self.scratch
        } else {
            &self.font.glyph(ch).rows
        }
    }

    /// Currently active code point
    pub fn current_char(&self) -> u8 {
        self.current_char
    }

    /// Width of the active glyph
    pub fn current_width(&self) -> u8 {
        self.font.glyph(self.current_char).width
    }

    pub fn font_height(&self) -> u8 {
        self.font.height
    }

    pub fn mark(&self) -> Option<u8> {
        self.mark
    }

    pub fn clipboard(&self) -> &[GlyphRows] {
        &self.clipboard
    }

    /// Get file path
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Set file path
    pub fn set_file_path(&mut self, path: Option<PathBuf>) {
        self.file_path = path;
    }
}
