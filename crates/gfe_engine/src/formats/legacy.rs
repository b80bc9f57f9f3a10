//! Import of raw 8 pixel wide fonts.
//!
//! The file holds 256 glyphs with one byte per row, glyph after glyph. There
//! is no header; the glyph height is simply the file size divided by 256.

use crate::{EngineError, Font, Glyph, Result, GLYPH_COUNT, GLYPH_ROWS};

/// Smallest glyph height accepted by the importer
pub const MIN_IMPORT_HEIGHT: usize = 7;

/// Largest glyph height accepted by the importer
pub const MAX_IMPORT_HEIGHT: usize = 32;

/// Width of every imported glyph
pub const LEGACY_GLYPH_WIDTH: u8 = 8;

/// Build a font from raw 8px data.
///
/// Each byte becomes the top byte of a row mask (`byte << 24`), rows past
/// the inferred height are zero and every glyph is 8 pixels wide.
pub fn import_legacy(data: &[u8]) -> Result<Font> {
    let height = data.len() / GLYPH_COUNT;
    if !(MIN_IMPORT_HEIGHT..=MAX_IMPORT_HEIGHT).contains(&height) {
        return Err(EngineError::InvalidImportHeight { height });
    }
    let trailing = data.len() % GLYPH_COUNT;
    if trailing != 0 {
        log::warn!("legacy font has {trailing} trailing bytes, ignored");
    }

    let mut font = Font {
        height: height as u8,
        glyphs: [Glyph::new(LEGACY_GLYPH_WIDTH); GLYPH_COUNT],
    };
    for (glyph, rows) in font.glyphs.iter_mut().zip(data.chunks_exact(height)) {
        let mut masks = [0u32; GLYPH_ROWS];
        for (mask, &byte) in masks.iter_mut().zip(rows) {
            *mask = (byte as u32) << 24;
        }
        glyph.rows = masks;
    }
    Ok(font)
}
