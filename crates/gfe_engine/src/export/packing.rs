//! Bit packing of glyph rows into the byte streams used by the exporters.

use crate::{Glyph, LEFTMOST_PIXEL};

/// Rows per OLED band (one output byte holds 8 vertical pixels)
pub const OLED_BAND_HEIGHT: usize = 8;

/// Split a row mask into `count` bytes, most significant byte first.
///
/// Byte `i` holds bits 31-8i down to 24-8i of the mask, so bit 7 of byte 0 is
/// the leftmost pixel.
pub fn pack_row(row: u32, count: usize) -> impl Iterator<Item = u8> {
    (0..count).map(move |i| row.checked_shl(8 * i as u32).map_or(0, |shifted| (shifted >> 24) as u8))
}

/// Standard layout: one line of `ceil(width / 8)` bytes per row for `height` rows.
pub fn pack_standard(glyph: &Glyph, height: usize) -> Vec<Vec<u8>> {
    let bytes = glyph.bytes_per_row();
    glyph.rows.iter().take(height).map(|&row| pack_row(row, bytes).collect()).collect()
}

/// Pack one 8 row band column by column.
///
/// For column `x`, bit `i` of the output byte is set if pixel `x` of band row
/// `i` is set, so the LSB is the topmost row.
pub fn pack_band(band: &[u32], width: usize) -> Vec<u8> {
    (0..width)
        .map(|x| {
            let mut byte = 0u8;
            for (i, row) in band.iter().enumerate() {
                if row & (LEFTMOST_PIXEL >> x) != 0 {
                    byte |= 1 << i;
                }
            }
            byte
        })
        .collect()
}

/// OLED layout: one line per 8 row band, each line holding one byte per column.
///
/// The caller guarantees `height` is a multiple of 8.
pub fn pack_oled(glyph: &Glyph, height: usize) -> Vec<Vec<u8>> {
    let width = glyph.render_width();
    glyph.rows[..height]
        .chunks(OLED_BAND_HEIGHT)
        .map(|band| pack_band(band, width))
        .collect()
}
