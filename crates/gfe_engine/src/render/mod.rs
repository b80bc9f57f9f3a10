//! Raster previews of a font.
//!
//! - [`render_sample`] - one line of text in a small strip, for the editor
//! - [`render_specimen`] - a print resolution sheet of all 256 glyphs

use image::{Rgba, RgbaImage};

use crate::Font;

mod sample;
mod specimen;

pub use sample::{render_sample, DEFAULT_SAMPLE_TEXTS, SAMPLE_HEIGHT, SAMPLE_MARGIN, SAMPLE_WIDTH};
pub use specimen::{render_specimen, save_specimen, specimen_path, SpecimenLayout, SPECIMEN_HEIGHT, SPECIMEN_WIDTH};

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const CELL_BACKGROUND: Rgba<u8> = Rgba([240, 240, 240, 255]);

/// Fill a rectangle, clipped to the image.
pub(crate) fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, width: u32, height: u32, color: Rgba<u8>) {
    let x_end = x.saturating_add(width).min(img.width());
    let y_end = y.saturating_add(height).min(img.height());
    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Draw a glyph with every font pixel scaled to a `scale` × `scale` block.
///
/// The glyph cell (width × height) is cleared to `background` first.
pub(crate) fn draw_glyph(img: &mut RgbaImage, font: &Font, code: u8, x: u32, y: u32, scale: u32, background: Rgba<u8>) {
    let glyph = font.glyph(code);
    let width = glyph.render_width();
    let height = font.render_height();
    fill_rect(img, x, y, width as u32 * scale, height as u32 * scale, background);
    for cy in 0..height {
        for cx in 0..width {
            if glyph.get_pixel(cx, cy) {
                fill_rect(img, x + cx as u32 * scale, y + cy as u32 * scale, scale, scale, BLACK);
            }
        }
    }
}

/// Unscaled width of a string, skipping characters the font can't show.
pub fn text_width(font: &Font, text: &str) -> u32 {
    text.chars().filter_map(|ch| font.char_width(ch)).map(|w| w as u32).sum()
}
