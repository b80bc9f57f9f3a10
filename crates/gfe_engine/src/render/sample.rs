use image::RgbaImage;

use crate::Font;

use super::{BLACK, WHITE};

/// Default sample strip width in pixels
pub const SAMPLE_WIDTH: u32 = 800;

/// Default sample strip height in pixels
pub const SAMPLE_HEIGHT: u32 = 36;

/// Rows left blank above the text
pub const SAMPLE_MARGIN: u32 = 2;

/// Used when no sample text file is available
pub const DEFAULT_SAMPLE_TEXTS: [&str; 3] = [
    "QUICK BROWN FOX JUMPED OVER THE LAZY DOGS BACK.",
    "quick brown fox jumped over the lazy dogs back.",
    "!\"#%&/()=?_{[]}\\*+-01234567890",
];

/// Render one line of text, white on black, one image pixel per font pixel.
///
/// Characters above code point 255 are skipped. Rendering stops at the first
/// glyph that would reach the right edge of the strip.
pub fn render_sample(font: &Font, text: &str, width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(width, height, BLACK);
    let rows = font.render_height();
    let mut x = 0u32;

    for ch in text.chars() {
        let Ok(code) = u8::try_from(u32::from(ch)) else {
            continue;
        };
        let glyph = font.glyph(code);
        let glyph_width = glyph.render_width() as u32;
        if x + glyph_width >= width {
            break;
        }
        for cy in 0..rows {
            let py = cy as u32 + SAMPLE_MARGIN;
            if py >= height {
                break;
            }
            for cx in 0..glyph_width {
                if glyph.get_pixel(cx as usize, cy) {
                    img.put_pixel(x + cx, py, WHITE);
                }
            }
        }
        x += glyph_width;
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(img: &RgbaImage) -> Vec<(u32, u32)> {
        img.enumerate_pixels().filter(|(_, _, p)| **p == WHITE).map(|(x, y, _)| (x, y)).collect()
    }

    #[test]
    fn test_pixels_are_offset_by_margin() {
        let mut font = Font::new();
        font.glyph_mut(b'A').set_pixel(0, 0, true);
        font.glyph_mut(b'B').set_pixel(7, 15, true);

        let img = render_sample(&font, "AB", 40, 20);
        assert_eq!(lit_pixels(&img), vec![(0, 2), (15, 17)]);
    }

    #[test]
    fn test_skips_wide_chars_and_stops_at_edge() {
        let mut font = Font::new();
        font.glyph_mut(b'X').set_pixel(0, 0, true);

        // 8 + 8 reaches 16 - the second X doesn't fit
        let img = render_sample(&font, "€X☃X", 16, 20);
        assert_eq!(lit_pixels(&img), vec![(0, 2)]);
    }
}
