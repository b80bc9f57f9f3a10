//! Specimen sheet: title, all 256 glyphs in a 16×16 grid and optional text.
//!
//! The canvas is A4 at 300 dpi. The grid uses a 3000 × 3000 pixel square and
//! pads every glyph cell by one font pixel on each side.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::{EngineError, Font, Result};

use super::{draw_glyph, text_width, CELL_BACKGROUND, WHITE};

/// Specimen width in pixels (11 inch at 300 dpi)
pub const SPECIMEN_WIDTH: u32 = 11 * 300;

/// Specimen height in pixels (16 inch at 300 dpi)
pub const SPECIMEN_HEIGHT: u32 = 16 * 300;

const GRID_AREA: u32 = 3000;
const GRID_COLUMNS: u32 = 16;
const TITLE_TARGET_HEIGHT: u32 = 150;
const TEXT_SCALE: u32 = 3;

/// Geometry of a specimen sheet, derived from the font metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecimenLayout {
    /// Grid cell size in font pixels
    pub cell: u32,
    /// Image pixels per font pixel in the grid
    pub scale: u32,
    /// Horizontal margin that centers the grid, also used as spacing unit
    pub margin: u32,
    /// Image pixels per font pixel in the title
    pub title_scale: u32,
    /// Title height in image pixels
    pub title_height: u32,
}

impl SpecimenLayout {
    pub fn new(font: &Font) -> Self {
        let height = font.render_height().max(1) as u32;
        let cell = (font.max_width() as u32).max(height) + 2;
        let scale = GRID_AREA / (cell * GRID_COLUMNS);
        let margin = (SPECIMEN_WIDTH - cell * scale * GRID_COLUMNS) / 2;
        let title_scale = TITLE_TARGET_HEIGHT / height + 1;
        Self {
            cell,
            scale,
            margin,
            title_scale,
            title_height: height * title_scale,
        }
    }

    /// Side length of the glyph grid in image pixels.
    pub fn grid_size(&self) -> u32 {
        self.cell * self.scale * GRID_COLUMNS
    }

    /// Top left corner of the grid cell for a code point.
    pub fn cell_origin(&self, code: u8) -> (u32, u32) {
        let col = code as u32 % GRID_COLUMNS;
        let row = code as u32 / GRID_COLUMNS;
        (
            self.margin + col * self.scale * self.cell,
            self.margin * 2 + self.title_height + row * self.scale * self.cell,
        )
    }
}

/// Draw text scaled, wrapping at `max_width` and at newlines.
///
/// Stops when the next line would not fit into `max_height`.
#[allow(clippy::too_many_arguments)]
fn draw_text(img: &mut RgbaImage, font: &Font, text: &str, x: u32, y: u32, max_width: u32, max_height: u32, scale: u32) {
    let line_height = font.render_height() as u32 * scale;
    let (mut cx, mut cy) = (0u32, 0u32);

    for ch in text.chars() {
        if ch == '\r' {
            continue;
        }
        let newline = ch == '\n';
        let width = if newline {
            0
        } else {
            match font.char_width(ch) {
                Some(width) => width as u32 * scale,
                None => continue,
            }
        };

        if newline || cx + width >= max_width {
            if cy + 2 * line_height > max_height {
                break;
            }
            cy += line_height;
            cx = 0;
        }
        if !newline {
            draw_glyph(img, font, ch as u8, x + cx, y + cy, scale, WHITE);
            cx += width;
        }
    }
}

/// Render the complete specimen sheet.
pub fn render_specimen(font: &Font, title: &str, text: Option<&str>) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(SPECIMEN_WIDTH, SPECIMEN_HEIGHT, WHITE);
    let layout = SpecimenLayout::new(font);

    let title_width = text_width(font, title) * layout.title_scale;
    draw_text(
        &mut img,
        font,
        title,
        SPECIMEN_WIDTH.saturating_sub(title_width) / 2,
        layout.margin,
        SPECIMEN_WIDTH / 2,
        layout.title_height,
        layout.title_scale,
    );

    for code in 0..=255u8 {
        let glyph_width = font.glyph(code).width as u32;
        let center = layout.cell.saturating_sub(glyph_width) * layout.scale / 2;
        let (x, y) = layout.cell_origin(code);
        draw_glyph(&mut img, font, code, x + center, y, layout.scale, CELL_BACKGROUND);
    }

    if let Some(text) = text {
        let grid = layout.grid_size();
        let top = layout.margin * 3 + layout.title_height + grid;
        let height = SPECIMEN_HEIGHT.saturating_sub(layout.margin * 4 + grid + layout.title_height);
        draw_text(&mut img, font, text, layout.margin, top, grid, height, TEXT_SCALE);
    }
    img
}

/// `<dir>/<stem>.png` for a font file.
pub fn specimen_path(font_path: &Path) -> Result<PathBuf> {
    let stem = font_path.file_stem().ok_or(EngineError::NoFileName)?;
    let mut name = stem.to_os_string();
    name.push(".png");
    Ok(font_path.with_file_name(name))
}

/// Render the specimen for a font file and write it as PNG next to it.
pub fn save_specimen(font: &Font, font_path: &Path, text: Option<&str>) -> Result<PathBuf> {
    let output = specimen_path(font_path)?;
    let title = font_path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let img = render_specimen(font, &title, text);
    img.save(&output).map_err(|e| EngineError::ImageSaveFailed { message: e.to_string() })?;
    log::info!("Saved specimen to {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::BLACK;

    #[test]
    fn test_layout_default_font() {
        let layout = SpecimenLayout::new(&Font::new());
        // cell = max(8, 16) + 2
        assert_eq!(layout.cell, 18);
        assert_eq!(layout.scale, 3000 / (18 * 16));
        assert_eq!(layout.margin, (3300 - 18 * 10 * 16) / 2);
        assert_eq!(layout.title_scale, 150 / 16 + 1);
        assert_eq!(layout.title_height, 16 * 10);
    }

    #[test]
    fn test_grid_fits_canvas() {
        let mut font = Font::new();
        font.height = 32;
        font.glyph_mut(7).width = 32;
        let layout = SpecimenLayout::new(&font);
        assert!(layout.grid_size() <= GRID_AREA);
        let (x, y) = layout.cell_origin(255);
        assert!(x + layout.cell * layout.scale <= SPECIMEN_WIDTH);
        assert!(y + layout.cell * layout.scale <= SPECIMEN_HEIGHT);
    }

    #[test]
    fn test_glyph_pixel_lands_in_cell() {
        let mut font = Font::new();
        font.glyph_mut(0x41).set_pixel(0, 0, true);
        let img = render_specimen(&font, "", None);

        let layout = SpecimenLayout::new(&font);
        let (x, y) = layout.cell_origin(0x41);
        let center = (layout.cell - 8) * layout.scale / 2;
        assert_eq!(*img.get_pixel(x + center, y), BLACK);
        assert_eq!(*img.get_pixel(x + center + layout.scale, y), CELL_BACKGROUND);
    }

    #[test]
    fn test_specimen_path() {
        assert_eq!(specimen_path(Path::new("/a/b/pal10.vfnt")).unwrap(), PathBuf::from("/a/b/pal10.png"));
    }
}
