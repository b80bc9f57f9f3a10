//! C source export for embedded displays.
//!
//! Two byte layouts are supported:
//! - [`ExportLayout::Standard`] - row-major, `ceil(width / 8)` bytes per row
//! - [`ExportLayout::Oled`] - column-major 8 row bands, LSB = topmost pixel
//!
//! Whether the tables are shared (fixed font) or per glyph (variable font)
//! is decided by [`Font::layout`] and applies to both byte layouts.

use std::path::{Path, PathBuf};

use crate::{EngineError, Font, Result};

mod c_source;
pub mod packing;

pub use c_source::{SourceWriter, FONT_HEADER};

/// Byte layout of the exported bitmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportLayout {
    /// Row-major bytes
    Standard,
    /// Column-packed 8 row bands for page addressed OLED controllers
    Oled,
}

impl ExportLayout {
    /// Suffix appended to the font file path.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Standard => ".c",
            Self::Oled => ".oled.c",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Oled => "OLED",
        }
    }

    /// Path of the generated source next to the font file.
    pub fn output_path(&self, font_path: &Path) -> PathBuf {
        let mut path = font_path.as_os_str().to_owned();
        path.push(self.suffix());
        PathBuf::from(path)
    }

    /// Check the font can be exported with this layout.
    pub fn validate(&self, font: &Font) -> Result<()> {
        if *self == Self::Oled && font.height % packing::OLED_BAND_HEIGHT as u8 != 0 {
            return Err(EngineError::OledHeightNotMultipleOf8 { height: font.height });
        }
        Ok(())
    }
}

impl std::fmt::Display for ExportLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// C identifier prefix: the file name up to its first `.`.
pub fn table_name(font_path: &Path) -> Result<String> {
    let file_name = font_path.file_name().and_then(|n| n.to_str()).ok_or(EngineError::NoFileName)?;
    let name = file_name.split('.').next().unwrap_or_default();
    if name.is_empty() {
        return Err(EngineError::NoFileName);
    }
    Ok(name.to_string())
}

/// Code point range to export, after checking the font suits the layout.
///
/// Fails on an invalid OLED height or when no glyph is defined.
pub fn exportable_range(font: &Font, layout: ExportLayout) -> Result<(u8, u8)> {
    layout.validate(font)?;
    font.export_range().ok_or(EngineError::NoDefinedGlyphs)
}

/// Generate the source text for a font.
pub fn generate_source(font: &Font, name: &str, layout: ExportLayout) -> Result<String> {
    let (first, last) = exportable_range(font, layout)?;
    Ok(SourceWriter::new(font, name, layout, first, last).generate())
}

/// Export a font next to its file, returning the written path.
///
/// Nothing is written if generation fails.
pub fn export_source(font: &Font, font_path: &Path, layout: ExportLayout) -> Result<PathBuf> {
    let (first, last) = exportable_range(font, layout)?;
    let name = table_name(font_path)?;
    let source = SourceWriter::new(font, &name, layout, first, last).generate();
    let output = layout.output_path(font_path);
    std::fs::write(&output, source).map_err(|e| EngineError::write_file(&output, e.to_string()))?;
    log::info!("Exported {layout} source to {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path() {
        let path = Path::new("/tmp/fonts/pal10.vfnt");
        assert_eq!(ExportLayout::Standard.output_path(path), PathBuf::from("/tmp/fonts/pal10.vfnt.c"));
        assert_eq!(ExportLayout::Oled.output_path(path), PathBuf::from("/tmp/fonts/pal10.vfnt.oled.c"));
    }

    #[test]
    fn test_table_name() {
        assert_eq!(table_name(Path::new("/x/pal10.vfnt")).unwrap(), "pal10");
        assert_eq!(table_name(Path::new("big.v2.vfnt")).unwrap(), "big");
        assert!(table_name(Path::new("/")).is_err());
    }

    #[test]
    fn test_oled_height_validation() {
        let mut font = Font::new();
        font.height = 12;
        assert!(matches!(
            generate_source(&font, "x", ExportLayout::Oled),
            Err(EngineError::OledHeightNotMultipleOf8 { height: 12 })
        ));
    }

    #[test]
    fn test_no_defined_glyphs() {
        let font = Font::new();
        assert!(matches!(
            generate_source(&font, "x", ExportLayout::Standard),
            Err(EngineError::NoDefinedGlyphs)
        ));
    }
}
