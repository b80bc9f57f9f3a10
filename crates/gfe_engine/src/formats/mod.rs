//! Font file formats.
//!
//! - `.vfnt` - the native binary format, see [`vfnt`]
//! - `.fnt` - raw 8 pixel wide legacy fonts, import only, see [`legacy`]

use std::path::Path;

pub mod legacy;
pub mod vfnt;

pub use legacy::import_legacy;
pub use vfnt::{decode_vfnt, encode_vfnt, VFNT_FILE_SIZE, VFNT_MAGIC};

/// Supported font file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFormat {
    /// Native binary font (load and save)
    /// Extension: .vfnt
    Vfnt,

    /// Raw 8 pixel wide font, height inferred from file size (import only)
    /// Extension: .fnt
    Legacy,
}

impl FontFormat {
    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Vfnt => "vfnt",
            Self::Legacy => "fnt",
        }
    }

    /// Try to detect the format from a file extension.
    ///
    /// Accepts extensions with or without leading dot.
    ///
    /// # Examples
    /// ```
    /// use gfe_engine::FontFormat;
    ///
    /// assert_eq!(FontFormat::from_extension("vfnt"), Some(FontFormat::Vfnt));
    /// assert_eq!(FontFormat::from_extension(".FNT"), Some(FontFormat::Legacy));
    /// assert_eq!(FontFormat::from_extension("psf"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_lowercase().as_str() {
            "vfnt" => Some(Self::Vfnt),
            "fnt" => Some(Self::Legacy),
            _ => None,
        }
    }

    /// Try to detect the format from a file path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_extension)
    }

    /// Get a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vfnt => "font files",
            Self::Legacy => "legacy font files",
        }
    }
}

impl std::fmt::Display for FontFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (*.{})", self.name(), self.extension())
    }
}
