//! Core model of the gfe bitmap font editor.
//!
//! Everything in here is independent of any presentation layer:
//! - [`Font`] / [`Glyph`] - the glyph store (256 glyphs of 32 row masks)
//! - [`formats`] - the `.vfnt` binary codec and the legacy 8px importer
//! - [`export`] - C source generation (standard and OLED column layouts)
//! - [`render`] - sample strips and the full specimen sheet

mod error;
pub use error::*;

mod font;
pub use font::*;

pub mod export;
pub mod formats;
pub mod render;

pub use export::ExportLayout;
pub use formats::FontFormat;
