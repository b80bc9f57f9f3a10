//! Font edit state module structure
//!
//! - `state.rs` - Struct definition, constructors, getters, scratch handling
//! - `cursor.rs` - Cursor movement and active glyph navigation
//! - `glyph_operations.rs` - Pixel editing and transforms of the active glyph
//! - `font_operations.rs` - Glyph width and font height
//! - `clipboard.rs` - Mark, copy and paste of glyph ranges
//! - `file_operations.rs` - New, load, save, import, export and specimen

mod state;

mod clipboard;
mod cursor;
mod file_operations;
mod font_operations;
mod glyph_operations;

pub use state::{FontEditState, DEFAULT_CHAR, GRID_SIZE};
