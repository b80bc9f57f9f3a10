//! Shared test helpers for gfe_engine tests

#![allow(dead_code)]

use std::path::PathBuf;

use gfe_engine::{Font, Glyph, GLYPH_COUNT};

/// Fresh scratch directory below the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gfe_engine_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Font with a distinct, deterministic bit pattern in every glyph and
/// non-default widths and height.
pub fn create_patterned_font() -> Font {
    let mut font = Font::new();
    font.height = 20;
    for code in 0..GLYPH_COUNT {
        let glyph = &mut font.glyphs[code];
        glyph.width = (code % 32) as u8 + 1;
        for (y, row) in glyph.rows.iter_mut().enumerate() {
            *row = (code as u32).wrapping_mul(0x9E37_79B9) ^ (y as u32).rotate_left(code as u32 % 32);
        }
    }
    font
}

/// Font where every glyph is `glyph`.
pub fn create_uniform_font(height: u8, glyph: Glyph) -> Font {
    let mut font = Font::new();
    font.height = height;
    font.glyphs = [glyph; GLYPH_COUNT];
    font
}
