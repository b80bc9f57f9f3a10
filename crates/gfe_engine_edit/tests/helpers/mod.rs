//! Shared test helpers for edit state tests

#![allow(dead_code)]

use std::path::PathBuf;

use gfe_engine_edit::{Editor, EditorOptions, FontEditState, GlyphRows, HeadlessPresenter, SampleTexts};

/// Fresh scratch directory below the system temp dir.
pub fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gfe_edit_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// State with an asymmetric pattern in the active glyph 'A'
pub fn create_test_state() -> FontEditState {
    let mut state = FontEditState::new();
    draw_pattern(&mut state);
    state
}

/// An L shape plus a pixel at the right edge of row 0
pub fn draw_pattern(state: &mut FontEditState) {
    for y in 0..10 {
        state.set_pixel(1, y, true);
    }
    for x in 1..6 {
        state.set_pixel(x, 9, true);
    }
    state.set_pixel(31, 0, true);
}

/// Rows of a glyph with a single distinct value per row
pub fn numbered_rows(seed: u32) -> GlyphRows {
    let mut rows = [0u32; 32];
    for (i, row) in rows.iter_mut().enumerate() {
        *row = seed.wrapping_mul(0x0101_0101) ^ i as u32;
    }
    rows
}

/// Editor over a blank state with scripted presenter answers
pub fn create_editor(presenter: HeadlessPresenter) -> Editor<HeadlessPresenter> {
    Editor::new(FontEditState::new(), presenter, SampleTexts::default(), EditorOptions { open_viewer: false, ..Default::default() })
}

/// Parse and dispatch a sequence of key names
pub fn press(editor: &mut Editor<HeadlessPresenter>, keys: &[&str]) {
    for key in keys {
        editor.handle_key(&key.parse().unwrap());
    }
}
