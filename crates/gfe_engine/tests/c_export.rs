mod helpers;

use gfe_engine::{
    export::{export_source, generate_source},
    EngineError, ExportLayout, Font,
};
use helpers::temp_dir;
use pretty_assertions::assert_eq;

#[test]
fn test_export_writes_next_to_font() {
    let dir = temp_dir("export_writes");
    let font_path = dir.join("tiny.vfnt");

    let mut font = Font::new();
    font.height = 8;
    font.glyph_mut(b'A').rows[0] = 0x8000_0000;

    let written = export_source(&font, &font_path, ExportLayout::Standard).unwrap();
    assert_eq!(written, dir.join("tiny.vfnt.c"));

    let text = std::fs::read_to_string(&written).unwrap();
    assert!(text.starts_with("#include \"font.h\"\n\n"));
    assert!(text.contains("uint8_t const tiny_bitmaps[] PROGMEM = {\n"));
    assert!(text.contains(" 65,65,\n 8,8,\n NULL,\n {tiny_bitmaps}\n};\n"));

    let oled = export_source(&font, &font_path, ExportLayout::Oled).unwrap();
    assert_eq!(oled, dir.join("tiny.vfnt.oled.c"));
    let text = std::fs::read_to_string(&oled).unwrap();
    assert!(text.contains("0x01,0x00,0x00,0x00,0x00,0x00,0x00,0x00,"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_no_content_writes_nothing() {
    let dir = temp_dir("export_empty");
    let font_path = dir.join("empty.vfnt");

    let result = export_source(&Font::new(), &font_path, ExportLayout::Standard);
    assert!(matches!(result, Err(EngineError::NoDefinedGlyphs)));
    assert!(!dir.join("empty.vfnt.c").exists());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_oled_rejects_bad_height_before_writing() {
    let dir = temp_dir("export_oled_height");
    let font_path = dir.join("odd.vfnt");

    let mut font = Font::new();
    font.height = 10;
    font.glyph_mut(b'A').rows[0] = 1;

    let result = export_source(&font, &font_path, ExportLayout::Oled);
    assert!(matches!(result, Err(EngineError::OledHeightNotMultipleOf8 { height: 10 })));
    assert!(!dir.join("odd.vfnt.oled.c").exists());

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_oled_alternating_rows_byte() {
    let mut font = Font::new();
    font.height = 8;
    for code in 0..=255u8 {
        font.glyph_mut(code).width = 1;
    }
    for y in [0, 2, 4, 6] {
        font.glyph_mut(b'!').rows[y] = 0x8000_0000;
    }

    // '!' is 33, so the range starts at 32
    let text = generate_source(&font, "alt", ExportLayout::Oled).unwrap();
    assert!(text.contains("uint8_t const alt_bitmaps[] PROGMEM = {\n  0x00,\n  0x55,\n  \n};\n"));
    assert!(text.contains(" 32,33,\n 8,1,\n"));
}
