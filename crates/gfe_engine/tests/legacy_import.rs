mod helpers;

use gfe_engine::{formats::import_legacy, EngineError, FontLayout};
use pretty_assertions::assert_eq;

#[test]
fn test_zero_file_of_height_7() {
    let font = import_legacy(&[0u8; 1792]).unwrap();
    assert_eq!(font.height, 7);
    assert_eq!(font.layout(), FontLayout::Fixed { width: 8 });
    assert!(font.glyphs.iter().all(|g| !g.is_defined()));
}

#[test]
fn test_full_first_glyph() {
    let mut data = vec![0u8; 256 * 8];
    data[..8].fill(0xFF);
    let font = import_legacy(&data).unwrap();

    let glyph = font.glyph(0);
    assert_eq!(&glyph.rows[..8], &[0xFF00_0000; 8]);
    assert!(glyph.rows[8..].iter().all(|&row| row == 0));
    assert!(!font.glyph(1).is_defined());
}

#[test]
fn test_trailing_bytes_are_ignored() {
    let mut data = vec![0u8; 256 * 10 + 5];
    data[256 * 10..].fill(0xFF);
    let font = import_legacy(&data).unwrap();
    assert_eq!(font.height, 10);
    assert!(font.glyphs.iter().all(|g| !g.is_defined()));
}

#[test]
fn test_too_small() {
    assert!(matches!(
        import_legacy(&[0u8; 256 * 6 + 255]),
        Err(EngineError::InvalidImportHeight { height: 6 })
    ));
}
