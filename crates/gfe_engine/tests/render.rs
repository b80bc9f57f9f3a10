mod helpers;

use gfe_engine::{
    render::{render_sample, save_specimen, SAMPLE_HEIGHT, SAMPLE_WIDTH, SPECIMEN_HEIGHT, SPECIMEN_WIDTH},
    Font,
};
use helpers::temp_dir;
use image::Rgba;
use pretty_assertions::assert_eq;

#[test]
fn test_sample_strip_size() {
    let img = render_sample(&Font::new(), "HELLO", SAMPLE_WIDTH, SAMPLE_HEIGHT);
    assert_eq!(img.dimensions(), (800, 36));
    assert!(img.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));
}

#[test]
fn test_save_specimen_png() {
    let dir = temp_dir("specimen");
    let font_path = dir.join("block.vfnt");

    let mut font = Font::new();
    font.glyph_mut(b'B').rows[..16].fill(0xFF00_0000);

    let written = save_specimen(&font, &font_path, Some("BBB\nB")).unwrap();
    assert_eq!(written, dir.join("block.png"));

    let img = image::open(&written).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (SPECIMEN_WIDTH, SPECIMEN_HEIGHT));
    assert!(img.pixels().any(|p| *p == Rgba([0, 0, 0, 255])));

    let _ = std::fs::remove_dir_all(dir);
}
