mod helpers;

use gfe_engine_edit::FontEditState;
use helpers::numbered_rows;
use pretty_assertions::assert_eq;

fn create_numbered_state() -> FontEditState {
    let mut font = gfe_engine_edit::Font::new();
    for code in 0..=255u8 {
        font.glyph_mut(code).rows = numbered_rows(code as u32 + 1);
    }
    FontEditState::from_font(font)
}

#[test]
fn test_copy_range_and_paste() {
    let mut state = create_numbered_state();
    let before = state.font().clone();
    state.change_to(10);
    state.set_mark();
    state.change_to(12);

    assert_eq!(state.copy(), 3);
    assert_eq!(state.mark(), None);

    state.change_to(100);
    assert_eq!(state.paste(), 3);
    state.commit();

    for code in 0..=255u8 {
        let expected = match code {
            100..=102 => before.glyph(code - 90),
            _ => before.glyph(code),
        };
        assert_eq!(state.font().glyph(code), expected, "glyph {code}");
    }
    assert_eq!(*state.glyph_rows(100), numbered_rows(11));
}

#[test]
fn test_mark_after_active_glyph() {
    let mut state = create_numbered_state();
    state.change_to(50);
    state.set_mark();
    state.change_to(48);
    assert_eq!(state.copy(), 3);
    assert_eq!(state.clipboard()[0], numbered_rows(49));
}

#[test]
fn test_copy_includes_pending_edits() {
    let mut state = FontEditState::new();
    state.set_pixel(0, 0, true);
    state.copy();
    assert_eq!(state.clipboard()[0][0], 0x8000_0000);
}

#[test]
fn test_copy_replaces_clipboard() {
    let mut state = create_numbered_state();
    state.set_mark();
    state.change_to(b'Z');
    assert_eq!(state.copy(), 26);
    assert_eq!(state.copy(), 1);
    assert_eq!(state.clipboard().len(), 1);
}

#[test]
fn test_invert_single_glyph_range() {
    let mut state = create_numbered_state();
    let before = state.font().clone();
    state.change_to(5);
    state.set_mark();

    assert_eq!(state.invert(), 1);
    assert_eq!(state.mark(), None);
    state.commit();

    let inverted = numbered_rows(6).map(|row| !row);
    assert_eq!(state.font().glyph(5).rows, inverted);
    assert_eq!(*state.glyph_rows(5), inverted);
    for code in (0..=255u8).filter(|&code| code != 5) {
        assert_eq!(state.font().glyph(code), before.glyph(code), "glyph {code}");
    }
}

#[test]
fn test_invert_range_is_involution() {
    let mut state = create_numbered_state();
    state.change_to(20);
    state.set_mark();
    state.change_to(30);
    assert_eq!(state.invert(), 11);

    state.set_mark();
    state.change_to(20);
    assert_eq!(state.invert(), 11);
    state.commit();
    for code in 20..=30u8 {
        assert_eq!(state.font().glyph(code).rows, numbered_rows(code as u32 + 1));
    }
}
