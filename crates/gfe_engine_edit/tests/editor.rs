mod helpers;

use gfe_engine_edit::{HeadlessPresenter, PresenterCall};
use helpers::{create_editor, press, temp_dir};
use pretty_assertions::assert_eq;

#[test]
fn test_every_key_repaints() {
    let mut editor = create_editor(HeadlessPresenter::new());
    press(&mut editor, &["Right", "Down", "F5", "space"]);
    assert_eq!(editor.presenter().grid_renders(), 4);
    assert_eq!(editor.state().cursor(), (1, 1));
    assert!(editor.state().pixel(1, 1));
}

#[test]
fn test_unhandled_key_status() {
    let mut editor = create_editor(HeadlessPresenter::new());
    press(&mut editor, &["x", "Escape"]);
    assert_eq!(editor.presenter().statuses(), vec!["Unhandled key x", "Unhandled key Escape"]);
}

#[test]
fn test_copy_paste_statuses() {
    let mut editor = create_editor(HeadlessPresenter::new());
    press(&mut editor, &["m", ">", ">", "c", "Next", "p", "W", "N", "N"]);
    assert_eq!(
        editor.presenter().statuses(),
        vec!["Mark placed", "Copied 3 characters", "Pasted 3 characters", "Width = 9", "Width = 8", "Width = 7"]
    );
    assert_eq!(editor.state().current_char(), b'D');
}

#[test]
fn test_invert_reports_only_ranges() {
    let mut editor = create_editor(HeadlessPresenter::new());
    press(&mut editor, &["i"]);
    assert!(editor.presenter().statuses().is_empty());
    assert!(editor.state().pixel(0, 0));

    press(&mut editor, &["m", "<", "i"]);
    assert_eq!(editor.presenter().last_status(), Some("Inverted 2 characters"));
}

#[test]
fn test_sample_rendering() {
    let mut editor = create_editor(HeadlessPresenter::new().with_text_answer("AAA"));
    // 'A' gets a single pixel, committed before rendering
    press(&mut editor, &["space", "a", "s"]);

    let samples: Vec<_> = editor
        .presenter()
        .calls
        .iter()
        .filter(|call| matches!(call, PresenterCall::Sample { .. }))
        .cloned()
        .collect();
    let expected = PresenterCall::Sample {
        width: 800,
        height: 36,
        lit_pixels: 3,
    };
    assert_eq!(samples, vec![expected.clone(), expected]);
}

#[test]
fn test_cancelled_prompt_renders_nothing() {
    let mut editor = create_editor(HeadlessPresenter::new());
    press(&mut editor, &["a"]);
    assert!(editor.presenter().calls.contains(&PresenterCall::Prompt("Enter new sample text".to_string())));
    assert!(!editor.presenter().calls.iter().any(|c| matches!(c, PresenterCall::Sample { .. })));
}

#[test]
fn test_quit_and_save_and_quit() {
    let mut editor = create_editor(HeadlessPresenter::new());
    press(&mut editor, &["Q"]);
    assert!(!editor.is_running());

    let dir = temp_dir("editor_quit");
    let path = dir.join("q.vfnt");
    let mut editor = create_editor(HeadlessPresenter::new().with_save_answer(&path));
    press(&mut editor, &["space", "q"]);
    assert!(!editor.is_running());
    assert!(path.exists());
    assert_eq!(editor.presenter().last_status(), Some(path.display().to_string().as_str()));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_toolbar_round_trip() {
    let dir = temp_dir("editor_toolbar");
    let path = dir.join("tb.vfnt");
    let presenter = HeadlessPresenter::new().with_save_answer(&path).with_open_answer(&path);
    let mut editor = create_editor(presenter);

    press(&mut editor, &["click 2 3", "saveas", "new"]);
    assert!(!editor.state().pixel(2, 3));
    assert_eq!(editor.state().file_path(), None);

    press(&mut editor, &["load"]);
    assert!(editor.state().pixel(2, 3));

    press(&mut editor, &["export", "presentation"]);
    assert!(dir.join("tb.vfnt.c").exists());
    assert!(dir.join("tb.png").exists());
    assert!(!editor.presenter().calls.iter().any(|c| matches!(c, PresenterCall::OpenImage(_))));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn test_export_errors() {
    let dir = temp_dir("editor_export_errors");
    let mut editor = create_editor(HeadlessPresenter::new());
    editor.state_mut().set_file_path(Some(dir.join("e.vfnt")));

    press(&mut editor, &["export"]);
    assert_eq!(editor.presenter().last_status(), Some("No defined chars"));

    press(&mut editor, &["space", "T", "oled"]);
    assert_eq!(editor.presenter().errors(), vec!["Font height must be multiple of 8 for OLED (got 17)"]);
    assert!(!dir.join("e.vfnt.oled.c").exists());

    let _ = std::fs::remove_dir_all(dir);
}
