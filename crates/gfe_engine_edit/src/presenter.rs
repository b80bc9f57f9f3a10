//! The seam between the editor and whatever displays it.
//!
//! The editor never draws or asks anything itself; every repaint, message,
//! prompt and file dialog goes through a [`Presenter`].

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use gfe_engine::FontFormat;
use image::RgbaImage;

use crate::FontEditState;

/// Display and user interaction capability of an editor front end.
pub trait Presenter {
    /// Repaint the 32×32 edit grid with cursor, metrics and active glyph.
    fn render_grid(&mut self, state: &FontEditState);

    /// Show a rendered sample strip.
    fn render_sample(&mut self, image: &RgbaImage);

    /// Set the status line.
    fn show_status(&mut self, message: &str);

    /// Report an error the user has to acknowledge.
    fn show_error(&mut self, message: &str);

    /// Ask for a line of text. `None` if cancelled.
    fn prompt_text(&mut self, prompt: &str, default: &str) -> Option<String>;

    /// Ask for an existing file to read. `None` if cancelled.
    fn choose_open_path(&mut self, title: &str, format: FontFormat) -> Option<PathBuf>;

    /// Ask for a file to write. `None` if cancelled.
    fn choose_save_path(&mut self, title: &str, format: FontFormat) -> Option<PathBuf>;

    /// Show an image file in an external viewer, best effort.
    fn open_image(&mut self, path: &Path) {
        log::info!("Image written to {}", path.display());
    }
}

/// One recorded [`HeadlessPresenter`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterCall {
    Grid { current_char: u8, cursor: (i32, i32) },
    Sample { width: u32, height: u32, lit_pixels: usize },
    Status(String),
    Error(String),
    Prompt(String),
    OpenDialog(String),
    SaveDialog(String),
    OpenImage(PathBuf),
}

/// Presenter without any display: answers come from queues filled up front
/// and every call is recorded.
#[derive(Debug, Default)]
pub struct HeadlessPresenter {
    pub calls: Vec<PresenterCall>,
    pub text_answers: VecDeque<String>,
    pub open_answers: VecDeque<PathBuf>,
    pub save_answers: VecDeque<PathBuf>,
}

impl HeadlessPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text_answer(mut self, answer: impl Into<String>) -> Self {
        self.text_answers.push_back(answer.into());
        self
    }

    pub fn with_open_answer(mut self, path: impl Into<PathBuf>) -> Self {
        self.open_answers.push_back(path.into());
        self
    }

    pub fn with_save_answer(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_answers.push_back(path.into());
        self
    }

    /// All status messages in order
    pub fn statuses(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PresenterCall::Status(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All error messages in order
    pub fn errors(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PresenterCall::Error(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_status(&self) -> Option<&str> {
        self.statuses().last().copied()
    }

    pub fn grid_renders(&self) -> usize {
        self.calls.iter().filter(|call| matches!(call, PresenterCall::Grid { .. })).count()
    }
}

impl Presenter for HeadlessPresenter {
    fn render_grid(&mut self, state: &FontEditState) {
        self.calls.push(PresenterCall::Grid {
            current_char: state.current_char(),
            cursor: state.cursor(),
        });
    }

    fn render_sample(&mut self, image: &RgbaImage) {
        let lit_pixels = image.pixels().filter(|p| p.0[..3] != [0, 0, 0]).count();
        self.calls.push(PresenterCall::Sample {
            width: image.width(),
            height: image.height(),
            lit_pixels,
        });
    }

    fn show_status(&mut self, message: &str) {
        self.calls.push(PresenterCall::Status(message.to_string()));
    }

    fn show_error(&mut self, message: &str) {
        self.calls.push(PresenterCall::Error(message.to_string()));
    }

    fn prompt_text(&mut self, prompt: &str, _default: &str) -> Option<String> {
        self.calls.push(PresenterCall::Prompt(prompt.to_string()));
        self.text_answers.pop_front()
    }

    fn choose_open_path(&mut self, title: &str, _format: FontFormat) -> Option<PathBuf> {
        self.calls.push(PresenterCall::OpenDialog(title.to_string()));
        self.open_answers.pop_front()
    }

    fn choose_save_path(&mut self, title: &str, _format: FontFormat) -> Option<PathBuf> {
        self.calls.push(PresenterCall::SaveDialog(title.to_string()));
        self.save_answers.pop_front()
    }

    fn open_image(&mut self, path: &Path) {
        self.calls.push(PresenterCall::OpenImage(path.to_path_buf()));
    }
}
