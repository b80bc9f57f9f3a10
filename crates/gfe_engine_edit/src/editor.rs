//! Command dispatch for the interactive editor.

use std::path::PathBuf;

use gfe_engine::{
    render::{render_sample, SAMPLE_HEIGHT, SAMPLE_WIDTH},
    EngineError, ExportLayout, FontFormat,
};

use crate::{load_presentation_text, Action, Command, FontEditState, Key, Presenter, SampleTexts};

/// Editor behaviour that comes from the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorOptions {
    pub sample_width: u32,
    pub sample_height: u32,
    /// Text printed below the specimen grid, if the file exists
    pub presentation_file: PathBuf,
    /// Open the specimen in the image viewer after writing it
    pub open_viewer: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            sample_width: SAMPLE_WIDTH,
            sample_height: SAMPLE_HEIGHT,
            presentation_file: PathBuf::from("presentation.txt"),
            open_viewer: true,
        }
    }
}

/// Runs commands against a [`FontEditState`] and reports through a [`Presenter`].
pub struct Editor<P: Presenter> {
    state: FontEditState,
    presenter: P,
    samples: SampleTexts,
    options: EditorOptions,
    running: bool,
}

impl<P: Presenter> Editor<P> {
    pub fn new(state: FontEditState, presenter: P, samples: SampleTexts, options: EditorOptions) -> Self {
        Self {
            state,
            presenter,
            samples,
            options,
            running: true,
        }
    }

    pub fn state(&self) -> &FontEditState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FontEditState {
        &mut self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// False once a quit command ran.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn into_state(self) -> FontEditState {
        self.state
    }

    /// Repaint the edit grid.
    pub fn redraw(&mut self) {
        self.presenter.render_grid(&self.state);
    }

    /// Handle one key and repaint.
    pub fn handle_key(&mut self, key: &Key) {
        match Command::from_key(key) {
            Some(command) => self.execute(command),
            None => self.presenter.show_status(&format!("Unhandled key {key}")),
        }
        self.redraw();
    }

    /// Run a single command without repainting.
    pub fn execute(&mut self, command: Command) {
        log::debug!("Executing {command:?}");
        match command {
            Command::MoveCursor { dx, dy } => self.state.move_cursor(dx, dy),
            Command::NextChar => self.state.next_char(),
            Command::PrevChar => self.state.prev_char(),
            Command::TogglePixel => self.state.toggle_pixel(),
            Command::Click { x, y } => self.state.click(x, y),
            Command::Invert => {
                let ranged = self.state.mark().is_some();
                let count = self.state.invert();
                if ranged {
                    self.presenter.show_status(&format!("Inverted {count} characters"));
                }
            }
            Command::Clear => self.state.clear_glyph(),
            Command::SetMark => {
                self.state.set_mark();
                self.presenter.show_status("Mark placed");
            }
            Command::Copy => {
                let count = self.state.copy();
                self.presenter.show_status(&format!("Copied {count} characters"));
            }
            Command::Paste => {
                let count = self.state.paste();
                self.presenter.show_status(&format!("Pasted {count} characters"));
            }
            Command::Double => self.state.double_glyph(),
            Command::ShiftUp => self.state.shift_up(),
            Command::ShiftDown => self.state.shift_down(),
            Command::RotateLeft => self.state.rotate_left(),
            Command::RotateRight => self.state.rotate_right(),
            Command::GrowHeight => {
                self.state.grow_height();
            }
            Command::ShrinkHeight => {
                self.state.shrink_height();
            }
            Command::GrowWidth => {
                let width = self.state.grow_width();
                self.presenter.show_status(&format!("Width = {width}"));
            }
            Command::ShrinkWidth => {
                let width = self.state.shrink_width();
                self.presenter.show_status(&format!("Width = {width}"));
            }
            Command::NextSample => {
                let text = self.samples.next_text().to_string();
                self.show_sample(&text);
            }
            Command::AddSample => {
                if let Some(text) = self.presenter.prompt_text("Enter new sample text", "") {
                    if !text.is_empty() {
                        self.samples.add(text.clone());
                        self.show_sample(&text);
                    }
                }
            }
            Command::SaveAndQuit => {
                self.save(false);
                self.running = false;
            }
            Command::Quit => self.running = false,
            Command::Action(action) => self.run_action(action),
        }
    }

    fn run_action(&mut self, action: Action) {
        match action {
            Action::Load => {
                if let Some(path) = self.presenter.choose_open_path("Select file", FontFormat::Vfnt) {
                    match self.state.load_file(&path) {
                        Ok(()) => self.show_path(),
                        Err(err) => self.report(err),
                    }
                }
            }
            Action::Save => self.save(false),
            Action::SaveAs => self.save(true),
            Action::Import => {
                if let Some(path) = self.presenter.choose_open_path("Select file", FontFormat::Legacy) {
                    match self.state.import_legacy(&path) {
                        Ok(()) => self.presenter.show_status(&path.display().to_string()),
                        Err(err) => self.report(err),
                    }
                }
            }
            Action::New => self.state.new_font(),
            Action::Export => self.export(ExportLayout::Standard),
            Action::ExportOled => self.export(ExportLayout::Oled),
            Action::Presentation => {
                let text = load_presentation_text(&self.options.presentation_file);
                match self.state.save_specimen(text.as_deref()) {
                    Ok(path) => {
                        self.presenter.show_status(&path.display().to_string());
                        if self.options.open_viewer {
                            self.presenter.open_image(&path);
                        }
                    }
                    Err(err) => self.report(err),
                }
            }
        }
    }

    /// Save to the current file, asking for a path if there is none or
    /// `ask` is set. Cancelling the dialog saves nothing.
    fn save(&mut self, ask: bool) {
        let result = if self.state.file_path().is_some() && !ask {
            self.state.save()
        } else {
            match self.presenter.choose_save_path("Save as...", FontFormat::Vfnt) {
                Some(path) => self.state.save_as(&path),
                None => return,
            }
        };
        match result {
            Ok(path) => self.presenter.show_status(&path.display().to_string()),
            Err(err) => self.report(err),
        }
    }

    fn export(&mut self, layout: ExportLayout) {
        match self.state.export_source(layout) {
            Ok(path) => self.presenter.show_status(&path.display().to_string()),
            Err(err) => self.report(err),
        }
    }

    fn show_sample(&mut self, text: &str) {
        let font = self.state.committed_font();
        let image = render_sample(font, text, self.options.sample_width, self.options.sample_height);
        self.presenter.render_sample(&image);
    }

    fn show_path(&mut self) {
        if let Some(path) = self.state.file_path() {
            let message = path.display().to_string();
            self.presenter.show_status(&message);
        }
    }

    /// Validation problems go to the status line, everything else is an error.
    fn report(&mut self, err: EngineError) {
        match err {
            EngineError::NoDefinedGlyphs | EngineError::InvalidImportHeight { .. } => {
                log::warn!("{err}");
                self.presenter.show_status(&err.to_string());
            }
            _ => {
                log::error!("{err}");
                self.presenter.show_error(&err.to_string());
            }
        }
    }
}
