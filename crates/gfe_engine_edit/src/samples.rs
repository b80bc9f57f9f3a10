//! Text resources of the editor: sample texts, the key guide and the
//! specimen text.

use std::path::Path;

use gfe_engine::{render::DEFAULT_SAMPLE_TEXTS, EngineError, Result};

/// Sample texts cycled through by the sample strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleTexts {
    texts: Vec<String>,
    index: usize,
}

impl Default for SampleTexts {
    fn default() -> Self {
        Self::from_lines(DEFAULT_SAMPLE_TEXTS.iter().copied())
    }
}

impl SampleTexts {
    /// Non-empty trimmed lines; the built-in texts if there are none.
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        let texts: Vec<String> = lines.into_iter().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect();
        if texts.is_empty() {
            return Self::default();
        }
        Self { texts, index: 0 }
    }

    /// Read sample texts from a file, falling back to the built-in texts.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_lines(text.lines()),
            Err(err) => {
                log::info!("No sample texts from {} ({err}), using built-in texts", path.display());
                Self::default()
            }
        }
    }

    /// The current text; advances to the next one, wrapping around.
    pub fn next_text(&mut self) -> &str {
        let index = self.index;
        self.index = (self.index + 1) % self.texts.len();
        &self.texts[index]
    }

    /// Append a text and make it the current one.
    pub fn add(&mut self, text: impl Into<String>) {
        self.texts.push(text.into());
        self.index = self.texts.len() - 1;
    }

    pub fn texts(&self) -> &[String] {
        &self.texts
    }
}

/// Key guide shown next to the editor. Required for interactive use.
pub fn load_guide(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|_| EngineError::MissingResource { path: path.to_path_buf() })?;
    Ok(text.lines().map(|l| l.trim().to_string()).collect())
}

/// Optional text printed below the specimen grid.
pub fn load_presentation_text(path: &Path) -> Option<String> {
    std::fs::read_to_string(path).ok()
}
