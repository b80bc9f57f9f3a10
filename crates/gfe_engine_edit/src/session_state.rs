//! Session state for the font editor
//!
//! A small line oriented `key=value` file restoring where the last session
//! left off:
//!
//! ```text
//! file=/home/me/fonts/pal10.vfnt
//! char=65
//! cx=3
//! cy=7
//! mark=70
//! clip=[[0,0,...],[...]]
//! ```
//!
//! Keys are case-insensitive, anything after `#` in a value is a comment and
//! unknown keys are ignored. `clip` is a JSON array holding one array of row
//! masks per copied glyph.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use gfe_engine::{EngineError, GlyphRows, Result, GLYPH_ROWS};

use crate::FontEditState;

/// Default session file name, relative to the working directory
pub const DEFAULT_STATE_FILE: &str = ".gfe.state";

/// Saved editing session. Missing keys are `None` and restore nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Font file to reload
    pub file: Option<PathBuf>,
    /// Active code point
    pub current_char: Option<u8>,
    /// Edit grid cursor column
    pub cursor_x: Option<i32>,
    /// Edit grid cursor row
    pub cursor_y: Option<i32>,
    /// Copy mark
    pub mark: Option<u8>,
    /// Clipboard contents
    pub clipboard: Option<Vec<GlyphRows>>,
}

impl SessionState {
    /// Parse a session file. Values that don't parse are logged and skipped.
    pub fn parse(text: &str) -> Self {
        let mut state = Self::default();
        for line in text.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.split('#').next().unwrap_or_default().trim();
            if let Err(err) = state.set_value(&key, value) {
                log::warn!("Ignoring session entry: {err}");
            }
        }
        state
    }

    fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "file" => self.file = (!value.is_empty()).then(|| PathBuf::from(value)),
            "char" => self.current_char = Some(parse_number(key, value)?),
            "cx" => self.cursor_x = Some(parse_number(key, value)?),
            "cy" => self.cursor_y = Some(parse_number(key, value)?),
            "mark" => self.mark = Some(parse_number(key, value)?),
            "clip" => self.clipboard = Some(parse_clipboard(value)?),
            _ => log::debug!("Unknown session key '{key}'"),
        }
        Ok(())
    }

    /// Read a session file. A missing or unreadable file yields `None`.
    pub fn load(path: &Path) -> Option<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Some(Self::parse(&text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                log::warn!("Can't read session file {}: {err}", path.display());
                None
            }
        }
    }

    /// Write the session file, replacing its previous contents.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_string()).map_err(|e| EngineError::write_file(path, e.to_string()))
    }

    /// Snapshot of the restorable parts of an edit state.
    pub fn capture(state: &FontEditState) -> Self {
        let (cx, cy) = state.cursor();
        Self {
            file: state.file_path().map(Path::to_path_buf),
            current_char: Some(state.current_char()),
            cursor_x: Some(cx),
            cursor_y: Some(cy),
            mark: state.mark(),
            clipboard: Some(state.clipboard().to_vec()),
        }
    }

    /// Restore into an edit state: font file first, then active glyph,
    /// cursor, mark and clipboard.
    ///
    /// A font file that fails to load is logged and skipped.
    pub fn apply(&self, state: &mut FontEditState) {
        if let Some(file) = &self.file {
            if let Err(err) = state.load_file(file) {
                log::error!("Can't restore session font {}: {err}", file.display());
            }
        }
        if let Some(ch) = self.current_char {
            state.change_to(ch);
        }
        let (cx, cy) = state.cursor();
        state.set_cursor(self.cursor_x.unwrap_or(cx), self.cursor_y.unwrap_or(cy));
        if self.mark.is_some() {
            state.restore_mark(self.mark);
        }
        if let Some(clipboard) = &self.clipboard {
            state.set_clipboard(clipboard.clone());
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = self.file.as_deref().map(|p| p.display().to_string()).unwrap_or_default();
        writeln!(f, "file={file}")?;
        if let Some(ch) = self.current_char {
            writeln!(f, "char={ch}")?;
        }
        if let Some(cx) = self.cursor_x {
            writeln!(f, "cx={cx}")?;
        }
        if let Some(cy) = self.cursor_y {
            writeln!(f, "cy={cy}")?;
        }
        if let Some(mark) = self.mark {
            writeln!(f, "mark={mark}")?;
        }
        let clipboard: Vec<&[u32]> = self.clipboard.iter().flatten().map(|rows| rows.as_slice()).collect();
        let json = serde_json::to_string(&clipboard).map_err(|_| fmt::Error)?;
        writeln!(f, "clip={json}")
    }
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| EngineError::invalid_session_value(key, value))
}

fn parse_clipboard(value: &str) -> Result<Vec<GlyphRows>> {
    let entries: Vec<Vec<u32>> = serde_json::from_str(value).map_err(|e| EngineError::invalid_session_value("clip", e.to_string()))?;
    Ok(entries
        .into_iter()
        .map(|entry| {
            let mut rows = [0u32; GLYPH_ROWS];
            for (row, value) in rows.iter_mut().zip(entry) {
                *row = value;
            }
            rows
        })
        .collect())
}
