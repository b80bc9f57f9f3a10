use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for gfe_engine operations
#[derive(Error, Debug)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    #[error("Failed to write file '{path}': {message}")]
    WriteFile { path: PathBuf, message: String },

    #[error("Missing resource file '{path}'")]
    MissingResource { path: PathBuf },

    // === Font Format Errors ===
    #[error("Font data length mismatch: expected {expected}, got {actual}")]
    FontLengthMismatch { expected: usize, actual: usize },

    #[error("Invalid font file: magic number mismatch")]
    MagicMismatch,

    #[error("Character height must be 7..32 (got {height})")]
    InvalidImportHeight { height: usize },

    // === Export Errors ===
    #[error("Font height must be multiple of 8 for OLED (got {height})")]
    OledHeightNotMultipleOf8 { height: u8 },

    #[error("No defined chars")]
    NoDefinedGlyphs,

    #[error("Font has no file name")]
    NoFileName,

    // === Image Errors ===
    #[error("Failed to create image buffer")]
    ImageBufferCreationFailed,

    #[error("Failed to save image: {message}")]
    ImageSaveFailed { message: String },

    // === Session Errors ===
    #[error("Invalid session value for '{key}': {value}")]
    InvalidSessionValue { key: String, value: String },

    #[error("{0}")]
    Generic(String),
}

/// Result type alias for gfe_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a generic error from any displayable type
    pub fn generic(msg: impl std::fmt::Display) -> Self {
        Self::Generic(msg.to_string())
    }

    /// Create a read file error
    pub fn read_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ReadFile {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a write file error
    pub fn write_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::WriteFile {
            path: path.into(),
            message: msg.into(),
        }
    }

    pub fn invalid_session_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidSessionValue {
            key: key.into(),
            value: value.into(),
        }
    }
}
