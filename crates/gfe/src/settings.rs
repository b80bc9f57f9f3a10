use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use gfe_engine::render::{SAMPLE_HEIGHT, SAMPLE_WIDTH};
use gfe_engine_edit::{EditorOptions, DEFAULT_STATE_FILE};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// =============================================================================
// Project directory constants
// =============================================================================

const PROJECT_QUALIFIER: &str = "com";
const PROJECT_ORGANIZATION: &str = "GitHub";
const PROJECT_APPLICATION: &str = "gfe";

/// Lazily initialized project directories (computed once on first access)
pub(crate) static PROJECT_DIRS: Lazy<Option<directories::ProjectDirs>> =
    Lazy::new(|| directories::ProjectDirs::from(PROJECT_QUALIFIER, PROJECT_ORGANIZATION, PROJECT_APPLICATION));

/// Editor settings, persisted in `settings.toml`.
///
/// Relative paths are resolved against the working directory, so a font
/// project directory can carry its own samples, guide and session file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Session file restored on startup and written on exit
    pub state_file: PathBuf,
    /// One sample text per line
    pub samples_file: PathBuf,
    /// Key guide shown by the interactive editor
    pub guide_file: PathBuf,
    /// Text printed below the specimen grid
    pub presentation_file: PathBuf,
    /// Open written specimens in the image viewer
    pub open_viewer: bool,
    pub sample_width: u32,
    pub sample_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            state_file: PathBuf::from(DEFAULT_STATE_FILE),
            samples_file: PathBuf::from("samples.txt"),
            guide_file: PathBuf::from("guide.txt"),
            presentation_file: PathBuf::from("presentation.txt"),
            open_viewer: true,
            sample_width: SAMPLE_WIDTH,
            sample_height: SAMPLE_HEIGHT,
        }
    }
}

impl Settings {
    pub const FILE_NAME: &'static str = "settings.toml";

    /// Load from `path`, or from the configuration directory if `None`.
    ///
    /// Missing or broken files yield the defaults.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(file) = path.map(Path::to_path_buf).or_else(Self::config_file) else {
            return Self::default();
        };
        if !file.exists() {
            log::info!("No settings file at {}, using defaults", file.display());
            return Self::default();
        }
        match fs::read_to_string(&file) {
            Ok(txt) => match toml::from_str::<Settings>(&txt) {
                Ok(settings) => return settings,
                Err(err) => log::error!("Error parsing settings file {}: {}", file.display(), err),
            },
            Err(err) => log::error!("Error reading settings file: {}", err),
        }
        Self::default()
    }

    /// Atomically write settings to file (write to temp, then rename).
    pub fn store(&self, path: &Path) -> anyhow::Result<()> {
        let text = toml::to_string_pretty(self)?;
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let temp_path = path.with_extension("toml.tmp");

        let write_result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(text.as_bytes())?;
            file.sync_all()?;
            Ok(())
        })();
        if let Err(err) = write_result.and_then(|()| fs::rename(&temp_path, path)) {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        Ok(())
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions {
            sample_width: self.sample_width,
            sample_height: self.sample_height,
            presentation_file: self.presentation_file.clone(),
            open_viewer: self.open_viewer,
        }
    }

    pub fn config_dir() -> Option<PathBuf> {
        PROJECT_DIRS.as_ref().map(|p| p.config_dir().to_path_buf())
    }

    pub fn config_file() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(Self::FILE_NAME))
    }
}
