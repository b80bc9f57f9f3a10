//! File operations: new, load, save, import, export and specimen.
//!
//! Failed operations leave the state untouched.

use std::path::{Path, PathBuf};

use gfe_engine::{
    export,
    formats::{decode_vfnt, encode_vfnt, import_legacy},
    render, EngineError, ExportLayout, Font, Result,
};

use super::FontEditState;

impl FontEditState {
    /// Start over with a blank font. Mark and file path are cleared, the
    /// clipboard is kept.
    pub fn new_font(&mut self) {
        self.replace_font(Font::new());
        self.mark = None;
        self.file_path = None;
    }

    /// Load a `.vfnt` file and make `'A'` active.
    ///
    /// The file path is stored as absolute path.
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let data = std::fs::read(path).map_err(|e| EngineError::read_file(path, e.to_string()))?;
        let font = decode_vfnt(&data)?;
        let path = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());

        log::info!("Loaded font {}", path.display());
        self.replace_font(font);
        self.file_path = Some(path);
        Ok(())
    }

    /// Save to the current file path.
    pub fn save(&mut self) -> Result<PathBuf> {
        let path = self.file_path.clone().ok_or(EngineError::NoFileName)?;
        self.write_file(&path)?;
        Ok(path)
    }

    /// Save to a new path, which becomes the current file path on success.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf> {
        self.write_file(path)?;
        self.file_path = Some(path.to_path_buf());
        Ok(path.to_path_buf())
    }

    fn write_file(&mut self, path: &Path) -> Result<()> {
        self.commit();
        std::fs::write(path, encode_vfnt(&self.font)).map_err(|e| EngineError::write_file(path, e.to_string()))?;
        log::info!("Saved font {}", path.display());
        Ok(())
    }

    /// Replace the font with a legacy 8px font. The file path is cleared so
    /// the next save asks for a name.
    pub fn import_legacy(&mut self, path: &Path) -> Result<()> {
        let data = std::fs::read(path).map_err(|e| EngineError::read_file(path, e.to_string()))?;
        let font = import_legacy(&data)?;

        log::info!("Imported legacy font {} ({} rows)", path.display(), font.height);
        self.replace_font(font);
        self.file_path = None;
        Ok(())
    }

    /// Write C source next to the font file. Returns the written path.
    pub fn export_source(&mut self, layout: ExportLayout) -> Result<PathBuf> {
        self.commit();
        // Content problems are reported before a missing file name
        export::exportable_range(&self.font, layout)?;
        let path = self.file_path.as_deref().ok_or(EngineError::NoFileName)?;
        export::export_source(&self.font, path, layout)
    }

    /// Render the specimen sheet next to the font file. Returns the PNG path.
    pub fn save_specimen(&mut self, text: Option<&str>) -> Result<PathBuf> {
        self.commit();
        let path = self.file_path.as_deref().ok_or(EngineError::NoFileName)?;
        render::save_specimen(&self.font, path, text)
    }
}
