use crate::error::{JotterError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_SAVE_DIR: &str = "savedNotes";
const DEFAULT_FILE_EXT: &str = ".note";

/// Configuration for jotter, optionally read from a JSON file.
///
/// Resolved once at startup; nothing mutates it afterwards.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct JotterConfig {
    /// Directory that notes are saved to
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,

    /// Extension that notes are saved with (e.g. ".note", ".txt")
    #[serde(default = "default_file_ext")]
    pub file_ext: String,
}

fn default_save_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SAVE_DIR)
}

fn default_file_ext() -> String {
    DEFAULT_FILE_EXT.to_string()
}

impl Default for JotterConfig {
    fn default() -> Self {
        Self {
            save_dir: default_save_dir(),
            file_ext: default_file_ext(),
        }
    }
}

impl JotterConfig {
    /// Load config from a JSON file. The file must exist.
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let content = fs::read_to_string(config_path.as_ref()).map_err(JotterError::Io)?;
        let mut config: JotterConfig =
            serde_json::from_str(&content).map_err(JotterError::Serialization)?;
        let ext = config.file_ext.clone();
        config.set_file_ext(&ext);
        Ok(config)
    }

    pub fn get_file_ext(&self) -> &str {
        &self.file_ext
    }

    /// Set the file extension (normalizes to start with a dot)
    pub fn set_file_ext(&mut self, ext: &str) {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
    }

    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = dir.into();
        self
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        self.set_file_ext(ext);
        self
    }
}
