use super::NoteStore;
use crate::config::JotterConfig;
use crate::error::{JotterError, Result};
use crate::model::{LoadMode, Note};
use log::debug;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const TMP_PREFIX: &str = ".jotter-";
const TMP_SUFFIX: &str = ".tmp";

pub struct FileStore {
    root: PathBuf,
    file_ext: String,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_ext: ".note".to_string(),
        }
    }

    pub fn from_config(config: &JotterConfig) -> Self {
        Self::new(config.save_dir.clone()).with_file_ext(config.get_file_ext())
    }

    pub fn with_file_ext(mut self, ext: &str) -> Self {
        if ext.starts_with('.') {
            self.file_ext = ext.to_string();
        } else {
            self.file_ext = format!(".{}", ext);
        }
        self
    }

    pub fn file_ext(&self) -> &str {
        &self.file_ext
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn note_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}{}", name, self.file_ext))
    }

    /// Create the save directory (and parents) if it is missing.
    pub fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            debug!("creating save directory {}", self.root.display());
            fs::create_dir_all(&self.root).map_err(JotterError::Io)?;
        }
        Ok(())
    }

    fn note_name(&self, path: &Path) -> Option<String> {
        let file_name = path.file_name()?.to_str()?;
        if is_tmp_file(file_name) {
            return None;
        }
        let name = file_name.strip_suffix(&self.file_ext)?;
        Some(name.to_string())
    }
}

/// Matches only `{TMP_PREFIX}{uuid}{TMP_SUFFIX}` as written by `save`.
fn is_tmp_file(file_name: &str) -> bool {
    file_name
        .strip_prefix(TMP_PREFIX)
        .and_then(|rest| rest.strip_suffix(TMP_SUFFIX))
        .is_some_and(|id| Uuid::parse_str(id).is_ok())
}

impl NoteStore for FileStore {
    fn exists(&self, name: &str) -> bool {
        self.note_path(name).exists()
    }

    fn save(&mut self, note: &Note) -> Result<()> {
        let path = self.note_path(&note.name);

        // Atomic write: a crash leaves either the old file or the new one
        let tmp_name = format!("{}{}{}", TMP_PREFIX, Uuid::new_v4(), TMP_SUFFIX);
        let tmp_file = self.root.join(tmp_name);
        if let Err(e) = fs::write(&tmp_file, note.content()) {
            let _ = fs::remove_file(&tmp_file);
            return Err(JotterError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(JotterError::Io(e));
        }

        debug!("saved note {} to {}", note.name, path.display());
        Ok(())
    }

    fn load(&self, name: &str, mode: LoadMode) -> Result<Note> {
        let path = self.note_path(name);
        let raw = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => JotterError::NotFound(name.to_string()),
            _ => JotterError::Io(e),
        })?;

        debug!("loaded note {} from {} ({:?})", name, path.display(), mode);
        Note::parse(name, &raw, mode)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let path = self.note_path(name);
        fs::remove_file(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => JotterError::NotFound(name.to_string()),
            _ => JotterError::Io(e),
        })?;

        debug!("deleted note {} at {}", name, path.display());
        Ok(())
    }

    fn list(&self) -> Result<Vec<String>> {
        if !self.root.is_dir() {
            return Err(JotterError::MissingSaveDir(self.root.clone()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(JotterError::Io)? {
            let entry = entry.map_err(JotterError::Io)?;
            if !entry.file_type().map_err(JotterError::Io)?.is_file() {
                continue;
            }
            if let Some(name) = self.note_name(&entry.path()) {
                names.push(name);
            }
        }

        Ok(names)
    }
}
