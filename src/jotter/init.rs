use crate::api::NotesApi;
use crate::config::JotterConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use log::info;
use std::path::{Path, PathBuf};

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub save_dir: Option<PathBuf>,
    pub file_ext: Option<String>,
}

/// Builds the effective configuration: defaults, then the config file (if
/// any), then command-line overrides.
pub fn resolve_config(
    config_file: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<JotterConfig> {
    let mut config = match config_file {
        Some(path) => JotterConfig::load(path)?,
        None => JotterConfig::default(),
    };

    if let Some(dir) = &overrides.save_dir {
        config.save_dir = dir.clone();
    }
    if let Some(ext) = &overrides.file_ext {
        config.set_file_ext(ext);
    }

    Ok(config)
}

/// Creates the save directory if needed and wires up the API.
pub fn initialize(config: &JotterConfig) -> Result<NotesApi<FileStore>> {
    let store = FileStore::from_config(config);
    store.ensure_dir()?;

    info!(
        "notes in {} with extension {}",
        config.save_dir.display(),
        config.get_file_ext()
    );

    Ok(NotesApi::new(store))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_without_file_or_overrides() {
        let config = resolve_config(None, &ConfigOverrides::default()).unwrap();
        assert_eq!(config, JotterConfig::default());
    }

    #[test]
    fn overrides_win_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("jotter.json");
        fs::write(&path, r#"{ "save_dir": "from-file", "file_ext": ".md" }"#).unwrap();

        let overrides = ConfigOverrides {
            save_dir: Some(PathBuf::from("from-flag")),
            file_ext: None,
        };
        let config = resolve_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.save_dir, PathBuf::from("from-flag"));
        assert_eq!(config.file_ext, ".md");

        let overrides = ConfigOverrides {
            save_dir: None,
            file_ext: Some("txt".into()),
        };
        let config = resolve_config(Some(&path), &overrides).unwrap();
        assert_eq!(config.save_dir, PathBuf::from("from-file"));
        assert_eq!(config.file_ext, ".txt");
    }

    #[test]
    fn initialize_creates_save_dir() {
        let temp_dir = TempDir::new().unwrap();
        let save_dir = temp_dir.path().join("savedNotes");
        let config = JotterConfig::default().with_save_dir(&save_dir);

        let api = initialize(&config).unwrap();
        assert!(save_dir.is_dir());
        assert!(api.list_notes().unwrap().listed_names.is_empty());
    }
}
