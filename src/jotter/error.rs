use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("'{0}' is not a valid filename.")]
    InvalidName(String),

    #[error("ERROR: '{0}' already exists.")]
    AlreadyExists(String),

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("ERROR: '{0}' does not exist or failed to load.")]
    LoadFailed(String),

    #[error("Malformed head line in note: {0}")]
    MalformedHead(String),

    #[error("ERROR: Missing argument (filename).")]
    MissingArgument,

    #[error("'{0}' is not a valid command.")]
    UnknownCommand(String),

    #[error("ERROR: Could not find save directory {}.", .0.display())]
    MissingSaveDir(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, JotterError>;
