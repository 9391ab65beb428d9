use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsiftError {
    #[error("Invalid query: the search word is empty")]
    InvalidQuery,

    #[error("Folder unavailable: {path}: {source}")]
    FolderUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read document '{path}': {reason}")]
    DocumentUnreadable { path: PathBuf, reason: String },

    #[error("Unexpected file name shape: {0}")]
    UnexpectedFilenameShape(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("An unexpected error occurred: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DocsiftError>;

