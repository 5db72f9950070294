use crate::model::IdentifierError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Invalid note title '{name}': {reason}")]
    InvalidIdentifier {
        name: String,
        reason: IdentifierError,
    },

    #[error("Not a directory: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("Note content is empty")]
    EmptyContent,

    #[error("Note not found: {0}")]
    NotFound(String),

    #[error("Notes directory unavailable: {}", .0.display())]
    StoreUnavailable(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, JotterError>;
