use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ListcloneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Malformed archive: {0}")]
    MalformedArchive(String),
}

pub type Result<T> = std::result::Result<T, ListcloneError>;
