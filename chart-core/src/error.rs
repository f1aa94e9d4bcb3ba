use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File already exists {}", .0.display())]
    AlreadyExists(PathBuf),
}

impl ChartError {
    /// True when the caller may recover by deleting the existing chart file.
    pub fn is_already_exists(&self) -> bool {
        matches!(self, ChartError::AlreadyExists(_))
    }
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, ChartError>;
