//! Error types for keeporg

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the keeporg application
#[derive(Debug, Error)]
pub enum KeeporgError {
    #[error("Input directory not found: {0}")]
    InputDirNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KeeporgError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            KeeporgError::InputDirNotFound(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            KeeporgError::InputDirNotFound(path) => {
                format!(
                    "Input directory not found: {}\n\n\
                    Suggestions:\n\
                    • Point keeporg at the Keep folder of an extracted Takeout archive\n\
                    • The folder should contain one .html file per note\n\n\
                    Usage:\n\
                    keeporg /path/to/Takeout/Keep /path/to/output",
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using KeeporgError
pub type Result<T> = std::result::Result<T, KeeporgError>;
