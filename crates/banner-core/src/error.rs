//! Error types for Banner Core

use thiserror::Error;

use crate::font::FontError;

/// Result type for Banner Core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Built-in font table failed validation
    #[error("Font error: {0}")]
    Font(#[from] FontError),

    /// Writing a banner failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// True when the reader on the other end of the output went away
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CoreError::Io(err) if err.kind() == std::io::ErrorKind::BrokenPipe)
    }
}
