//! Error types
//!
//! Defines the error type returned by directory operations. Per-entry
//! failures inside a removal walk are not errors; they are collected in
//! [`crate::dirs::RemovalReport`].

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Directory operation errors
#[derive(Debug)]
pub enum DirectoryError {
    NotFound(PathBuf),
    NotADirectory(PathBuf),
    Io(io::Error),
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::NotFound(p) => write!(f, "Path not found: {}", p.display()),
            DirectoryError::NotADirectory(p) => write!(f, "Not a directory: {}", p.display()),
            DirectoryError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for DirectoryError {
    fn from(error: io::Error) -> Self {
        DirectoryError::Io(error)
    }
}
