//! Removal result types
//!
//! Defines the report returned by best-effort removal walks.

use std::io;
use std::path::PathBuf;

/// A single entry that could not be removed.
#[derive(Debug)]
pub struct FailedEntry {
    pub path: PathBuf,
    pub error: io::Error,
}

/// Aggregate outcome of a recursive removal.
///
/// The walk never aborts on a per-entry failure, so a successful return
/// does not mean the tree is gone. Callers that need to know check
/// [`RemovalReport::is_complete`] or inspect `failed`.
#[derive(Debug, Default)]
pub struct RemovalReport {
    /// Files and symlinks unlinked.
    pub files_removed: usize,
    /// Directories removed, including the top-level one.
    pub dirs_removed: usize,
    /// Entries left behind, with the error that stopped each one.
    pub failed: Vec<FailedEntry>,
}

impl RemovalReport {
    /// True when every entry and the top-level directory were removed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
