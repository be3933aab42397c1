//! Recursive directory removal
//!
//! Best-effort, depth-first removal of a directory tree. The walk is
//! fully sequential and never aborts on a per-entry failure; every entry
//! that could not be removed is recorded in the returned report.

use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::Path;

use crate::dirs::hooks::MutationHooks;
use crate::dirs::results::{FailedEntry, RemovalReport};
use crate::error::DirectoryError;

/// What a directory entry turned out to be, decided by an explicit type
/// query rather than by trying a deletion and interpreting its failure.
#[derive(Clone, Copy)]
enum NodeKind {
    Directory,
    /// Regular file or symlink; both are unlinked, symlinks are never
    /// followed.
    File,
}

/// Removes a directory and everything beneath it.
pub fn remove_directory(path: &Path) -> Result<RemovalReport, DirectoryError> {
    remove_directory_with_hooks(path, &mut MutationHooks::none())
}

/// Removes `path` and everything beneath it, firing hooks around each
/// removal.
///
/// The top-level listing must be readable; when this returns `Err` nothing
/// has been deleted. Below the top level the walk is best-effort: a failed
/// entry is recorded in the report and its siblings are still processed,
/// so one undeletable file does not strand the rest of the tree.
///
/// An entry that vanishes between enumeration and removal is counted as
/// removed; the goal state holds even though no syscall succeeded (and
/// `after` does not fire for it).
pub fn remove_directory_with_hooks(
    path: &Path,
    hooks: &mut MutationHooks<'_>,
) -> Result<RemovalReport, DirectoryError> {
    let entries = fs::read_dir(path).map_err(|e| classify_open_error(path, e))?;

    let mut report = RemovalReport::default();
    remove_entries(path, entries, hooks, &mut report);
    remove_node(path, NodeKind::Directory, hooks, &mut report);

    if report.is_complete() {
        info!(
            "Removed directory {} ({} files, {} directories)",
            path.display(),
            report.files_removed,
            report.dirs_removed
        );
    } else {
        warn!(
            "Partial removal of {}: {} entries left behind",
            path.display(),
            report.failed.len()
        );
    }

    Ok(report)
}

/// Recursive step for subdirectories. An unreadable listing is a recorded
/// failure here, not an error: the walk above continues.
fn remove_tree(path: &Path, hooks: &mut MutationHooks<'_>, report: &mut RemovalReport) {
    match fs::read_dir(path) {
        Ok(entries) => {
            remove_entries(path, entries, hooks, report);
            remove_node(path, NodeKind::Directory, hooks, report);
        }
        Err(error) => {
            debug!("Cannot read directory {}: {}", path.display(), error);
            report.failed.push(FailedEntry {
                path: path.to_path_buf(),
                error,
            });
        }
    }
}

fn remove_entries(
    parent: &Path,
    entries: fs::ReadDir,
    hooks: &mut MutationHooks<'_>,
    report: &mut RemovalReport,
) {
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                report.failed.push(FailedEntry {
                    path: parent.to_path_buf(),
                    error,
                });
                continue;
            }
        };

        let entry_path = entry.path();
        // file_type() does not follow symlinks, so a symlinked directory
        // is unlinked like a file and the walk stays inside the tree.
        match entry.file_type() {
            Ok(file_type) if file_type.is_dir() => remove_tree(&entry_path, hooks, report),
            Ok(_) => remove_node(&entry_path, NodeKind::File, hooks, report),
            Err(error) => report.failed.push(FailedEntry {
                path: entry_path,
                error,
            }),
        }
    }
}

fn remove_node(
    path: &Path,
    kind: NodeKind,
    hooks: &mut MutationHooks<'_>,
    report: &mut RemovalReport,
) {
    hooks.fire_before(path);

    let outcome = match kind {
        NodeKind::Directory => fs::remove_dir(path),
        NodeKind::File => fs::remove_file(path),
    };

    match outcome {
        Ok(()) => {
            hooks.fire_after(path);
            match kind {
                NodeKind::Directory => report.dirs_removed += 1,
                NodeKind::File => report.files_removed += 1,
            }
            debug!("Removed {}", path.display());
        }
        // Vanished since enumeration; treat as removed.
        Err(error) if error.kind() == io::ErrorKind::NotFound => match kind {
            NodeKind::Directory => report.dirs_removed += 1,
            NodeKind::File => report.files_removed += 1,
        },
        Err(error) => {
            debug!("Failed to remove {}: {}", path.display(), error);
            report.failed.push(FailedEntry {
                path: path.to_path_buf(),
                error,
            });
        }
    }
}

fn classify_open_error(path: &Path, error: io::Error) -> DirectoryError {
    match error.kind() {
        io::ErrorKind::NotFound => DirectoryError::NotFound(path.to_path_buf()),
        io::ErrorKind::NotADirectory => DirectoryError::NotADirectory(path.to_path_buf()),
        _ if path.is_file() => DirectoryError::NotADirectory(path.to_path_buf()),
        _ => DirectoryError::Io(error),
    }
}
