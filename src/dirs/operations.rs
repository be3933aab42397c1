//! Directory operations
//!
//! Creation, permission management, and existence checks. Each mutating
//! operation has a `_with_hooks` variant that fires the caller's
//! notification callbacks around the mutation; the plain variant runs
//! without hooks.

use log::{debug, info};
use std::fs;
use std::path::Path;

use crate::dirs::hooks::MutationHooks;
use crate::error::DirectoryError;

/// Mode applied to directories created by [`create_directory`].
///
/// Panel subprocesses run under per-account users and must be able to
/// reach freshly provisioned directories.
const DEFAULT_DIRECTORY_MODE: u32 = 0o777;

/// Creates a directory unless it already exists.
pub fn create_directory(path: &Path) -> Result<bool, DirectoryError> {
    create_directory_with_hooks(path, &mut MutationHooks::none())
}

/// Creates `path` (and any missing parents) unless it already exists.
///
/// Returns `Ok(true)` when the directory was created and `Ok(false)` when
/// the path was already present. The created directory is given
/// [`DEFAULT_DIRECTORY_MODE`] regardless of the process umask.
pub fn create_directory_with_hooks(
    path: &Path,
    hooks: &mut MutationHooks<'_>,
) -> Result<bool, DirectoryError> {
    if path.exists() {
        debug!("Directory already exists: {}", path.display());
        return Ok(false);
    }

    hooks.fire_before(path);
    fs::create_dir_all(path)?;
    apply_mode(path, DEFAULT_DIRECTORY_MODE)?;
    hooks.fire_after(path);

    info!("Created directory {}", path.display());
    Ok(true)
}

/// Applies an octal permission mode to an existing file or directory.
pub fn set_permissions(path: &Path, mode: u32) -> Result<(), DirectoryError> {
    set_permissions_with_hooks(path, mode, &mut MutationHooks::none())
}

/// Applies an octal permission mode, firing hooks around the change.
///
/// A missing path is an error; nothing is changed.
pub fn set_permissions_with_hooks(
    path: &Path,
    mode: u32,
    hooks: &mut MutationHooks<'_>,
) -> Result<(), DirectoryError> {
    if !path.exists() {
        return Err(DirectoryError::NotFound(path.to_path_buf()));
    }

    hooks.fire_before(path);
    apply_mode(path, mode)?;
    hooks.fire_after(path);

    info!("Set mode {:o} on {}", mode, path.display());
    Ok(())
}

#[cfg(unix)]
fn apply_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn apply_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    // Only the read-only flag is representable here; the owner-write bit
    // of the requested mode drives it.
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_readonly(mode & 0o200 == 0);
    fs::set_permissions(path, perms)
}

/// Check if path names an existing regular file.
pub fn file_exists(path: &Path) -> bool {
    path.is_file()
}

/// Check if path names an existing directory.
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}
