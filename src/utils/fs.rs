//! File helpers: optional reads and atomic replacement.

use crate::error::{ArgSpecsError, Result};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Read a file to a string, returning `None` when it does not exist
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ArgSpecsError::io(path, e)),
    }
}

/// Read a file that must exist
pub fn read_required(path: &Path) -> Result<String> {
    read_optional(path)?.ok_or_else(|| ArgSpecsError::missing_input(path))
}

/// Write `contents` to `path` atomically.
///
/// The data goes to a temp file in the same directory, which is then renamed
/// over the target, so an interrupted run leaves either the old or the new
/// file and never a truncated one. Missing parent directories are created.
/// An existing target keeps its permissions; a new file is created `0644`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    std::fs::create_dir_all(parent).map_err(|e| ArgSpecsError::write(path, e))?;

    let mut temp_file =
        tempfile::NamedTempFile::new_in(parent).map_err(|e| ArgSpecsError::write(path, e))?;

    temp_file
        .write_all(contents.as_bytes())
        .map_err(|e| ArgSpecsError::write(path, e))?;

    if let Some(permissions) = target_permissions(path)? {
        temp_file
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| ArgSpecsError::write(path, e))?;
    }

    temp_file
        .persist(path)
        .map_err(|e| ArgSpecsError::write(path, e.error))?;

    Ok(())
}

/// Permissions for the replacement file; temp files start out owner-only
fn target_permissions(path: &Path) -> Result<Option<std::fs::Permissions>> {
    match std::fs::metadata(path) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(new_file_permissions()),
        Err(e) => Err(ArgSpecsError::io(path, e)),
    }
}

#[cfg(unix)]
fn new_file_permissions() -> Option<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(std::fs::Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn new_file_permissions() -> Option<std::fs::Permissions> {
    None
}

#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;
