//! Role discovery for collection mode.

use crate::constants::paths;
use crate::error::{ArgSpecsError, Result};
use std::path::{Path, PathBuf};

/// The roles to process under `base`.
///
/// Without `collection` the directory itself is the only role. In collection
/// mode the immediate subdirectories of `base/roles` (the Ansible collection
/// layout) are used when that directory exists, otherwise those of `base`.
/// Hidden directories are skipped and the result is sorted by path.
pub fn lookup_roles(base: &Path, collection: bool) -> Result<Vec<PathBuf>> {
    if !collection {
        return Ok(vec![base.to_path_buf()]);
    }

    let collection_roles = base.join(paths::COLLECTION_ROLES_DIR);
    let roles_dir = if collection_roles.is_dir() {
        collection_roles
    } else {
        base.to_path_buf()
    };

    let mut roles = Vec::new();
    let entries = std::fs::read_dir(&roles_dir).map_err(|e| ArgSpecsError::io(&roles_dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| ArgSpecsError::io(&roles_dir, e))?;
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if path.is_dir() && !hidden {
            roles.push(path);
        }
    }

    roles.sort();
    Ok(roles)
}

/// Human readable role name used in logs
pub fn role_name(role_dir: &Path) -> String {
    role_dir
        .canonicalize()
        .ok()
        .as_deref()
        .unwrap_or(role_dir)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| role_dir.display().to_string())
}
