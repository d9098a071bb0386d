//! # Variable Collector
//!
//! Infers `meta/argument_specs.yml` from a role's variable files.
//!
//! For every variable of `defaults/main.yml` and `vars/main.yml` that the
//! specification does not list yet, an entry is appended:
//!
//! - variables from `vars/` are `required: true`
//! - variables only in `defaults/` keep their value as `default`
//! - a comment block directly above the variable becomes its `description`
//!
//! Existing entries are never modified, and the file is only rewritten when
//! something was added, so repeated runs are byte-for-byte stable.

pub mod comments;
pub mod merge;
pub mod variables;

pub use merge::{merge_variables, MergeOutcome};
pub use variables::{DiscoveredVariable, VariableFile, VariableSource};

use crate::constants::paths;
use crate::error::Result;
use crate::spec::SpecDocument;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use variables::load_variable_file;

/// Result of collecting one role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOutcome {
    pub spec_path: PathBuf,
    pub merge: MergeOutcome,
    /// Whether the specification file was (re)written
    pub written: bool,
}

/// Location of the specification file of a role
pub fn spec_path(role_dir: &Path) -> PathBuf {
    role_dir
        .join(paths::META_DIR)
        .join(paths::ARGUMENT_SPECS_FILE)
}

/// Run the collector on a single role directory
pub fn collect_role(role_dir: &Path) -> Result<CollectOutcome> {
    let spec_path = spec_path(role_dir);
    let existing = SpecDocument::load_optional(&spec_path)?;
    let spec_existed = existing.is_some();
    let mut document = existing.unwrap_or_default();

    let defaults = load_variables(role_dir, VariableSource::Defaults)?;
    let vars = load_variables(role_dir, VariableSource::Vars)?;

    let merge = merge_variables(&mut document, &defaults, &vars)?;

    if !merge.has_changes() {
        if spec_existed {
            debug!(
                spec = %spec_path.display(),
                "Argument specification already lists every variable"
            );
        } else {
            info!(role_dir = %role_dir.display(), "No variables found");
        }
        return Ok(CollectOutcome {
            spec_path,
            merge,
            written: false,
        });
    }

    info!(
        spec = %spec_path.display(),
        added = merge.added.len(),
        "Writing argument specification"
    );
    document.save(&spec_path)?;

    Ok(CollectOutcome {
        spec_path,
        merge,
        written: true,
    })
}

fn load_variables(role_dir: &Path, source: VariableSource) -> Result<Vec<DiscoveredVariable>> {
    match load_variable_file(role_dir, source)? {
        Some(file) => {
            debug!(
                file = %file.path.display(),
                count = file.variables.len(),
                "Parsed variables"
            );
            Ok(file.variables)
        }
        None => {
            debug!(role_dir = %role_dir.display(), %source, "No variables file");
            Ok(Vec::new())
        }
    }
}
