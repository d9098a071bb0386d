//! # README Documentation
//!
//! Renders a role's `meta/argument_specs.yml` into the managed regions of its
//! `README.md`:
//!
//! ```markdown
//! Role Variables
//! --------------
//! <!--start argument_specs-->
//! | Variable | Description | Required |
//! |:---------|:------------|:---------|
//! |`api_key`| Token for the API | `true` |
//! <!--end argument_specs-->
//!
//! Role Defaults
//! -------------
//! <!--start argument_defaults-->
//! | Variable | Description | Default |
//! |:---------|:------------|:--------|
//! |`timeout`| Request timeout | `30` |
//! <!--end argument_defaults-->
//! ```
//!
//! A README without one of the marker pairs is not an error: that section is
//! skipped with a warning.

pub mod patch;
pub mod render;

pub use patch::{patch_document, PatchOutcome, RegionReport, RegionState};
pub use render::{render_section, render_tables, RenderedTable, Section, TableRow};

use crate::collector::spec_path;
use crate::config::ReadmeConfig;
use crate::constants::paths;
use crate::error::{ArgSpecsError, Result};
use crate::spec::SpecDocument;
use crate::utils::fs::{read_required, write_atomic};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Result of documenting one role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    pub readme_path: PathBuf,
    pub regions: Vec<RegionReport>,
    /// Whether README.md was rewritten on disk
    pub written: bool,
}

pub fn readme_path(role_dir: &Path) -> PathBuf {
    role_dir.join(paths::README_FILE)
}

/// Render the specification of `role_dir` into its README.
///
/// With `config.dry_run` the patched README is written to `out` and the file
/// on disk is left alone.
pub fn document_role<W: Write>(
    role_dir: &Path,
    config: &ReadmeConfig,
    out: &mut W,
) -> Result<DocumentOutcome> {
    let readme_path = readme_path(role_dir);
    let readme = read_required(&readme_path)?;
    let document = SpecDocument::load(&spec_path(role_dir))?;

    let tables = render_tables(&document, config.table_format);
    let outcome = patch_document(&readme, &tables, config.diff_mode);

    for region in &outcome.regions {
        match region.state {
            RegionState::MarkerMissing => {
                let warning = ArgSpecsError::marker_not_found(
                    region.section.title(),
                    region.section.start_marker(),
                );
                warn!(readme = %readme_path.display(), "{warning}, section skipped");
            }
            _ if !region.added.is_empty() => {
                debug!(
                    section = %region.section,
                    added = ?region.added,
                    "Documented variables"
                );
            }
            _ => {}
        }
    }

    if config.dry_run {
        out.write_all(outcome.document.as_bytes())
            .map_err(|e| ArgSpecsError::write(Path::new("<stdout>"), e))?;
        return Ok(DocumentOutcome {
            readme_path,
            regions: outcome.regions,
            written: false,
        });
    }

    let written = outcome.changed();
    if written {
        info!(readme = %readme_path.display(), "Writing updated README");
        write_atomic(&readme_path, &outcome.document)?;
    } else {
        debug!(readme = %readme_path.display(), "README already up to date");
    }

    Ok(DocumentOutcome {
        readme_path,
        regions: outcome.regions,
        written,
    })
}
