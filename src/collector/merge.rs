//! Additive merge of discovered variables into a specification document.

use super::variables::{DiscoveredVariable, VariableSource};
use crate::error::Result;
use crate::spec::{ArgumentEntry, SpecDocument};
use std::collections::HashSet;
use tracing::debug;

/// What a merge changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Names added to the document, in insertion order
    pub added: Vec<String>,
    /// Names that were already specified and left alone
    pub unchanged: Vec<String>,
}

impl MergeOutcome {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty()
    }
}

/// Reconcile the defaults and vars of a role against `document`.
///
/// Defaults are visited first, then vars, each in file order. A name defined
/// in vars is required even when defaults also sets it. Names already in the
/// document are never touched.
pub fn merge_variables(
    document: &mut SpecDocument,
    defaults: &[DiscoveredVariable],
    vars: &[DiscoveredVariable],
) -> Result<MergeOutcome> {
    let required: HashSet<&str> = vars.iter().map(|v| v.name.as_str()).collect();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut outcome = MergeOutcome::default();

    for variable in defaults.iter().chain(vars.iter()) {
        if !seen.insert(variable.name.as_str()) {
            continue;
        }

        if document.contains(&variable.name) {
            outcome.unchanged.push(variable.name.clone());
            continue;
        }

        let entry = new_entry(variable, required.contains(variable.name.as_str()));
        debug!(
            variable = %variable.name,
            source = %variable.source,
            line = variable.line,
            required = entry.required,
            "Adding argument spec entry"
        );
        document.insert_new(&variable.name, entry)?;
        outcome.added.push(variable.name.clone());
    }

    Ok(outcome)
}

fn new_entry(variable: &DiscoveredVariable, required: bool) -> ArgumentEntry {
    let entry = if required || variable.source == VariableSource::Vars {
        ArgumentEntry::required()
    } else {
        ArgumentEntry::with_default(variable.value.clone())
    };
    entry.described(variable.description.clone())
}
