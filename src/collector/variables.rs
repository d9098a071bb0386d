//! Loading of a role's `defaults/` and `vars/` files.

use super::comments::scan_annotations;
use crate::constants::paths;
use crate::error::{ArgSpecsError, Result};
use crate::utils::fs::read_optional;
use serde_yaml::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which role file a variable was defined in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableSource {
    Defaults,
    Vars,
}

impl VariableSource {
    fn directory(self) -> &'static str {
        match self {
            VariableSource::Defaults => paths::DEFAULTS_DIR,
            VariableSource::Vars => paths::VARS_DIR,
        }
    }
}

impl fmt::Display for VariableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directory())
    }
}

/// A top-level variable found in a defaults or vars file
#[derive(Debug, Clone, PartialEq)]
pub struct DiscoveredVariable {
    pub name: String,
    pub value: Value,
    pub source: VariableSource,
    /// 1-based line of the key, when it could be located in the raw text
    pub line: Option<usize>,
    pub description: Option<String>,
}

/// Variables loaded from one file
#[derive(Debug, Clone, PartialEq)]
pub struct VariableFile {
    pub path: PathBuf,
    pub source: VariableSource,
    pub variables: Vec<DiscoveredVariable>,
}

/// Locate the variables file for `source`, trying `main.yml` then `main.yaml`
pub fn variable_file_path(role_dir: &Path, source: VariableSource) -> Option<PathBuf> {
    let dir = role_dir.join(source.directory());
    paths::VARIABLE_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Load the `source` variables of a role; `None` when the role has no such file
pub fn load_variable_file(role_dir: &Path, source: VariableSource) -> Result<Option<VariableFile>> {
    let Some(path) = variable_file_path(role_dir, source) else {
        return Ok(None);
    };

    let Some(text) = read_optional(&path)? else {
        return Ok(None);
    };

    let variables = parse_variables(&path, &text, source)?;
    Ok(Some(VariableFile {
        path,
        source,
        variables,
    }))
}

/// Parse the text of a variables file into discovered variables, in file order.
///
/// Empty documents (no content, only comments, or an explicit `null`) hold no
/// variables. Any other top level than a mapping is a parse error.
pub fn parse_variables(
    path: &Path,
    text: &str,
    source: VariableSource,
) -> Result<Vec<DiscoveredVariable>> {
    let value: Value = serde_yaml::from_str(text).map_err(|e| ArgSpecsError::yaml(path, &e))?;

    let mapping = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(ArgSpecsError::invalid_structure(
                path,
                format!(
                    "expected a mapping of variable names, found {}",
                    value_kind(&other)
                ),
            ))
        }
    };

    let annotations = scan_annotations(text);
    let mut variables = Vec::with_capacity(mapping.len());

    for (key, value) in mapping {
        let name = match key {
            Value::String(name) => name,
            other => {
                return Err(ArgSpecsError::invalid_structure(
                    path,
                    format!("variable name {other:?} is not a string"),
                ))
            }
        };

        let annotation = annotations.get(&name);
        variables.push(DiscoveredVariable {
            line: annotation.map(|a| a.line),
            description: annotation.and_then(|a| a.comment.clone()),
            name,
            value,
            source,
        });
    }

    Ok(variables)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
