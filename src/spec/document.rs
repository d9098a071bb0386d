//! # Specification Document
//!
//! The persisted `meta/argument_specs.yml` of a role:
//!
//! ```yaml
//! argument_specs:
//!   main:
//!     options:
//!       timeout:
//!         description: Request timeout
//!         default: 30
//!       api_key:
//!         required: true
//! ```
//!
//! The document keeps the raw YAML mapping it was loaded from. Entries already
//! present are serialized exactly as they were read; only new entries are
//! added, at the end of `options`. Everything else in the file (other entry
//! points, `short_description`, extra option keys) passes through unchanged.

use super::entry::ArgumentEntry;
use crate::constants::spec_keys;
use crate::error::{ArgSpecsError, Result};
use crate::utils::fs::{read_optional, read_required, write_atomic};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    root: Mapping,
    entries: Vec<(String, ArgumentEntry)>,
}

impl Default for SpecDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SpecDocument {
    /// An empty document with the `argument_specs.main.options` skeleton
    pub fn new() -> Self {
        let mut options_parent = Mapping::new();
        options_parent.insert(spec_keys::OPTIONS.into(), Value::Mapping(Mapping::new()));

        let mut entry_points = Mapping::new();
        entry_points.insert(spec_keys::ENTRY_POINT.into(), Value::Mapping(options_parent));

        let mut root = Mapping::new();
        root.insert(spec_keys::ARGUMENT_SPECS.into(), Value::Mapping(entry_points));

        Self {
            root,
            entries: Vec::new(),
        }
    }

    /// Parse a document; `path` is only used for error reporting
    pub fn parse(path: &Path, text: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text).map_err(|e| ArgSpecsError::yaml(path, &e))?;

        let mut root = match value {
            Value::Null => Mapping::new(),
            Value::Mapping(mapping) => mapping,
            _ => {
                return Err(ArgSpecsError::invalid_structure(
                    path,
                    "top level of the argument specification must be a mapping",
                ))
            }
        };

        let options = options_mut(&mut root, path)?;
        let mut entries = Vec::with_capacity(options.len());
        for (key, value) in options.iter() {
            let name = key.as_str().ok_or_else(|| {
                ArgSpecsError::invalid_structure(path, format!("option name {key:?} is not a string"))
            })?;
            let entry = ArgumentEntry::from_value(value).map_err(|e| {
                ArgSpecsError::invalid_structure(path, format!("option '{name}': {e}"))
            })?;
            entries.push((name.to_string(), entry));
        }

        Ok(Self { root, entries })
    }

    /// Load a document, returning `None` when the file does not exist
    pub fn load_optional(path: &Path) -> Result<Option<Self>> {
        match read_optional(path)? {
            Some(text) => Self::parse(path, &text).map(Some),
            None => Ok(None),
        }
    }

    /// Load a document that must exist
    pub fn load(path: &Path) -> Result<Self> {
        let text = read_required(path)?;
        Self::parse(path, &text)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(existing, _)| existing == name)
    }

    pub fn get(&self, name: &str) -> Option<&ArgumentEntry> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, entry)| entry)
    }

    /// Entries in document order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ArgumentEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add an entry unless one with the same name exists.
    ///
    /// Returns `false`, leaving the document untouched, when `name` is
    /// already specified.
    pub fn insert_new(&mut self, name: &str, entry: ArgumentEntry) -> Result<bool> {
        if self.contains(name) {
            return Ok(false);
        }

        let value = serde_yaml::to_value(&entry)
            .map_err(|e| ArgSpecsError::Serialization(format!("option '{name}': {e}")))?;

        // The skeleton was validated by `parse` / built by `new`
        options_mut(&mut self.root, Path::new(spec_keys::ARGUMENT_SPECS))?
            .insert(Value::String(name.to_string()), value);
        self.entries.push((name.to_string(), entry));
        Ok(true)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(&self.root)
            .map_err(|e| ArgSpecsError::Serialization(format!("argument specification: {e}")))
    }

    /// Serialize and atomically replace the file at `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = self.to_yaml_string()?;
        debug!(path = %path.display(), entries = self.len(), "Writing argument specification");
        write_atomic(path, &text)
    }
}

/// Walk to `argument_specs.main.options`, creating missing levels
fn options_mut<'a>(root: &'a mut Mapping, path: &Path) -> Result<&'a mut Mapping> {
    let entry_points = child_mapping(root, spec_keys::ARGUMENT_SPECS, path)?;
    let entry_point = child_mapping(entry_points, spec_keys::ENTRY_POINT, path)?;
    child_mapping(entry_point, spec_keys::OPTIONS, path)
}

fn child_mapping<'a>(parent: &'a mut Mapping, key: &str, path: &Path) -> Result<&'a mut Mapping> {
    let slot = parent
        .entry(Value::String(key.to_string()))
        .or_insert(Value::Null);

    if slot.is_null() {
        *slot = Value::Mapping(Mapping::new());
    }

    match slot {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(ArgSpecsError::invalid_structure(
            path,
            format!("'{key}' must be a mapping"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXISTING: &str = "\
argument_specs:
  main:
    short_description: Example role
    options:
      timeout:
        description: Request timeout
        default: 30
      mode:
        type: str
        choices:
        - fast
        - slow
        default: fast
";

    #[test]
    fn test_new_document_skeleton() {
        let doc = SpecDocument::new();
        assert_eq!(
            doc.to_yaml_string().unwrap(),
            "argument_specs:\n  main:\n    options: {}\n"
        );
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_existing_document() {
        let doc = SpecDocument::parse(Path::new("argument_specs.yml"), EXISTING).unwrap();
        let names: Vec<&str> = doc.entries().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["timeout", "mode"]);
        let timeout = doc.get("timeout").unwrap();
        assert_eq!(timeout.default, Some(Value::from(30)));
        assert!(!timeout.required);
    }

    #[test]
    fn test_round_trip_preserves_unmodelled_keys() {
        let doc = SpecDocument::parse(Path::new("argument_specs.yml"), EXISTING).unwrap();
        assert_eq!(doc.to_yaml_string().unwrap(), EXISTING);
    }

    #[test]
    fn test_insert_new_never_overwrites() {
        let mut doc = SpecDocument::parse(Path::new("argument_specs.yml"), EXISTING).unwrap();
        let inserted = doc
            .insert_new("timeout", ArgumentEntry::with_default(Value::from(99)))
            .unwrap();
        assert!(!inserted);
        assert_eq!(
            doc.get("timeout").unwrap().default,
            Some(Value::from(30))
        );
        assert_eq!(doc.to_yaml_string().unwrap(), EXISTING);
    }

    #[test]
    fn test_insert_new_appends_at_end() {
        let mut doc = SpecDocument::parse(Path::new("argument_specs.yml"), EXISTING).unwrap();
        assert!(doc.insert_new("api_key", ArgumentEntry::required()).unwrap());
        let yaml = doc.to_yaml_string().unwrap();
        assert!(yaml.ends_with("      api_key:\n        required: true\n"));
    }

    #[test]
    fn test_missing_options_are_created() {
        let doc = SpecDocument::parse(Path::new("a.yml"), "argument_specs:\n  main:\n    options:\n")
            .unwrap();
        assert!(doc.is_empty());

        let doc = SpecDocument::parse(Path::new("a.yml"), "").unwrap();
        assert_eq!(
            doc.to_yaml_string().unwrap(),
            "argument_specs:\n  main:\n    options: {}\n"
        );
    }

    #[test]
    fn test_invalid_structure_is_a_parse_error() {
        let err = SpecDocument::parse(Path::new("a.yml"), "- just\n- a list\n").unwrap_err();
        assert!(matches!(err, ArgSpecsError::Parse { .. }));

        let err = SpecDocument::parse(Path::new("a.yml"), "argument_specs: 3\n").unwrap_err();
        assert!(matches!(err, ArgSpecsError::Parse { .. }));
    }

    #[test]
    fn test_malformed_yaml_is_a_parse_error() {
        let err = SpecDocument::parse(Path::new("a.yml"), "argument_specs: [\n").unwrap_err();
        assert!(matches!(err, ArgSpecsError::Parse { line: Some(_), .. }));
    }
}
