//! Error types shared by the collector, renderer and README patcher.
//!
//! Every error carries the path of the file it concerns so that the runner can
//! report it against the role being processed.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgSpecsError {
    /// A file the current pipeline cannot work without is absent
    #[error("Required input not found: {}", .path.display())]
    MissingInput { path: PathBuf },

    /// Malformed YAML, or YAML with an unexpected shape
    #[error("Parse error in '{}'{}: {reason}", .path.display(), format_location(.line, .column))]
    Parse {
        path: PathBuf,
        line: Option<usize>,
        column: Option<usize>,
        reason: String,
    },

    /// README lacks the marker pair for a section
    #[error("Marker '{marker}' not found for section '{section}'")]
    MarkerNotFound { section: String, marker: String },

    #[error("Failed to write '{}': {reason}", .path.display())]
    Write { path: PathBuf, reason: String },

    #[error("Failed to read '{}': {reason}", .path.display())]
    Io { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

fn format_location(line: &Option<usize>, column: &Option<usize>) -> String {
    match (line, column) {
        (Some(line), Some(column)) => format!(" at line {line} column {column}"),
        (Some(line), None) => format!(" at line {line}"),
        _ => String::new(),
    }
}

impl ArgSpecsError {
    pub fn missing_input<P: Into<PathBuf>>(path: P) -> Self {
        Self::MissingInput { path: path.into() }
    }

    /// Build a parse error from a YAML failure, keeping its location
    pub fn yaml(path: &Path, error: &serde_yaml::Error) -> Self {
        let location = error.location();
        Self::Parse {
            path: path.to_path_buf(),
            line: location.as_ref().map(|l| l.line()),
            column: location.as_ref().map(|l| l.column()),
            reason: error.to_string(),
        }
    }

    /// Build a parse error for well-formed YAML with the wrong structure
    pub fn invalid_structure<R: Into<String>>(path: &Path, reason: R) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            line: None,
            column: None,
            reason: reason.into(),
        }
    }

    pub fn marker_not_found<S: Into<String>, M: Into<String>>(section: S, marker: M) -> Self {
        Self::MarkerNotFound {
            section: section.into(),
            marker: marker.into(),
        }
    }

    pub fn write<E: std::fmt::Display>(path: &Path, error: E) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            reason: error.to_string(),
        }
    }

    pub fn io<E: std::fmt::Display>(path: &Path, error: E) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            reason: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ArgSpecsError>;
