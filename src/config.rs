use crate::constants::env;
use crate::error::{ArgSpecsError, Result};
use std::path::{Path, PathBuf};

/// Options for `vars2specs`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    pub role_dir: PathBuf,
    pub collection: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            role_dir: PathBuf::from("."),
            collection: false,
        }
    }
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<()> {
        validate_role_dir(&self.role_dir)
    }
}

/// Table layout used when rendering specifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    TwoColumns,
    #[default]
    ThreeColumns,
}

/// How the README patcher treats rows already present in a managed region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiffMode {
    /// Keep existing rows verbatim and only add rows for unlisted variables
    #[default]
    Diff,
    /// Replace the whole region with a freshly rendered table
    Replace,
}

/// Options for `specs2readme`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadmeConfig {
    pub role_dir: PathBuf,
    pub collection: bool,
    pub dry_run: bool,
    pub table_format: TableFormat,
    pub diff_mode: DiffMode,
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            role_dir: PathBuf::from("."),
            collection: false,
            dry_run: false,
            table_format: TableFormat::ThreeColumns,
            diff_mode: DiffMode::Diff,
        }
    }
}

impl ReadmeConfig {
    /// Defaults overlaid with the `SPECS2README_*` environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if env_flag(env::TWO_COLUMNS) {
            config.table_format = TableFormat::TwoColumns;
        }

        if env_flag(env::NO_DIFF) {
            config.diff_mode = DiffMode::Replace;
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        validate_role_dir(&self.role_dir)
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| is_truthy(&value))
        .unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn validate_role_dir(role_dir: &Path) -> Result<()> {
    if !role_dir.is_dir() {
        return Err(ArgSpecsError::Configuration(format!(
            "role directory '{}' does not exist or is not a directory",
            role_dir.display()
        )));
    }
    Ok(())
}
