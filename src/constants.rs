//! # Role Layout and Document Constants
//!
//! File locations inside an Ansible role, README markers, and the fixed table
//! headers used when rendering argument specifications.

/// Paths relative to a role directory
pub mod paths {
    pub const DEFAULTS_DIR: &str = "defaults";
    pub const VARS_DIR: &str = "vars";
    pub const META_DIR: &str = "meta";

    /// Variable file names, in lookup order
    pub const VARIABLE_FILE_NAMES: &[&str] = &["main.yml", "main.yaml"];

    pub const ARGUMENT_SPECS_FILE: &str = "argument_specs.yml";
    pub const README_FILE: &str = "README.md";

    /// Ansible collections keep their roles under this directory
    pub const COLLECTION_ROLES_DIR: &str = "roles";
}

/// Keys of the persisted `argument_specs.yml` document
pub mod spec_keys {
    pub const ARGUMENT_SPECS: &str = "argument_specs";
    pub const ENTRY_POINT: &str = "main";
    pub const OPTIONS: &str = "options";
}

/// README managed region markers
pub mod markers {
    pub const VARIABLES_START: &str = "<!--start argument_specs-->";
    pub const VARIABLES_END: &str = "<!--end argument_specs-->";
    pub const DEFAULTS_START: &str = "<!--start argument_defaults-->";
    pub const DEFAULTS_END: &str = "<!--end argument_defaults-->";
}

/// Markdown table headers
pub mod tables {
    pub const VARIABLES_TITLE: &str = "Role Variables";
    pub const DEFAULTS_TITLE: &str = "Role Defaults";

    pub const VARIABLES_HEADER: &str = "\
| Variable | Description | Required |
|:---------|:------------|:---------|
";

    pub const DEFAULTS_HEADER: &str = "\
| Variable | Description | Default |
|:---------|:------------|:--------|
";

    pub const TWO_COLUMNS_HEADER: &str = "\
| Variable | Description |
|:---------|:------------|
";
}

/// Environment variables read by the configuration layer
pub mod env {
    pub const TWO_COLUMNS: &str = "SPECS2README_TWO_COLUMNS";
    pub const NO_DIFF: &str = "SPECS2README_NO_DIFF";
}
