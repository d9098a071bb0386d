//! README integration tests
//!
//! Runs `document_role` against role directories on disk, covering diff,
//! no-diff and dry-run behaviour.

mod common;

use argspecs::collector::collect_role;
use argspecs::config::{DiffMode, ReadmeConfig, TableFormat};
use argspecs::readme::{document_role, RegionState};
use argspecs::ArgSpecsError;
use common::{RoleFixture, EMPTY_README};

const SPEC: &str = "\
argument_specs:
  main:
    options:
      old_var:
        description: Old variable
        required: true
      new_var:
        description: New variable
        required: true
      timeout:
        description: Request timeout
        default: 30
";

fn config(role: &RoleFixture) -> ReadmeConfig {
    ReadmeConfig {
        role_dir: role.path().to_path_buf(),
        ..ReadmeConfig::default()
    }
}

fn document(role: &RoleFixture, config: &ReadmeConfig) -> Vec<u8> {
    let mut out = Vec::new();
    document_role(role.path(), config, &mut out).unwrap();
    out
}

#[test]
fn test_renders_both_sections_into_empty_regions() {
    let role = RoleFixture::new("web").with_spec(SPEC).with_readme(EMPTY_README);

    document(&role, &config(&role));

    assert_eq!(
        role.readme_text(),
        "\
# Example role

Role Variables
--------------
<!--start argument_specs-->
| Variable | Description | Required |
|:---------|:------------|:---------|
|`old_var`| Old variable | `true` |
|`new_var`| New variable | `true` |
<!--end argument_specs-->

Role Defaults
-------------
<!--start argument_defaults-->
| Variable | Description | Default |
|:---------|:------------|:--------|
|`timeout`| Request timeout | `30` |
<!--end argument_defaults-->

License
-------
MIT
"
    );
}

#[test]
fn test_second_run_leaves_readme_byte_identical() {
    let role = RoleFixture::new("web").with_spec(SPEC).with_readme(EMPTY_README);
    let config = config(&role);

    document(&role, &config);
    let first = role.readme_text();

    let mut out = Vec::new();
    let outcome = document_role(role.path(), &config, &mut out).unwrap();

    assert!(!outcome.written);
    assert_eq!(role.readme_text(), first);
}

#[test]
fn test_diff_mode_keeps_stale_rows_verbatim() {
    let readme = "<!--start argument_specs-->\n|`old_var`|desc|val|\n<!--end argument_specs-->\n";
    let role = RoleFixture::new("web").with_spec(SPEC).with_readme(readme);

    document(&role, &config(&role));

    assert_eq!(
        role.readme_text(),
        "<!--start argument_specs-->\n|`old_var`|desc|val|\n|`new_var`| New variable | `true` |\n<!--end argument_specs-->\n"
    );
}

#[test]
fn test_no_diff_mode_replaces_rows_in_spec_order() {
    let readme = "<!--start argument_specs-->\n|`old_var`|desc|val|\n<!--end argument_specs-->\n";
    let role = RoleFixture::new("web").with_spec(SPEC).with_readme(readme);
    let config = ReadmeConfig {
        diff_mode: DiffMode::Replace,
        ..config(&role)
    };

    document(&role, &config);

    let text = role.readme_text();
    assert!(!text.contains("|`old_var`|desc|val|"));
    let old = text.find("|`old_var`| Old variable | `true` |").unwrap();
    let new = text.find("|`new_var`| New variable | `true` |").unwrap();
    assert!(old < new);
}

#[test]
fn test_required_and_default_entries_stay_in_their_tables() {
    let role = RoleFixture::new("web").with_spec(SPEC).with_readme(EMPTY_README);

    document(&role, &config(&role));

    let text = role.readme_text();
    let defaults_start = text.find("<!--start argument_defaults-->").unwrap();
    let (variables_part, defaults_part) = text.split_at(defaults_start);
    assert!(variables_part.contains("`old_var`"));
    assert!(!variables_part.contains("`timeout`"));
    assert!(defaults_part.contains("`timeout`"));
    assert!(!defaults_part.contains("`new_var`"));
}

#[test]
fn test_two_column_format() {
    let role = RoleFixture::new("web").with_spec(SPEC).with_readme(EMPTY_README);
    let config = ReadmeConfig {
        table_format: TableFormat::TwoColumns,
        ..config(&role)
    };

    document(&role, &config);

    let text = role.readme_text();
    assert!(text.contains("|`old_var`| Required: `true`<br>Old variable |"));
    assert!(text.contains("|`timeout`<br><br>Default: `30` | Request timeout |"));
    assert!(!text.contains("| Required |"));
}

#[test]
fn test_dry_run_writes_stdout_only() {
    let role = RoleFixture::new("web").with_spec(SPEC).with_readme(EMPTY_README);
    let config = ReadmeConfig {
        dry_run: true,
        ..config(&role)
    };

    let out = document(&role, &config);

    assert_eq!(role.readme_text(), EMPTY_README);
    let printed = String::from_utf8(out).unwrap();
    assert!(printed.contains("|`timeout`| Request timeout | `30` |"));
    assert!(printed.ends_with("MIT\n"));
}

#[test]
fn test_missing_markers_are_skipped() {
    let readme = "# Role\n\n<!--start argument_defaults-->\n<!--end argument_defaults-->\n";
    let role = RoleFixture::new("web").with_spec(SPEC).with_readme(readme);

    let mut out = Vec::new();
    let outcome = document_role(role.path(), &config(&role), &mut out).unwrap();

    assert_eq!(outcome.regions[0].state, RegionState::MarkerMissing);
    assert_eq!(outcome.regions[1].state, RegionState::Replaced);
    assert!(role.readme_text().contains("|`timeout`|"));
    assert!(!role.readme_text().contains("`old_var`"));
}

#[test]
fn test_missing_spec_is_an_error() {
    let role = RoleFixture::new("web").with_readme(EMPTY_README);

    let mut out = Vec::new();
    let err = document_role(role.path(), &config(&role), &mut out).unwrap_err();

    assert!(matches!(err, ArgSpecsError::MissingInput { .. }));
    assert_eq!(role.readme_text(), EMPTY_README);
}

#[test]
fn test_missing_readme_is_an_error() {
    let role = RoleFixture::new("web").with_spec(SPEC);

    let mut out = Vec::new();
    let err = document_role(role.path(), &config(&role), &mut out).unwrap_err();

    assert!(matches!(err, ArgSpecsError::MissingInput { .. }));
}

#[test]
fn test_collect_then_document_round_trip() {
    let role = RoleFixture::new("web")
        .with_defaults("# Request timeout\ntimeout: 30\n")
        .with_vars("# Token for the API\napi_key:\n")
        .with_readme(EMPTY_README);

    collect_role(role.path()).unwrap();
    document(&role, &config(&role));

    let text = role.readme_text();
    assert!(text.contains("|`api_key`| Token for the API | `true` |"));
    assert!(text.contains("|`timeout`| Request timeout | `30` |"));

    // Nothing new: neither file changes
    let spec_before = role.spec_text();
    collect_role(role.path()).unwrap();
    document(&role, &config(&role));
    assert_eq!(role.spec_text(), spec_before);
    assert_eq!(role.readme_text(), text);
}

#[cfg(unix)]
#[test]
fn test_rewrite_keeps_readme_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let role = RoleFixture::new("web").with_spec(SPEC).with_readme(EMPTY_README);
    let readme = role.path().join("README.md");
    std::fs::set_permissions(&readme, std::fs::Permissions::from_mode(0o644)).unwrap();

    let outcome = document_role(role.path(), &config(&role), &mut Vec::new()).unwrap();

    assert!(outcome.written);
    let mode = std::fs::metadata(&readme).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}
