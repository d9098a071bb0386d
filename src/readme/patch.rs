//! # Document Patcher
//!
//! Rewrites the managed regions of a README. A region is the text strictly
//! between a section's start and end marker; nothing outside a region is ever
//! modified.
//!
//! Each section is patched independently and moves through
//! `Searching -> FoundStart -> FoundEnd -> Replaced`, or ends in
//! `MarkerMissing` when its markers cannot be found in order.
//!
//! In [`DiffMode::Diff`] rows already present in a region are kept exactly as
//! written; only variables whose name is not yet listed are added, right after
//! the last table row. Running the patcher again with the same specification
//! therefore leaves the document unchanged. [`DiffMode::Replace`] discards the
//! region and writes a fresh table.

use super::render::{rows_markdown, RenderedTable, Section, TableRow};
use crate::config::DiffMode;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionState {
    Searching,
    FoundStart,
    FoundEnd,
    Replaced,
    MarkerMissing,
}

/// What happened to one section's region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionReport {
    pub section: Section,
    pub state: RegionState,
    /// Variables whose rows were written into the region
    pub added: Vec<String>,
    /// Whether the region text differs from before
    pub changed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub document: String,
    pub regions: Vec<RegionReport>,
}

impl PatchOutcome {
    pub fn changed(&self) -> bool {
        self.regions.iter().any(|region| region.changed)
    }
}

/// Patch every table into its section's region of `document`
pub fn patch_document(document: &str, tables: &[RenderedTable], mode: DiffMode) -> PatchOutcome {
    let mut text = document.to_string();
    let mut regions = Vec::with_capacity(tables.len());

    for table in tables {
        let report = patch_region(&mut text, table, mode);
        regions.push(report);
    }

    PatchOutcome {
        document: text,
        regions,
    }
}

/// Patch a single section's region in place
pub fn patch_region(text: &mut String, table: &RenderedTable, mode: DiffMode) -> RegionReport {
    let section = table.section;
    let start_marker = section.start_marker();
    let end_marker = section.end_marker();

    let mut state = RegionState::Searching;
    let mut report = RegionReport {
        section,
        state,
        added: Vec::new(),
        changed: false,
    };

    let Some(start) = text.find(start_marker) else {
        report.state = RegionState::MarkerMissing;
        return report;
    };
    state = transition(section, state, RegionState::FoundStart);

    let content_start = start + start_marker.len();
    let Some(relative_end) = text[content_start..].find(end_marker) else {
        report.state = RegionState::MarkerMissing;
        return report;
    };
    state = transition(section, state, RegionState::FoundEnd);

    let content_end = content_start + relative_end;
    let current = &text[content_start..content_end];

    let (replacement, added) = match mode {
        DiffMode::Replace => (
            format!("\n{}", table.to_markdown()),
            table.rows.iter().map(|row| row.name.clone()).collect(),
        ),
        DiffMode::Diff => merge_rows(current, table),
    };

    report.changed = replacement != current;
    report.added = added;
    if report.changed {
        text.replace_range(content_start..content_end, &replacement);
    }

    report.state = transition(section, state, RegionState::Replaced);
    report
}

fn transition(section: Section, from: RegionState, to: RegionState) -> RegionState {
    trace!(%section, ?from, ?to, "Region state transition");
    to
}

fn documented_row_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*\|\s*`([^`]+)`").expect("documented row pattern is valid")
    })
}

/// Names of the variables already listed in a region's table rows
pub fn documented_names(region: &str) -> HashSet<String> {
    documented_row_pattern()
        .captures_iter(region)
        .filter_map(|captures| captures.get(1))
        .map(|name| name.as_str().trim().to_string())
        .collect()
}

/// Keep `current` verbatim and add rows for variables it does not list yet
fn merge_rows(current: &str, table: &RenderedTable) -> (String, Vec<String>) {
    let documented = documented_names(current);
    let missing: Vec<&TableRow> = table
        .rows
        .iter()
        .filter(|row| !documented.contains(&row.name))
        .collect();

    if missing.is_empty() {
        return (current.to_string(), Vec::new());
    }

    let added = missing.iter().map(|row| row.name.clone()).collect();
    let new_rows = rows_markdown(missing.into_iter());

    let merged = match last_table_line_end(current) {
        Some((offset, has_newline)) => {
            let mut merged = String::with_capacity(current.len() + new_rows.len() + 1);
            merged.push_str(&current[..offset]);
            if !has_newline {
                merged.push('\n');
            }
            merged.push_str(&new_rows);
            merged.push_str(&current[offset..]);
            merged
        }
        None => {
            let mut merged = current.to_string();
            if !merged.ends_with('\n') {
                merged.push('\n');
            }
            merged.push_str(table.header);
            merged.push_str(&new_rows);
            merged
        }
    };

    (merged, added)
}

/// Byte offset just past the last line that starts a table row, and whether
/// that line ended with a newline
fn last_table_line_end(region: &str) -> Option<(usize, bool)> {
    let mut offset = 0;
    let mut last = None;

    for line in region.split_inclusive('\n') {
        offset += line.len();
        if line.trim_start().starts_with('|') {
            last = Some((offset, line.ends_with('\n')));
        }
    }

    last
}
