//! # Specification Renderer
//!
//! Turns a [`SpecDocument`] into the two README tables: required variables
//! ("Role Variables") and variables with defaults ("Role Defaults").

use crate::config::TableFormat;
use crate::constants::{markers, tables};
use crate::spec::{ArgumentEntry, SpecDocument};
use serde_yaml::Value;
use std::fmt;

/// One of the two documented partitions of a specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Variables,
    Defaults,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Variables, Section::Defaults];

    pub fn title(self) -> &'static str {
        match self {
            Section::Variables => tables::VARIABLES_TITLE,
            Section::Defaults => tables::DEFAULTS_TITLE,
        }
    }

    pub fn start_marker(self) -> &'static str {
        match self {
            Section::Variables => markers::VARIABLES_START,
            Section::Defaults => markers::DEFAULTS_START,
        }
    }

    pub fn end_marker(self) -> &'static str {
        match self {
            Section::Variables => markers::VARIABLES_END,
            Section::Defaults => markers::DEFAULTS_END,
        }
    }

    pub fn header(self, format: TableFormat) -> &'static str {
        match (self, format) {
            (_, TableFormat::TwoColumns) => tables::TWO_COLUMNS_HEADER,
            (Section::Variables, TableFormat::ThreeColumns) => tables::VARIABLES_HEADER,
            (Section::Defaults, TableFormat::ThreeColumns) => tables::DEFAULTS_HEADER,
        }
    }

    /// Required entries go to Role Variables, all others to Role Defaults
    pub fn includes(self, entry: &ArgumentEntry) -> bool {
        match self {
            Section::Variables => entry.required,
            Section::Defaults => !entry.required,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// A rendered table row together with the variable it documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub name: String,
    pub markdown: String,
}

/// A rendered section table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTable {
    pub section: Section,
    pub header: &'static str,
    pub rows: Vec<TableRow>,
}

impl RenderedTable {
    /// Header followed by every row, newline terminated
    pub fn to_markdown(&self) -> String {
        let mut out = String::from(self.header);
        out.push_str(&rows_markdown(self.rows.iter()));
        out
    }
}

/// Join rows into newline-terminated lines
pub fn rows_markdown<'a>(rows: impl Iterator<Item = &'a TableRow>) -> String {
    rows.fold(String::new(), |mut out, row| {
        out.push_str(&row.markdown);
        out.push('\n');
        out
    })
}

/// Render one section of `document`, preserving document order
pub fn render_section(
    document: &SpecDocument,
    section: Section,
    format: TableFormat,
) -> RenderedTable {
    let rows = document
        .entries()
        .filter(|(_, entry)| section.includes(entry))
        .map(|(name, entry)| TableRow {
            name: name.to_string(),
            markdown: render_row(name, entry, section, format),
        })
        .collect();

    RenderedTable {
        section,
        header: section.header(format),
        rows,
    }
}

/// Render both sections, Role Variables first
pub fn render_tables(document: &SpecDocument, format: TableFormat) -> Vec<RenderedTable> {
    Section::ALL
        .iter()
        .map(|section| render_section(document, *section, format))
        .collect()
}

fn render_row(name: &str, entry: &ArgumentEntry, section: Section, format: TableFormat) -> String {
    let description = entry
        .description_text()
        .map(|text| escape_cell(&text))
        .unwrap_or_default();

    match (section, format) {
        (Section::Variables, TableFormat::ThreeColumns) => {
            format!("|`{name}`| {description} | {} |", code_span("true"))
        }
        (Section::Defaults, TableFormat::ThreeColumns) => {
            format!("|`{name}`| {description} | {} |", default_cell(entry))
        }
        (Section::Variables, TableFormat::TwoColumns) => {
            let required = format!("Required: {}", code_span("true"));
            if description.is_empty() {
                format!("|`{name}`| {required} |")
            } else {
                format!("|`{name}`| {required}<br>{description} |")
            }
        }
        (Section::Defaults, TableFormat::TwoColumns) => {
            format!(
                "|`{name}`<br><br>Default: {} | {description} |",
                default_cell(entry)
            )
        }
    }
}

fn default_cell(entry: &ArgumentEntry) -> String {
    let text = entry
        .default
        .as_ref()
        .map(format_value)
        .unwrap_or_else(|| "null".to_string());
    code_span(&text)
}

/// Escape free text for a Markdown table cell
pub fn escape_cell(text: &str) -> String {
    let normalized = text.trim().replace("\r\n", "\n").replace('\r', "\n");
    escape_pipes(&normalized).replace('\n', "<br>")
}

/// Wrap a value in an inline code span that cannot break the table
pub fn code_span(text: &str) -> String {
    if text.is_empty() {
        return "`\"\"`".to_string();
    }

    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let escaped = escape_pipes(&normalized).replace('\n', "\\n");

    if escaped.contains('`') {
        format!("`` {escaped} ``")
    } else {
        format!("`{escaped}`")
    }
}

/// Escape every `|` so the table splitter never sees a cell delimiter.
///
/// A pipe is a delimiter unless preceded by an odd number of backslashes, so
/// backslashes directly before a pipe are doubled and one more is added.
fn escape_pipes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut backslashes = 0;

    for c in text.chars() {
        match c {
            '\\' => backslashes += 1,
            '|' => {
                out.push_str(&"\\".repeat(backslashes * 2 + 1));
                out.push('|');
                backslashes = 0;
            }
            _ => {
                out.push_str(&"\\".repeat(backslashes));
                out.push(c);
                backslashes = 0;
            }
        }
    }
    out.push_str(&"\\".repeat(backslashes));
    out
}

/// Single-line text for a YAML value; collections become compact JSON
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Sequence(_) | Value::Mapping(_) => serde_json::to_string(value)
            .unwrap_or_else(|_| flatten_yaml(value)),
        Value::Tagged(tagged) => format!("{} {}", tagged.tag, format_value(&tagged.value)),
    }
}

fn flatten_yaml(value: &Value) -> String {
    serde_yaml::to_string(value)
        .map(|text| {
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}
