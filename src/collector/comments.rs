//! Best-effort extraction of per-variable comments from a variables file.
//!
//! YAML parsers drop comments, so the raw text is scanned line by line: a
//! top-level key (no indentation) is documented by the contiguous block of
//! `#` lines directly above it. A blank line breaks the block.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Where a top-level key was found and the comment block above it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAnnotation {
    /// 1-based line number of the key
    pub line: usize,
    pub comment: Option<String>,
}

fn top_level_key_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^(?:"([^"]+)"|'([^']+)'|([A-Za-z_][A-Za-z0-9_.-]*))\s*:(?:\s|$)"#)
            .expect("top-level key pattern is valid")
    })
}

/// Scan `text` for top-level keys. The first occurrence of a key wins.
pub fn scan_annotations(text: &str) -> HashMap<String, KeyAnnotation> {
    let mut annotations = HashMap::new();
    let mut pending: Vec<String> = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim_end();

        if let Some(comment) = line.trim_start().strip_prefix('#') {
            // Indented comments belong to nested content
            if line.starts_with('#') {
                pending.push(comment.trim().to_string());
            } else {
                pending.clear();
            }
            continue;
        }

        if let Some(captures) = top_level_key_pattern().captures(line) {
            let key = captures
                .get(1)
                .or_else(|| captures.get(2))
                .or_else(|| captures.get(3))
                .map(|m| m.as_str().to_string());

            if let Some(key) = key {
                annotations.entry(key).or_insert_with(|| KeyAnnotation {
                    line: index + 1,
                    comment: join_comment(&pending),
                });
            }
        }

        pending.clear();
    }

    annotations
}

fn join_comment(lines: &[String]) -> Option<String> {
    let text = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
