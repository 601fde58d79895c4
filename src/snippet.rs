//! Code snippet extraction for error reports.
//!
//! Pulls a window of source lines around the line an error was raised on so
//! the debug bar can show the code next to the report. Extraction is best
//! effort: a missing or unreadable file yields an empty snippet, never an
//! error.

use std::fs;
use std::path::Path;

use serde::Serialize;

/// Number of lines shown on each side of the error line.
pub const DEFAULT_CONTEXT_LINES: usize = 5;

/// A single numbered source line in a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnippetLine {
    /// 1-based line number.
    pub number: usize,

    /// Line content with trailing whitespace trimmed.
    pub content: String,
}

/// Extracts up to `context` lines on each side of `line` (1-based) from the
/// file at `path`. The window is clamped to the file; a line past the end of
/// the file yields an empty snippet.
pub fn extract(path: &Path, line: usize, context: usize) -> Vec<SnippetLine> {
    let Ok(source) = fs::read_to_string(path) else {
        return Vec::new();
    };

    let lines: Vec<&str> = source.lines().collect();
    let start = line.saturating_sub(context + 1);
    let end = (line + context).min(lines.len());
    if start >= end {
        return Vec::new();
    }

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, content)| SnippetLine {
            number: start + i + 1,
            content: content.trim_end().to_string(),
        })
        .collect()
}
