//! Category list parsing (`categories.txt`).
//!
//! One entry per line, either `label,milestone` or a bare `category` that
//! serves as both. Blank lines and `#` comments are ignored.

use std::fmt;

/// A single label-to-milestone assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEntry {
    pub label: String,
    pub milestone: String,
}

impl CategoryEntry {
    pub fn new(label: impl Into<String>, milestone: impl Into<String>) -> Self {
        Self { label: label.into(), milestone: milestone.into() }
    }
}

/// A non-comment line that could not be turned into an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number in the source file.
    pub line_number: usize,
    pub content: String,
    pub reason: &'static str,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({})", self.line_number, self.content, self.reason)
    }
}

/// Returns true for lines that carry no data.
pub(crate) fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Lazily parse category lines in file order.
pub fn parse_categories(
    content: &str,
) -> impl Iterator<Item = Result<CategoryEntry, MalformedLine>> + '_ {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !is_ignorable(line))
        .map(|(index, line)| parse_line(index + 1, line.trim()))
}

fn parse_line(line_number: usize, line: &str) -> Result<CategoryEntry, MalformedLine> {
    let (label, milestone) = match line.split_once(',') {
        Some((label, milestone)) => (label.trim(), milestone.trim()),
        None => (line, line),
    };

    let reason = if label.is_empty() {
        "empty label"
    } else if milestone.is_empty() {
        "empty milestone"
    } else {
        return Ok(CategoryEntry::new(label, milestone));
    };

    Err(MalformedLine { line_number, content: line.to_string(), reason })
}
