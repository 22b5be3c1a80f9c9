use crate::model::Record;
use std::path::Path;

/// Parse a user-supplied index. Anything that is not a positive integer
/// returns `None`, which fails every bounds check downstream — bad input
/// reads as "not found", never a crash.
pub fn parse_index(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok()
}

/// Bounds check against a 1-based, contiguous index space.
pub fn in_range(index: usize, len: usize) -> bool {
    index >= 1 && index <= len
}

/// The file name as shown in messages: just the final path component.
pub fn display_name(name: &str) -> &str {
    Path::new(name)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(name)
}

/// Tag lines with their 1-based position.
pub fn number_lines(lines: Vec<String>) -> Vec<Record> {
    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| Record { index: i + 1, text })
        .collect()
}
