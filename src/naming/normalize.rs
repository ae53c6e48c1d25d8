//! Structural repair of generated paths.

use std::sync::LazyLock;

use regex::Regex;

use crate::fs::{handle_windows_reserved_name, RESERVED_NAME_MARKER};

static REPEATED_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/{2,}").expect("valid separator regex"));

/// Stand-in for a dot at either end of a segment.
const FULL_WIDTH_DOT: char = '．';

/// Collapse runs of `/` into one.
pub fn collapse_separators(path: &str) -> String {
    REPEATED_SEPARATORS.replace_all(path, "/").into_owned()
}

/// Repair one path segment.
///
/// Trims whitespace, turns a leading and a trailing `.` into a full-width dot
/// and marks reserved device names.
pub fn normalize_segment(segment: &str) -> String {
    let mut segment = segment.trim().to_string();

    if let Some(rest) = segment.strip_prefix('.') {
        segment = format!("{}{}", FULL_WIDTH_DOT, rest);
    }
    if let Some(rest) = segment.strip_suffix('.') {
        segment = format!("{}{}", rest, FULL_WIDTH_DOT);
    }

    handle_windows_reserved_name(&segment, RESERVED_NAME_MARKER)
}

/// Repair every segment of a `/`-separated path.
///
/// Folder segments left empty are dropped; the last segment (the filename)
/// is always kept.
pub fn normalize_path(path: &str) -> String {
    let collapsed = collapse_separators(path);
    let segments: Vec<&str> = collapsed.split('/').collect();
    let last = segments.len() - 1;

    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| (i, normalize_segment(segment)))
        .filter(|(i, segment)| *i == last || !segment.is_empty())
        .map(|(_, segment)| segment)
        .collect::<Vec<_>>()
        .join("/")
}
