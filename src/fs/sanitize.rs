//! Filesystem-safety helpers for generated names.

/// Suffix appended to a segment whose stem is a Windows device name.
pub const RESERVED_NAME_MARKER: &str = "[downloader_add]";

/// Windows device names (case-insensitive, regardless of extension).
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Characters rejected by common filesystems, with their full-width stand-ins.
const UNSAFE_CHARS: &[(char, char)] = &[
    ('\\', '＼'),
    ('/', '／'),
    (':', '：'),
    ('*', '＊'),
    ('?', '？'),
    ('"', '＂'),
    ('<', '＜'),
    ('>', '＞'),
    ('|', '｜'),
];

/// Replace characters that cannot appear in a file or folder name.
///
/// Illegal characters become their full-width forms, so the text stays
/// readable; control characters are dropped. The path separator is replaced
/// too, the result is always a single path component.
pub fn replace_unsafe_str(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_control())
        .map(|c| {
            UNSAFE_CHARS
                .iter()
                .find(|(unsafe_char, _)| *unsafe_char == c)
                .map(|(_, replacement)| *replacement)
                .unwrap_or(c)
        })
        .collect()
}

/// Whether the part of `segment` before its first `.` is a device name.
pub fn is_reserved_name(segment: &str) -> bool {
    let stem = segment.split('.').next().unwrap_or("");
    RESERVED_NAMES
        .iter()
        .any(|reserved| reserved.eq_ignore_ascii_case(stem))
}

/// Append `marker` to the stem of a reserved device name.
///
/// `CON` becomes `CON<marker>` and `aux.txt` becomes `aux<marker>.txt`. Any
/// other segment is returned unchanged.
pub fn handle_windows_reserved_name(segment: &str, marker: &str) -> String {
    if !is_reserved_name(segment) {
        return segment.to_string();
    }

    match segment.find('.') {
        Some(dot) => format!("{}{}{}", &segment[..dot], marker, &segment[dot..]),
        None => format!("{}{}", segment, marker),
    }
}
