//! Placing generated relative paths under a download directory.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Join a generated `/`-separated relative path onto `base_dir`.
///
/// Returns an error if the relative path is absolute or tries to climb out
/// of the base directory.
pub fn get_download_path(base_dir: &Path, relative: &str) -> Result<PathBuf> {
    if relative.starts_with('/') || relative.starts_with('\\') {
        return Err(Error::InvalidFilename(format!(
            "Absolute path not allowed: '{}'",
            relative
        )));
    }

    let mut path = base_dir.to_path_buf();
    for segment in relative.split('/') {
        // Reject path traversal attempts
        if segment == ".." || segment == "." {
            return Err(Error::InvalidFilename(format!(
                "Path traversal detected: '{}'",
                relative
            )));
        }
        if segment.is_empty() {
            continue;
        }
        path.push(segment);
    }

    Ok(path)
}
