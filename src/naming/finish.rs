//! Final extension choice and filename length limit.

use tracing::warn;

use crate::config::{ImageSize, NamingSettings};
use crate::fs::is_reserved_name;
use crate::work::{WorkRecord, WorkType};

/// Extensions the downloader produces for animated works.
const UGOIRA_EXTENSIONS: [&str; 4] = ["zip", "webm", "gif", "png"];

/// Extension (without dot) the file will be saved with.
///
/// Animated works take the configured animation format unless only the
/// static thumbnail is downloaded; text works take the configured novel
/// format.
pub fn resolve_extension(work: &WorkRecord, settings: &NamingSettings) -> String {
    if work.work_type == WorkType::Novel {
        return settings.novel_save_as.extension().to_string();
    }

    let ext = work.ext.trim_start_matches('.');
    if UGOIRA_EXTENSIONS.contains(&ext)
        && work.ugoira_info
        && settings.image_size != ImageSize::Thumb
    {
        return settings.ugoira_save_as.extension().to_string();
    }

    ext.to_string()
}

/// Shorten the filename (last segment) so that it plus `extension` fits in
/// `limit` characters. Folder segments are left alone.
///
/// At least one character of the filename is always kept, even when the
/// extension alone exceeds the limit. A cut that lands on a device name
/// (`CONSOLE` cut to `CON`) drops one more character.
pub fn limit_length(path: &str, extension: &str, limit: usize) -> String {
    let (folders, file_name) = match path.rsplit_once('/') {
        Some((folders, file_name)) => (Some(folders), file_name),
        None => (None, path),
    };

    let ext_len = extension.chars().count();
    let name_len = file_name.chars().count();
    if name_len + ext_len <= limit {
        return path.to_string();
    }

    let keep = limit.saturating_sub(ext_len).max(1);
    if keep + ext_len > limit {
        warn!(
            limit,
            extension, "file name length limit is shorter than the extension"
        );
    }

    let mut truncated: String = file_name.chars().take(keep).collect();
    while truncated.chars().count() > 1 && is_reserved_name(&truncated) {
        truncated.pop();
    }
    match folders {
        Some(folders) => format!("{}/{}", folders, truncated),
        None => truncated,
    }
}
