//! Settings-driven folder injection.
//!
//! Each step adds one folder directly above the filename, so a step run later
//! ends up nested deeper. The order in [`inject_folders`] defines the folder
//! tree and must stay fixed.

use tracing::trace;

use crate::config::NamingSettings;
use crate::fs::replace_unsafe_str;
use crate::work::{WorkRecord, WorkType};

/// Insert `folder` as the parent of the last segment of `path`.
///
/// The folder name goes through the unsafe-character filter, so a `/` inside
/// it cannot create extra levels.
pub fn append_folder(path: &str, folder: &str) -> String {
    let mut segments: Vec<String> = path.split('/').map(str::to_string).collect();
    let last = segments.len() - 1;
    segments.insert(last, replace_unsafe_str(folder));
    segments.join("/")
}

/// Whether `work` gets a folder of its own.
pub fn wants_work_dir(work: &WorkRecord, settings: &NamingSettings) -> bool {
    settings.work_dir && work.dl_count > settings.work_dir_file_number
}

/// Run every enabled injection step in order.
///
/// `work_dir_name` is the substituted per-work folder rule, present only when
/// [`wants_work_dir`] holds.
pub fn inject_folders(
    path: &str,
    work: &WorkRecord,
    settings: &NamingSettings,
    work_dir_name: Option<&str>,
) -> String {
    let mut result = path.to_string();

    if let Some(folder) = type_folder(work, settings) {
        result = append_folder(&result, folder);
    }

    if let Some(folder) = tier_folder(work, settings) {
        result = append_folder(&result, &folder);
    }

    if let Some(folder) = tag_folder(work, settings) {
        result = append_folder(&result, folder);
    }

    if settings.r18_folder && work.x_restrict.is_restricted() {
        result = append_folder(&result, &settings.r18_folder_name);
    }

    // The rule may contain `/` to request several levels
    if let Some(name) = work_dir_name {
        for part in name.split('/').filter(|part| !part.is_empty()) {
            result = append_folder(&result, part);
        }
    }

    trace!(path = %result, "folders injected");
    result
}

fn type_folder(work: &WorkRecord, settings: &NamingSettings) -> Option<&'static str> {
    if !settings.create_folder_by_type {
        return None;
    }

    let enabled = match work.work_type {
        WorkType::Illustration => settings.create_folder_by_type_illust,
        WorkType::Manga => settings.create_folder_by_type_manga,
        WorkType::Ugoira => settings.create_folder_by_type_ugoira,
        WorkType::Novel => settings.create_folder_by_type_novel,
    };
    enabled.then(|| work.work_type.display_name())
}

fn tier_folder(work: &WorkRecord, settings: &NamingSettings) -> Option<String> {
    if !settings.create_folder_by_sl {
        return None;
    }
    work.sl.map(|sl| format!("sl{}", sl))
}

/// First tag of the user's list found among the work's translated tags.
///
/// The user's order decides priority. Matching ignores case; the returned
/// name is the tag as the user wrote it.
fn tag_folder<'a>(work: &WorkRecord, settings: &'a NamingSettings) -> Option<&'a str> {
    if !settings.create_folder_by_tag || settings.create_folder_tag_list.is_empty() {
        return None;
    }

    let work_tags: Vec<String> = work
        .tags_with_transl
        .iter()
        .map(|tag| tag.to_lowercase())
        .collect();

    settings
        .create_folder_tag_list
        .iter()
        .find(|tag| work_tags.contains(&tag.to_lowercase()))
        .map(String::as_str)
}
