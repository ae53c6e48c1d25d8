//! Naming module: turns a work record and a naming rule into a relative path.
//!
//! Pipeline:
//! - Resolve token values for the work
//! - Substitute tokens in the rule (and in the per-work folder rule)
//! - Inject settings-driven folders
//! - Normalize every path segment
//! - Resolve the extension and enforce the filename length limit

pub mod finish;
pub mod folders;
pub mod normalize;
pub mod resolver;
pub mod rule;
pub mod template;
pub mod token;

use std::fmt;

use tracing::{debug, warn};

use crate::config::NamingSettings;
use crate::work::{CrawlContext, WorkRecord};

pub use finish::{limit_length, resolve_extension};
pub use folders::{append_folder, inject_folders, wants_work_dir};
pub use normalize::{normalize_path, normalize_segment};
pub use resolver::resolve_tokens;
pub use rule::NamingRule;
pub use template::substitute;
pub use token::{ReferencedTokens, Token, TokenBinding, TokenTable};

/// A generated path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedPath {
    /// `/`-separated relative path, extension included.
    pub path: String,

    /// Extension the file is saved with (without dot).
    pub extension: String,

    /// Whether the filename was shortened to fit the length limit.
    pub truncated: bool,
}

impl NamedPath {
    /// Last segment of the path.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

impl fmt::Display for NamedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

/// Generates file paths for works under one rule and set of settings.
///
/// # Example
///
/// ```
/// use work_namer::config::NamingSettings;
/// use work_namer::naming::{FileNamer, NamingRule};
/// use work_namer::work::{CrawlContext, WorkRecord};
///
/// let settings = NamingSettings::default();
/// let rule = NamingRule::new("{user}/{id}");
/// let context = CrawlContext::default();
/// let namer = FileNamer::new(&settings, &rule, &context);
///
/// let work = WorkRecord {
///     id: "100_p0".to_string(),
///     user: "alice".to_string(),
///     ext: "png".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(namer.name(&work).path, "alice/100_p0.png");
/// ```
pub struct FileNamer<'a> {
    settings: &'a NamingSettings,
    rule: &'a NamingRule,
    context: &'a CrawlContext,
}

impl<'a> FileNamer<'a> {
    pub fn new(
        settings: &'a NamingSettings,
        rule: &'a NamingRule,
        context: &'a CrawlContext,
    ) -> Self {
        Self {
            settings,
            rule,
            context,
        }
    }

    /// Generate the relative path for `work`.
    ///
    /// A work with no extension gets a path without a trailing dot.
    pub fn name(&self, work: &WorkRecord) -> NamedPath {
        let settings = self.settings;
        let add_prefix = settings.tag_name_to_file_name;
        let work_dir = wants_work_dir(work, settings);

        let active_rule = if work_dir {
            format!("{}{}", self.rule.as_str(), settings.work_dir_name_rule)
        } else {
            self.rule.as_str().to_string()
        };
        let referenced = ReferencedTokens::scan(&active_rule);
        let table = resolve_tokens(work, self.context, settings, &referenced);

        let mut path = substitute(self.rule.as_str(), &table, add_prefix);
        let work_dir_name =
            work_dir.then(|| substitute(&settings.work_dir_name_rule, &table, add_prefix));

        path = inject_folders(&path, work, settings, work_dir_name.as_deref());
        path = ensure_file_name(path, work);
        path = normalize_path(&path);

        let extension = resolve_extension(work, settings);
        let dotted = if extension.is_empty() {
            String::new()
        } else {
            format!(".{}", extension)
        };
        let mut truncated = false;
        if settings.file_name_length_limit_switch {
            let limited = limit_length(&path, &dotted, settings.file_name_length_limit);
            truncated = limited != path;
            path = limited;
        }
        path.push_str(&dotted);

        debug!(
            id = %work.id,
            rule = %self.rule,
            resolved = table.resolved_count(),
            path = %path,
            "generated file name"
        );

        NamedPath {
            path,
            extension,
            truncated,
        }
    }
}

/// Generate the relative path for `work`.
pub fn get_file_name(
    work: &WorkRecord,
    context: &CrawlContext,
    settings: &NamingSettings,
    rule: &NamingRule,
) -> NamedPath {
    FileNamer::new(settings, rule, context).name(work)
}

/// Fall back to the numeric id when the rule produced an empty filename.
fn ensure_file_name(path: String, work: &WorkRecord) -> String {
    let file_name = path.rsplit('/').next().unwrap_or("");
    if !file_name.trim().is_empty() {
        return path;
    }

    warn!(id = %work.id, "naming rule produced an empty file name, using the work id");
    let folders = &path[..path.len() - file_name.len()];
    format!("{}{}", folders, work.numeric_id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::work::{Restriction, WorkType};

    fn name(work: &WorkRecord, settings: &NamingSettings, rule: &str) -> NamedPath {
        get_file_name(work, &CrawlContext::default(), settings, &NamingRule::new(rule))
    }

    fn illustration() -> WorkRecord {
        WorkRecord {
            id: "12345678".to_string(),
            id_num: 12345678,
            index: Some(0),
            work_type: WorkType::Illustration,
            title: "Sunset".to_string(),
            user: "alice".to_string(),
            user_id: "42".to_string(),
            ext: "jpg".to_string(),
            dl_count: 1,
            ..Default::default()
        }
    }

    #[test]
    fn test_first_page_without_serial_no() {
        let settings = NamingSettings {
            no_serial_no: true,
            zero_padding: false,
            ..Default::default()
        };
        let named = name(&illustration(), &settings, "{id}{p_num}");
        assert_eq!(named.path, "12345678.jpg");
        assert_eq!(named.extension, "jpg");
    }

    #[test]
    fn test_zero_padded_manga_id() {
        let work = WorkRecord {
            id: "555_p2".to_string(),
            id_num: 555,
            index: Some(2),
            work_type: WorkType::Manga,
            ext: "png".to_string(),
            ..Default::default()
        };
        let settings = NamingSettings {
            zero_padding: true,
            zero_padding_length: 3,
            ..Default::default()
        };
        assert_eq!(name(&work, &settings, "{id}").path, "555_p002.png");
    }

    #[test]
    fn test_bookmark_tier_token() {
        let mut work = illustration();
        work.bmk = 2345;
        assert_eq!(
            name(&work, &NamingSettings::default(), "{bmk_1000}").path,
            "2000+.jpg"
        );
        work.bmk = 500;
        assert_eq!(
            name(&work, &NamingSettings::default(), "{bmk_1000}").path,
            "0+.jpg"
        );
    }

    #[test]
    fn test_tag_separator_does_not_nest() {
        let mut work = illustration();
        work.tags = vec!["a/b".to_string(), "c".to_string()];
        let named = name(&work, &NamingSettings::default(), "{tags}");
        assert_eq!(named.path, "a／b,c.jpg");
        assert!(!named.path.contains('/'));
    }

    #[test]
    fn test_default_rule() {
        let named = name(
            &illustration(),
            &NamingSettings::default(),
            "pixiv/{user}-{user_id}/{id}-{title}",
        );
        assert_eq!(named.path, "pixiv/alice-42/12345678-Sunset.jpg");
        assert_eq!(named.file_name(), "12345678-Sunset.jpg");
    }

    #[test]
    fn test_folder_nesting_order() {
        let mut work = illustration();
        work.x_restrict = Restriction::R18;
        work.sl = Some(2);
        let settings = NamingSettings {
            create_folder_by_type: true,
            create_folder_by_sl: true,
            r18_folder: true,
            r18_folder_name: "R18".to_string(),
            ..Default::default()
        };
        assert_eq!(
            name(&work, &settings, "{user}/{id}").path,
            "alice/Illustration/sl2/R18/12345678.jpg"
        );
    }

    #[test]
    fn test_per_work_folder() {
        let mut work = illustration();
        work.dl_count = 4;
        work.index = Some(1);
        work.id = "12345678_p1".to_string();
        let settings = NamingSettings {
            work_dir: true,
            work_dir_file_number: 1,
            work_dir_name_rule: "{id_num}/{px}".to_string(),
            create_folder_by_type: true,
            ..Default::default()
        };

        // {px} is only referenced by the per-work rule and resolves empty
        assert_eq!(
            name(&work, &settings, "{user}/{id}").path,
            "alice/Illustration/12345678/12345678_p1.jpg"
        );

        work.dl_count = 1;
        assert_eq!(
            name(&work, &settings, "{user}/{id}").path,
            "alice/Illustration/12345678_p1.jpg"
        );
    }

    #[test]
    fn test_per_work_rule_tokens_are_resolved() {
        let mut work = illustration();
        work.dl_count = 2;
        work.full_width = Some(640);
        work.full_height = Some(480);
        let settings = NamingSettings {
            work_dir: true,
            work_dir_name_rule: "{px}".to_string(),
            ..Default::default()
        };
        assert_eq!(
            name(&work, &settings, "{id}").path,
            "640x480/12345678.jpg"
        );
    }

    #[test]
    fn test_no_double_separators_or_edge_dots() {
        let mut work = illustration();
        work.title = ".hidden.".to_string();
        work.user = "  ".to_string();
        let named = name(&work, &NamingSettings::default(), "{user}/./{title}//{rank}/{id}");

        assert!(!named.path.contains("//"));
        for segment in named.path.split('/') {
            assert!(!segment.is_empty());
            assert!(!segment.starts_with('.'), "{}", named.path);
            assert!(!segment.ends_with('.'), "{}", named.path);
        }
        assert_eq!(named.path, "．/．hidden．/12345678.jpg");
    }

    #[test]
    fn test_reserved_names_marked() {
        let mut work = illustration();
        work.user = "con".to_string();
        work.title = "AUX".to_string();
        assert_eq!(
            name(&work, &NamingSettings::default(), "{user}/{title}").path,
            "con[downloader_add]/AUX[downloader_add].jpg"
        );
    }

    #[test]
    fn test_length_limit() {
        let mut work = illustration();
        work.title = "a very long title that goes on".to_string();
        work.ext = "png".to_string();
        let settings = NamingSettings {
            file_name_length_limit_switch: true,
            file_name_length_limit: 10,
            ..Default::default()
        };
        let named = name(&work, &settings, "{user}/{title}");
        assert_eq!(named.path, "alice/a very.png");
        assert_eq!(named.file_name().chars().count(), 10);
        assert!(named.truncated);
    }

    #[test]
    fn test_length_limit_never_leaves_device_name() {
        let mut work = illustration();
        work.title = "CONSOLE".to_string();
        let settings = NamingSettings {
            file_name_length_limit_switch: true,
            file_name_length_limit: 7,
            ..Default::default()
        };
        let named = name(&work, &settings, "{title}");
        assert_eq!(named.path, "CO.jpg");
        assert!(named.truncated);
    }

    #[test]
    fn test_missing_extension_has_no_trailing_dot() {
        let mut work = illustration();
        work.ext = String::new();
        let named = name(&work, &NamingSettings::default(), "{user}/{title}");
        assert_eq!(named.path, "alice/Sunset");
        assert_eq!(named.extension, "");
        assert!(!named.file_name().ends_with('.'));
    }

    #[test]
    fn test_novel_extension_and_record_untouched() {
        let mut work = illustration();
        work.work_type = WorkType::Novel;
        work.ext = "txt".to_string();
        let settings = NamingSettings {
            novel_save_as: crate::config::NovelFormat::Epub,
            ..Default::default()
        };
        let named = name(&work, &settings, "{id}");
        assert_eq!(named.path, "12345678.epub");
        assert_eq!(named.extension, "epub");
        assert_eq!(work.ext, "txt");
    }

    #[test]
    fn test_empty_file_name_falls_back_to_id() {
        let mut work = illustration();
        work.title = String::new();
        let settings = NamingSettings {
            create_folder_by_type: true,
            ..Default::default()
        };
        assert_eq!(
            name(&work, &settings, "{title}").path,
            "Illustration/12345678.jpg"
        );

        // A trailing separator is dropped, the folder becomes the file name
        assert_eq!(
            name(&work, &NamingSettings::default(), "{user}/{title}").path,
            "alice.jpg"
        );
    }

    #[test]
    fn test_prefix_setting() {
        let mut work = illustration();
        work.bmk = 10;
        let settings = NamingSettings {
            tag_name_to_file_name: true,
            ..Default::default()
        };
        assert_eq!(
            name(&work, &settings, "{user}-{bmk}-{id}").path,
            "user_alice-bmk_10-12345678.jpg"
        );
    }

    #[test]
    fn test_title_cannot_inject_tokens() {
        let mut work = illustration();
        work.title = "{user_id}".to_string();
        assert_eq!(
            name(&work, &NamingSettings::default(), "{title}-{id}").path,
            "{user_id}-12345678.jpg"
        );
    }

    #[test]
    fn test_crawl_context_tokens() {
        let context = CrawlContext {
            page_title: "Daily: ranking".to_string(),
            page_tag: "cat".to_string(),
            ..Default::default()
        };
        let named = get_file_name(
            &illustration(),
            &context,
            &NamingSettings::default(),
            &NamingRule::new("{p_title}/{p_tag}/{id}"),
        );
        assert_eq!(named.path, "Daily： ranking/cat/12345678.jpg");
    }
}
