//! Configuration structures and loading logic.

use crate::config::modes::{ImageSize, NovelFormat, UgoiraFormat};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rule: RuleConfig,

    #[serde(default)]
    pub options: NamingSettings,
}

/// Naming rule configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Primary naming rule, e.g. `pixiv/{user}-{user_id}/{id}-{title}`.
    #[serde(default = "default_name_rule")]
    pub name_rule: String,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            name_rule: default_name_rule(),
        }
    }
}

/// Options consumed by the naming pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingSettings {
    /// Omit the page index on the first page of a work.
    pub no_serial_no: bool,

    /// Left-pad page indexes with zeros.
    pub zero_padding: bool,

    /// Width page indexes are padded to.
    pub zero_padding_length: usize,

    /// Prepend each token's prefix (`uid_`, `bmk_`, ...) to its value.
    pub tag_name_to_file_name: bool,

    /// Pattern for `{date}` and `{task_date}`.
    pub date_format: String,

    /// Create one folder per multi-file work.
    pub work_dir: bool,

    /// A work needs more files than this to get its own folder.
    pub work_dir_file_number: u32,

    /// Naming rule for the per-work folder.
    pub work_dir_name_rule: String,

    pub create_folder_by_type: bool,
    pub create_folder_by_type_illust: bool,
    pub create_folder_by_type_manga: bool,
    pub create_folder_by_type_ugoira: bool,
    pub create_folder_by_type_novel: bool,

    /// Create a `sl<tier>` folder.
    pub create_folder_by_sl: bool,

    /// Create a folder named after the first matching tag.
    pub create_folder_by_tag: bool,

    /// Tags checked in order for the tag folder.
    pub create_folder_tag_list: Vec<String>,

    /// Save R18/R18G works under `r18_folder_name`.
    pub r18_folder: bool,
    pub r18_folder_name: String,

    pub image_size: ImageSize,
    pub ugoira_save_as: UgoiraFormat,
    pub novel_save_as: NovelFormat,

    /// Enforce `file_name_length_limit` on the filename segment.
    pub file_name_length_limit_switch: bool,
    pub file_name_length_limit: usize,
}

impl Default for NamingSettings {
    fn default() -> Self {
        Self {
            no_serial_no: false,
            zero_padding: false,
            zero_padding_length: 3,
            tag_name_to_file_name: false,
            date_format: "YYYY-MM-DD".to_string(),
            work_dir: false,
            work_dir_file_number: 1,
            work_dir_name_rule: "{id_num}".to_string(),
            create_folder_by_type: false,
            create_folder_by_type_illust: true,
            create_folder_by_type_manga: true,
            create_folder_by_type_ugoira: true,
            create_folder_by_type_novel: true,
            create_folder_by_sl: false,
            create_folder_by_tag: false,
            create_folder_tag_list: Vec::new(),
            r18_folder: false,
            r18_folder_name: "[R-18&R-18G]".to_string(),
            image_size: ImageSize::default(),
            ugoira_save_as: UgoiraFormat::default(),
            novel_save_as: NovelFormat::default(),
            file_name_length_limit_switch: false,
            file_name_length_limit: 200,
        }
    }
}

fn default_name_rule() -> String {
    "pixiv/{user}-{user_id}/{id}-{title}".to_string()
}

/// Default location of the configuration file for this platform.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "work-namer").map(|dirs| dirs.config_dir().join("config.toml"))
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
