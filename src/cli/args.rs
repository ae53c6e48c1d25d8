//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, NovelFormat, UgoiraFormat};

/// Work naming CLI.
#[derive(Parser, Debug)]
#[command(
    name = "work-namer",
    version,
    about = "Generate download paths for crawled works from a naming rule",
    long_about = "Reads a batch of crawled work records and prints the relative path each \
                  file would be saved under.\n\n\
                  Paths are built from a naming rule such as `pixiv/{user}/{id}-{title}` \
                  plus the folder options in the configuration file."
)]
pub struct Args {
    /// JSON file with the crawled works.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Path to configuration file (defaults to the platform config directory).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Naming rule, overrides the configured one.
    #[arg(short, long, env = "WORK_NAMER_RULE")]
    pub rule: Option<String>,

    /// Print paths joined onto this download directory.
    #[arg(short = 'd', long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Write `{ id, path }` records as JSON to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Zero-pad page indexes to this width.
    #[arg(long, value_name = "WIDTH")]
    pub zero_padding: Option<usize>,

    /// Omit the page index on the first page.
    #[arg(long)]
    pub no_serial_no: bool,

    /// Prepend token labels (`uid_`, `bmk_`, ...) to values.
    #[arg(long)]
    pub tag_prefix: bool,

    /// Limit the filename (with extension) to this many characters.
    #[arg(long, value_name = "CHARS")]
    pub length_limit: Option<usize>,

    /// Format animated works are saved as.
    #[arg(long, value_enum)]
    pub ugoira_format: Option<UgoiraFormatArg>,

    /// Format text works are saved as.
    #[arg(long, value_enum)]
    pub novel_format: Option<NovelFormatArg>,

    /// Only print the generated paths.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI animation format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UgoiraFormatArg {
    Zip,
    Webm,
    Gif,
    Png,
}

impl From<UgoiraFormatArg> for UgoiraFormat {
    fn from(arg: UgoiraFormatArg) -> Self {
        match arg {
            UgoiraFormatArg::Zip => UgoiraFormat::Zip,
            UgoiraFormatArg::Webm => UgoiraFormat::Webm,
            UgoiraFormatArg::Gif => UgoiraFormat::Gif,
            UgoiraFormatArg::Png => UgoiraFormat::Png,
        }
    }
}

/// CLI novel format argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum NovelFormatArg {
    Txt,
    Epub,
}

impl From<NovelFormatArg> for NovelFormat {
    fn from(arg: NovelFormatArg) -> Self {
        match arg {
            NovelFormatArg::Txt => NovelFormat::Txt,
            NovelFormatArg::Epub => NovelFormat::Epub,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(rule) = &self.rule {
            config.rule.name_rule = rule.clone();
        }

        if let Some(width) = self.zero_padding {
            config.options.zero_padding = true;
            config.options.zero_padding_length = width;
        }

        // Boolean flags (only override if set to non-default)
        if self.no_serial_no {
            config.options.no_serial_no = true;
        }

        if self.tag_prefix {
            config.options.tag_name_to_file_name = true;
        }

        if let Some(limit) = self.length_limit {
            config.options.file_name_length_limit_switch = true;
            config.options.file_name_length_limit = limit;
        }

        if let Some(format) = self.ugoira_format {
            config.options.ugoira_save_as = format.into();
        }

        if let Some(format) = self.novel_format {
            config.options.novel_save_as = format.into();
        }
    }
}
