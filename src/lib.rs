//! Work Namer - rule-driven download paths for crawled works
//!
//! This library turns one crawled work record plus a user-written naming rule
//! into a filesystem-safe relative path (folders, filename and extension).
//!
//! # Features
//!
//! - Placeholder tokens (`{id}`, `{title}`, `{tags}`, `{bmk_1000}`, ...)
//! - Unsafe characters in free-text values replaced, never split into folders
//! - Folders by work type, quality tier, first matching tag, R-18 flag and per work
//! - Leading/trailing dots and Windows device names repaired per segment
//! - Extension overrides for animated and text works
//! - Filename length limit that keeps the extension
//!
//! # Example
//!
//! ```
//! use work_namer::{get_file_name, CrawlContext, NamingRule, NamingSettings, WorkRecord};
//!
//! let work = WorkRecord {
//!     id: "12345678_p0".to_string(),
//!     title: "Sunset".to_string(),
//!     user: "alice".to_string(),
//!     user_id: "42".to_string(),
//!     ext: "jpg".to_string(),
//!     ..Default::default()
//! };
//!
//! let named = get_file_name(
//!     &work,
//!     &CrawlContext::default(),
//!     &NamingSettings::default(),
//!     &NamingRule::new("pixiv/{user}-{user_id}/{id}-{title}"),
//! );
//! assert_eq!(named.path, "pixiv/alice-42/12345678_p0-Sunset.jpg");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod naming;
pub mod output;
pub mod work;

// Re-exports for convenience
pub use config::{Config, NamingSettings};
pub use error::{Error, Result};
pub use naming::{get_file_name, FileNamer, NamedPath, NamingRule};
pub use work::{CrawlContext, WorkRecord, WorkType};
