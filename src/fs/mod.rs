//! Filesystem module.
//!
//! Provides:
//! - Filesystem-safety helpers for name segments
//! - Date pattern formatting
//! - Joining generated paths under a download directory

pub mod datefmt;
pub mod paths;
pub mod sanitize;

pub use datefmt::format_date;
pub use paths::get_download_path;
pub use sanitize::{
    handle_windows_reserved_name, is_reserved_name, replace_unsafe_str, RESERVED_NAME_MARKER,
};
