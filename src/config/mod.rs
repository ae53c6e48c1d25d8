//! Configuration module for work-namer.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Option value enums
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{default_config_path, Config, NamingSettings, RuleConfig};
pub use modes::{ImageSize, NovelFormat, UgoiraFormat};
pub use validation::{validate_config, validate_options, validate_rule};
