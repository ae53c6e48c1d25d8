//! Configuration validation logic.

use tracing::warn;

use crate::config::loader::{Config, NamingSettings};
use crate::error::{Error, Result};
use crate::naming::NamingRule;

/// Widest page-index padding accepted.
const MAX_ZERO_PADDING_LENGTH: usize = 9;

/// Validate the entire configuration.
///
/// Unknown tokens in a rule are only warned about; they stay in the output as
/// literal text.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_rule("name_rule", &config.rule.name_rule)?;
    validate_options(&config.options)?;

    Ok(())
}

/// Validate a naming rule string.
pub fn validate_rule(field: &str, rule: &str) -> Result<()> {
    if rule.trim().is_empty() {
        return Err(Error::MissingConfig(field.to_string()));
    }

    let unknown = NamingRule::new(rule).unknown_tokens();
    if !unknown.is_empty() {
        warn!(
            field,
            tokens = %unknown.join(", "),
            "naming rule contains unknown tokens, they will be kept as literal text"
        );
    }

    Ok(())
}

/// Validate the naming options.
pub fn validate_options(options: &NamingSettings) -> Result<()> {
    if options.zero_padding
        && !(1..=MAX_ZERO_PADDING_LENGTH).contains(&options.zero_padding_length)
    {
        return Err(Error::ConfigValidation {
            field: "zero_padding_length".to_string(),
            message: format!(
                "Must be between 1 and {} (got {})",
                MAX_ZERO_PADDING_LENGTH, options.zero_padding_length
            ),
        });
    }

    if options.file_name_length_limit_switch && options.file_name_length_limit == 0 {
        return Err(Error::ConfigValidation {
            field: "file_name_length_limit".to_string(),
            message: "Length limit must be at least 1".to_string(),
        });
    }

    if options.work_dir {
        validate_rule("work_dir_name_rule", &options.work_dir_name_rule)?;
    }

    if options.r18_folder && options.r18_folder_name.trim().is_empty() {
        return Err(Error::MissingConfig("r18_folder_name".to_string()));
    }

    if options.create_folder_by_tag && options.create_folder_tag_list.is_empty() {
        warn!("create_folder_by_tag is enabled but create_folder_tag_list is empty");
    }

    Ok(())
}
