//! Console output utilities.

use console::style;

use crate::config::Config;

/// Print an info message.
pub fn print_info(message: &str) {
    eprintln!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the active rule and the options that shape the folder tree.
pub fn print_config_summary(config: &Config) {
    let options = &config.options;
    let mut folders = Vec::new();
    if options.create_folder_by_type {
        folders.push("type");
    }
    if options.create_folder_by_sl {
        folders.push("sl");
    }
    if options.create_folder_by_tag {
        folders.push("tag");
    }
    if options.r18_folder {
        folders.push("r18");
    }
    if options.work_dir {
        folders.push("work");
    }

    eprintln!();
    eprintln!("{}", style("Configuration:").bold());
    eprintln!("  Rule: {}", config.rule.name_rule);
    if options.work_dir {
        eprintln!("  Work folder rule: {}", options.work_dir_name_rule);
    }
    eprintln!(
        "  Folders: {}",
        if folders.is_empty() {
            "none".to_string()
        } else {
            folders.join(" > ")
        }
    );
    eprintln!();
}
