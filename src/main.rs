//! Work Namer - CLI entry point.

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{fmt, EnvFilter};

use work_namer::{
    cli::Args,
    config::{default_config_path, validate_config, Config},
    error::{exit_codes, Error, Result},
    fs::get_download_path,
    naming::{FileNamer, NamingRule},
    output::{
        create_item_bar, print_batch_stats, print_config_summary, print_error, print_info,
        print_success, print_warning, BatchStats,
    },
    work::load_batch,
};

/// One line of the JSON output file.
#[derive(Serialize)]
struct NamedEntry<'a> {
    id: &'a str,
    path: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::InvalidRecord(_) | Error::Json(_) | Error::Io(_) => {
                    ExitCode::from(exit_codes::INPUT_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config_path = args.config.clone().or_else(default_config_path);
    let mut config = match &config_path {
        Some(path) if path.exists() => Config::load(path)?,
        Some(path) => {
            if !args.quiet {
                print_warning(&format!(
                    "Configuration file not found: {}",
                    path.display()
                ));
                print_info("Using default configuration with CLI arguments");
            }
            Config::default()
        }
        None => Config::default(),
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    if !args.quiet {
        print_config_summary(&config);
    }

    let batch = load_batch(&args.input)?;
    debug!(works = batch.works.len(), input = %args.input.display(), "loaded works");

    let rule = NamingRule::new(config.rule.name_rule.clone());
    debug!(rule = %rule, tokens = ?rule.tokens(), "active naming rule");
    let namer = FileNamer::new(&config.options, &rule, &batch.context);

    let bar = args
        .output
        .as_ref()
        .filter(|_| !args.quiet)
        .map(|_| create_item_bar(batch.works.len() as u64, "Naming"));

    let mut stats = BatchStats::default();
    let mut entries = Vec::with_capacity(batch.works.len());

    for work in &batch.works {
        let named = namer.name(work);
        if named.truncated {
            stats.truncated += 1;
        }

        let path = match &args.output_dir {
            Some(dir) => match get_download_path(dir, &named.path) {
                Ok(path) => path.display().to_string(),
                Err(e) => {
                    print_warning(&format!("Skipping {}: {}", work.id, e));
                    stats.failed += 1;
                    continue;
                }
            },
            None => named.path,
        };
        stats.record(work.work_type);

        if args.output.is_some() {
            entries.push(NamedEntry { id: &work.id, path });
        } else {
            println!("{}", path);
        }

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = &bar {
        bar.finish_and_clear();
    }

    if let Some(output) = &args.output {
        fs::write(output, serde_json::to_string_pretty(&entries)?)?;
        if !args.quiet {
            print_success(&format!(
                "Wrote {} paths to {}",
                entries.len(),
                output.display()
            ));
        }
    }

    if !args.quiet {
        print_batch_stats(&stats);
    }

    Ok(())
}
