// src/cli/mod.rs
//
// Command-line interface module

mod args;
mod batch;
mod output;

pub use args::{Args, OutputFormat};
pub use batch::{classify_file, collect_audio_files, is_supported, run_batch, FileScan, SUPPORTED_EXTENSIONS};
pub use output::{format_json, format_mfcc, format_report, format_skipped, format_summary};

use anyhow::{Context, Result};
use colorful::Colorful;

use crate::core::NoiseClassifier;
use crate::detection::BatchSummary;

/// Initialise `env_logger`; `RUST_LOG` wins over the verbosity flag
pub fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Run the CLI
pub fn run(args: &Args) -> Result<()> {
    let config = args.resolve_config()?;

    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    if let Some(jobs) = args.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let scan = collect_audio_files(&args.input, args.recursive)?;
    log::info!(
        "Found {} audio file(s), {} skipped under {}",
        scan.audio_files.len(),
        scan.skipped.len(),
        args.input.display()
    );

    let classifier = NoiseClassifier::new(config)?;
    let show_progress = !args.quiet && args.format == OutputFormat::Text;
    let reports = run_batch(&scan.audio_files, &classifier, show_progress);
    let summary = BatchSummary::from_reports(&reports, scan.skipped.len());

    match args.format {
        OutputFormat::Json => {
            println!(
                "{}",
                format_json(&reports, &scan.skipped, &summary, classifier.config())?
            );
        }
        OutputFormat::Text => {
            if scan.audio_files.is_empty() {
                println!("{}", "No audio files found!".red());
            } else {
                println!("Found {} audio file(s)\n", scan.audio_files.len());
            }
            print!("{}", format_skipped(&scan.skipped));
            for report in &reports {
                println!("{}", format_report(report, args.features));
            }
            print!("{}", format_summary(&summary));
        }
    }

    Ok(())
}
