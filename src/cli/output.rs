//! Output formatting for CLI results

use chrono::Utc;
use colorful::Colorful;
use serde::Serialize;
use std::path::PathBuf;

use crate::config::ClassifierConfig;
use crate::core::dsp::stats::amplitude_to_db;
use crate::detection::{BatchSummary, ClassificationResult, FileOutcome, FileReport, NoiseLabel};

fn colored_label(label: NoiseLabel) -> String {
    let text = format!("{} {}", label.symbol(), label.name());
    match label {
        NoiseLabel::Noise => text.red().to_string(),
        NoiseLabel::SemiNoise => text.yellow().to_string(),
        NoiseLabel::NoneNoise => text.green().to_string(),
    }
}

/// MFCC vector as `[c0, c1, ...]` with three decimals
pub fn format_mfcc(mfcc: &[f64]) -> String {
    let values: Vec<String> = mfcc.iter().map(|c| format!("{:.3}", c)).collect();
    format!("[{}]", values.join(", "))
}

fn format_classification(result: &ClassificationResult, show_features: bool) -> String {
    let mut output = String::new();

    if result.silent {
        output.push_str(&format!(
            "  {}\n",
            format!(
                "Warning: audio is nearly silent (peak {:.1} dBFS)",
                amplitude_to_db(result.peak_amplitude)
            )
            .yellow()
        ));
    }

    if show_features {
        if let Some(features) = &result.features {
            output.push_str("  MFCC (mean per coefficient):\n");
            output.push_str(&format!("    {}\n", format_mfcc(&features.mfcc)));
            output.push_str(&format!("  LSFM: {:.3}\n", features.lsfm));
            output.push_str(&format!("  ZCR: {:.3}\n", features.zcr));
            output.push_str(&format!("  MFCC energy: {:.3}\n", features.mfcc_energy()));
        }
        output.push_str(&format!(
            "  Sample Rate: {} Hz, Duration: {:.2}s\n",
            result.sample_rate, result.duration_secs
        ));
    }

    output.push_str(&format!("  Result: {}\n", colored_label(result.label)));
    output
}

/// Format one file report for terminal output
pub fn format_report(report: &FileReport, show_features: bool) -> String {
    let mut output = format!("Processing: {}\n", report.path.clone().cyan());

    match &report.outcome {
        FileOutcome::Classified(result) => {
            output.push_str(&format_classification(result, show_features));
        }
        FileOutcome::Failed { error } => {
            output.push_str(&format!("  {}\n", format!("Error: {}", error).red()));
        }
    }

    output
}

/// Lines for files that were not decoded
pub fn format_skipped(skipped: &[PathBuf]) -> String {
    skipped
        .iter()
        .map(|path| format!("Skipping unsupported file: {}\n", path.display()))
        .collect()
}

/// Format a summary for multiple files
pub fn format_summary(summary: &BatchSummary) -> String {
    let mut output = String::new();

    output.push_str("\nSummary:\n");
    output.push_str(&format!("  {} file(s) analyzed\n", summary.total));

    for label in NoiseLabel::all() {
        let count = summary.count(label);
        if count > 0 {
            output.push_str(&format!("  {}: {}\n", colored_label(label), count));
        }
    }
    if summary.failed > 0 {
        output.push_str(&format!("  {}\n", format!("{} failed", summary.failed).red()));
    }
    if summary.skipped > 0 {
        output.push_str(&format!("  {} skipped (unsupported)\n", summary.skipped));
    }

    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    config: &'a ClassifierConfig,
    results: &'a [FileReport],
    skipped: Vec<String>,
    summary: &'a BatchSummary,
}

/// Format the whole batch as a JSON document
pub fn format_json(
    reports: &[FileReport],
    skipped: &[PathBuf],
    summary: &BatchSummary,
    config: &ClassifierConfig,
) -> serde_json::Result<String> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        config,
        results: reports,
        skipped: skipped.iter().map(|p| p.display().to_string()).collect(),
        summary,
    };
    serde_json::to_string_pretty(&report)
}
