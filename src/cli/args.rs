//! CLI argument parsing with configuration overrides

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{ClassifierConfig, ConfigBuilder};

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "noisecheckr", version)]
#[command(about = "Classify audio clips as Noise, Semi-Noise or None-Noise")]
pub struct Args {
    /// Input file or directory
    #[arg(default_value = "audios")]
    pub input: PathBuf,

    /// Descend into sub-directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print MFCC, LSFM and ZCR values for each file
    #[arg(short, long)]
    pub features: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Worker threads for batch classification (default: all cores)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// JSON configuration file
    #[arg(short, long, env = "NOISECHECKR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,

    /// Number of MFCC coefficients
    #[arg(long)]
    pub n_mfcc: Option<usize>,

    /// Frame length in samples (also the FFT size)
    #[arg(long)]
    pub frame_length: Option<usize>,

    /// Hop length in samples
    #[arg(long)]
    pub hop_length: Option<usize>,

    /// Peak amplitude below which a clip is treated as silence
    #[arg(long)]
    pub silence_threshold: Option<f32>,

    /// Lower LSFM bound of the Semi-Noise band
    #[arg(long)]
    pub lsfm_low: Option<f64>,

    /// Upper LSFM bound (Noise lies above it)
    #[arg(long)]
    pub lsfm_high: Option<f64>,

    /// Lower ZCR bound of the Semi-Noise band
    #[arg(long)]
    pub zcr_low: Option<f64>,

    /// Upper ZCR bound (Noise lies above it)
    #[arg(long)]
    pub zcr_high: Option<f64>,

    /// Lower MFCC energy bound (Noise lies below it)
    #[arg(long)]
    pub energy_low: Option<f64>,

    /// Upper MFCC energy bound of the Semi-Noise band
    #[arg(long)]
    pub energy_high: Option<f64>,
}

impl Args {
    /// Defaults, then the config file, then command-line overrides
    pub fn resolve_config(&self) -> Result<ClassifierConfig> {
        let base = ClassifierConfig::load(self.config.as_deref())
            .context("Failed to load configuration")?;
        self.apply_overrides(base)
    }

    fn apply_overrides(&self, base: ClassifierConfig) -> Result<ClassifierConfig> {
        let t = base.thresholds;
        let mut builder = ConfigBuilder::from_config(base.clone());

        if let Some(n) = self.n_mfcc {
            builder = builder.n_mfcc(n);
        }
        if let Some(n) = self.frame_length {
            builder = builder.frame_length(n);
        }
        if let Some(n) = self.hop_length {
            builder = builder.hop_length(n);
        }
        if let Some(threshold) = self.silence_threshold {
            builder = builder.silence_threshold(threshold);
        }

        builder = builder
            .lsfm_bounds(
                self.lsfm_low.unwrap_or(t.lsfm_low),
                self.lsfm_high.unwrap_or(t.lsfm_high),
            )
            .zcr_bounds(
                self.zcr_low.unwrap_or(t.zcr_low),
                self.zcr_high.unwrap_or(t.zcr_high),
            )
            .energy_bounds(
                self.energy_low.unwrap_or(t.energy_low),
                self.energy_high.unwrap_or(t.energy_high),
            );

        Ok(builder.build()?)
    }
}
