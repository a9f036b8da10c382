// src/config/settings.rs
//
// Classifier configuration: framing, MFCC and decision thresholds.
// Every knob is overridable from a JSON file or the command line.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NoiseCheckError, Result};

/// Largest accepted `frame_length` (also the FFT size)
pub const MAX_FRAME_LENGTH: usize = 1 << 16;

/// Largest accepted number of mel bands
pub const MAX_MEL_BANDS: usize = 1024;

/// Threshold bounds for the decision cascade.
///
/// The defaults are empirical and carry no derivation; treat them as tuning
/// knobs, not constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationThresholds {
    /// Lower LSFM bound of the Semi-Noise band
    pub lsfm_low: f64,
    /// Upper LSFM bound of the Semi-Noise band; Noise requires LSFM above it
    pub lsfm_high: f64,
    /// Lower ZCR bound of the Semi-Noise band
    pub zcr_low: f64,
    /// Upper ZCR bound of the Semi-Noise band; Noise requires ZCR above it
    pub zcr_high: f64,
    /// Noise requires MFCC energy below this; Semi-Noise starts here
    pub energy_low: f64,
    /// Upper MFCC energy bound of the Semi-Noise band
    pub energy_high: f64,
}

impl Default for ClassificationThresholds {
    fn default() -> Self {
        Self {
            lsfm_low: 0.3,
            lsfm_high: 0.8,
            zcr_low: 0.1,
            zcr_high: 0.3,
            energy_low: 50.0,
            energy_high: 150.0,
        }
    }
}

/// Complete classifier configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Samples per analysis frame (also the FFT size)
    pub frame_length: usize,
    /// Stride between consecutive frames
    pub hop_length: usize,
    /// Number of cepstral coefficients kept
    pub n_mfcc: usize,
    /// Number of mel bands feeding the DCT
    pub n_mels: usize,
    /// Peak amplitude below which a clip is labelled Noise without analysis
    pub silence_threshold: f32,
    /// Decision cascade bounds
    pub thresholds: ClassificationThresholds,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            frame_length: 2048,
            hop_length: 512,
            n_mfcc: 13,
            n_mels: 128,
            silence_threshold: 1e-6,
            thresholds: ClassificationThresholds::default(),
        }
    }
}

impl ClassifierConfig {
    /// Reject configurations the framing or MFCC stages cannot work with:
    /// zero or oversized frames, zero hop, and `n_mfcc` outside `1..=n_mels`.
    pub fn validate(&self) -> Result<()> {
        if self.frame_length == 0 {
            return Err(NoiseCheckError::InvalidParameters(
                "frame_length must be positive".to_string(),
            ));
        }
        if self.hop_length == 0 {
            return Err(NoiseCheckError::InvalidParameters(
                "hop_length must be positive".to_string(),
            ));
        }
        if self.frame_length > MAX_FRAME_LENGTH {
            return Err(NoiseCheckError::InvalidParameters(format!(
                "frame_length ({}) exceeds {}",
                self.frame_length, MAX_FRAME_LENGTH
            )));
        }
        if self.n_mfcc == 0 {
            return Err(NoiseCheckError::InvalidParameters(
                "n_mfcc must be positive".to_string(),
            ));
        }
        if self.n_mels == 0 || self.n_mels > MAX_MEL_BANDS {
            return Err(NoiseCheckError::InvalidParameters(format!(
                "n_mels ({}) must be between 1 and {}",
                self.n_mels, MAX_MEL_BANDS
            )));
        }
        if self.n_mfcc > self.n_mels {
            return Err(NoiseCheckError::InvalidParameters(format!(
                "n_mfcc ({}) cannot exceed n_mels ({})",
                self.n_mfcc, self.n_mels
            )));
        }
        Ok(())
    }

    /// Load a (possibly partial) configuration from a JSON file.
    /// Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            NoiseCheckError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Per-user config location, e.g. `~/.config/noisecheckr/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("noisecheckr").join("config.json"))
    }

    /// Resolve the file layer: an explicit path must exist; otherwise the
    /// per-user file is used when present, else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for custom configurations
pub struct ConfigBuilder {
    config: ClassifierConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }

    pub fn from_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn frame_length(mut self, frame_length: usize) -> Self {
        self.config.frame_length = frame_length;
        self
    }

    pub fn hop_length(mut self, hop_length: usize) -> Self {
        self.config.hop_length = hop_length;
        self
    }

    pub fn n_mfcc(mut self, n_mfcc: usize) -> Self {
        self.config.n_mfcc = n_mfcc;
        self
    }

    pub fn n_mels(mut self, n_mels: usize) -> Self {
        self.config.n_mels = n_mels;
        self
    }

    pub fn silence_threshold(mut self, threshold: f32) -> Self {
        self.config.silence_threshold = threshold;
        self
    }

    pub fn lsfm_bounds(mut self, low: f64, high: f64) -> Self {
        self.config.thresholds.lsfm_low = low;
        self.config.thresholds.lsfm_high = high;
        self
    }

    pub fn zcr_bounds(mut self, low: f64, high: f64) -> Self {
        self.config.thresholds.zcr_low = low;
        self.config.thresholds.zcr_high = high;
        self
    }

    pub fn energy_bounds(mut self, low: f64, high: f64) -> Self {
        self.config.thresholds.energy_low = low;
        self.config.thresholds.energy_high = high;
        self
    }

    pub fn thresholds(mut self, thresholds: ClassificationThresholds) -> Self {
        self.config.thresholds = thresholds;
        self
    }

    /// Finish, validating framing and MFCC parameters.
    pub fn build(self) -> Result<ClassifierConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClassifierConfig::default();
        assert_eq!(config.frame_length, 2048);
        assert_eq!(config.hop_length, 512);
        assert_eq!(config.n_mfcc, 13);
        assert!((config.silence_threshold - 1e-6).abs() < 1e-12);
        assert_eq!(config.thresholds.lsfm_high, 0.8);
        assert_eq!(config.thresholds.energy_high, 150.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::new()
            .frame_length(1024)
            .hop_length(256)
            .zcr_bounds(0.2, 0.4)
            .build()
            .unwrap();

        assert_eq!(config.frame_length, 1024);
        assert_eq!(config.hop_length, 256);
        assert_eq!(config.thresholds.zcr_low, 0.2);
        assert_eq!(config.thresholds.zcr_high, 0.4);
        assert_eq!(config.thresholds.lsfm_low, 0.3);
    }

    #[test]
    fn test_builder_rejects_zero_lengths() {
        assert!(ConfigBuilder::new().frame_length(0).build().is_err());
        assert!(ConfigBuilder::new().hop_length(0).build().is_err());
        assert!(ConfigBuilder::new().n_mfcc(0).build().is_err());
    }

    #[test]
    fn test_builder_rejects_bad_mel_settings() {
        assert!(ConfigBuilder::new().n_mels(0).build().is_err());
        assert!(ConfigBuilder::new().n_mels(MAX_MEL_BANDS + 1).build().is_err());
        assert!(ConfigBuilder::new().n_mels(usize::MAX).build().is_err());
        assert!(ConfigBuilder::new().n_mfcc(40).n_mels(20).build().is_err());
        assert!(ConfigBuilder::new().n_mfcc(20).n_mels(20).build().is_ok());
    }

    #[test]
    fn test_builder_rejects_oversized_frames() {
        assert!(ConfigBuilder::new().frame_length(MAX_FRAME_LENGTH).build().is_ok());
        assert!(ConfigBuilder::new().frame_length(MAX_FRAME_LENGTH + 1).build().is_err());
        assert!(ConfigBuilder::new().frame_length(usize::MAX).build().is_err());
    }

    #[test]
    fn test_from_file_rejects_oversized_mels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, format!(r#"{{ "n_mels": {} }}"#, usize::MAX)).unwrap();

        let err = ClassifierConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, NoiseCheckError::InvalidParameters(_)));
    }

    #[test]
    fn test_partial_json() {
        let config: ClassifierConfig =
            serde_json::from_str(r#"{ "hop_length": 256, "thresholds": { "zcr_high": 0.35 } }"#)
                .unwrap();

        assert_eq!(config.hop_length, 256);
        assert_eq!(config.frame_length, 2048);
        assert_eq!(config.thresholds.zcr_high, 0.35);
        assert_eq!(config.thresholds.zcr_low, 0.1);
    }

    #[test]
    fn test_from_file_rejects_invalid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "frame_length": 0 }"#).unwrap();

        let err = ClassifierConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, NoiseCheckError::InvalidParameters(_)));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = ClassifierConfig::load(Some(Path::new("/nonexistent/noisecheckr.json")))
            .unwrap_err();
        assert!(matches!(err, NoiseCheckError::Config(_)));
    }
}
