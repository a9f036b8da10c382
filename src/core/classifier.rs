// src/core/classifier.rs
//
// Silence gate, feature extraction and the ordered threshold cascade that
// turns a sample buffer into a noise label.

use super::analysis::{compute_lsfm, compute_mfcc_mean, compute_zcr};
use super::buffer::SampleBuffer;
use super::dsp::peak_amplitude;
use crate::config::{ClassificationThresholds, ClassifierConfig};
use crate::detection::{ClassificationResult, FeatureSet, NoiseLabel};
use crate::error::Result;

/// Label a feature set. First matching band wins:
///
/// 1. Noise: LSFM and ZCR above their upper bounds, MFCC energy below its
///    lower bound.
/// 2. Semi-Noise: all three inside their closed `[low, high]` bands.
/// 3. None-Noise: everything else, including NaN features.
pub fn decide(features: &FeatureSet, thresholds: &ClassificationThresholds) -> NoiseLabel {
    let lsfm = features.lsfm;
    let zcr = features.zcr;
    let energy = features.mfcc_energy();

    if lsfm > thresholds.lsfm_high && zcr > thresholds.zcr_high && energy < thresholds.energy_low {
        NoiseLabel::Noise
    } else if (thresholds.lsfm_low..=thresholds.lsfm_high).contains(&lsfm)
        && (thresholds.zcr_low..=thresholds.zcr_high).contains(&zcr)
        && (thresholds.energy_low..=thresholds.energy_high).contains(&energy)
    {
        NoiseLabel::SemiNoise
    } else {
        NoiseLabel::NoneNoise
    }
}

/// Compute MFCC, LSFM and ZCR concurrently.
///
/// The three extractors only read the buffer, so the result is identical to
/// running them one after another.
pub fn extract_features(buffer: &SampleBuffer, config: &ClassifierConfig) -> FeatureSet {
    let samples = buffer.samples();
    let (mfcc, (lsfm, zcr)) = rayon::join(
        || compute_mfcc_mean(samples, buffer.sample_rate(), config),
        || {
            rayon::join(
                || compute_lsfm(samples, config),
                || compute_zcr(samples, config),
            )
        },
    );

    FeatureSet { mfcc, lsfm, zcr }
}

/// Rule-based noise classifier with a validated configuration
#[derive(Debug, Clone)]
pub struct NoiseClassifier {
    config: ClassifierConfig,
}

impl NoiseClassifier {
    /// Fails with `InvalidParameters` when the framing or MFCC settings are
    /// out of range (see [`ClassifierConfig::validate`]).
    pub fn new(config: ClassifierConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify one buffer. Always yields exactly one label.
    pub fn classify(&self, buffer: &SampleBuffer) -> ClassificationResult {
        let peak = peak_amplitude(buffer.samples());
        if let Some(result) = silence_gate(buffer, peak, self.config.silence_threshold) {
            return result;
        }

        let features = extract_features(buffer, &self.config);
        let label = decide(&features, &self.config.thresholds);

        log::debug!(
            "LSFM={:.3} ZCR={:.3} MFCC energy={:.3} -> {}",
            features.lsfm,
            features.zcr,
            features.mfcc_energy(),
            label
        );

        ClassificationResult {
            label,
            features: Some(features),
            silent: false,
            peak_amplitude: peak,
            sample_rate: buffer.sample_rate(),
            duration_secs: buffer.duration_secs(),
        }
    }
}

/// `Some(Noise)` without feature work when `peak` is below `threshold`
fn silence_gate(buffer: &SampleBuffer, peak: f32, threshold: f32) -> Option<ClassificationResult> {
    if peak >= threshold {
        return None;
    }

    log::warn!(
        "Audio is nearly silent (peak {:.3e} < {:.1e}); labelling as {}",
        peak,
        threshold,
        NoiseLabel::Noise
    );
    Some(ClassificationResult {
        label: NoiseLabel::Noise,
        features: None,
        silent: true,
        peak_amplitude: peak,
        sample_rate: buffer.sample_rate(),
        duration_secs: buffer.duration_secs(),
    })
}

impl Default for NoiseClassifier {
    fn default() -> Self {
        Self {
            config: ClassifierConfig::default(),
        }
    }
}

/// One-shot classification with an unvalidated configuration.
///
/// Silent buffers are labelled before the configuration is checked, so
/// they come back as Noise even when the framing parameters are invalid.
pub fn classify(buffer: &SampleBuffer, config: &ClassifierConfig) -> Result<ClassificationResult> {
    let peak = peak_amplitude(buffer.samples());
    if let Some(result) = silence_gate(buffer, peak, config.silence_threshold) {
        return Ok(result);
    }
    Ok(NoiseClassifier::new(config.clone())?.classify(buffer))
}
