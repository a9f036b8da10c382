// src/core/analysis/flatness.rs
//
// Long-term spectral flatness measure (LSFM): mean over frames of the
// geometric/arithmetic mean ratio of each frame's magnitude spectrum.

use super::{check_samples, FeatureError};
use crate::config::ClassifierConfig;
use crate::core::dsp::{mean, FftProcessor, Framer, WindowType};

/// Returned when no frame can be analysed
pub const LSFM_FALLBACK: f64 = 1.0;

const EPSILON: f64 = 1e-10;

/// Spectral flatness of one magnitude spectrum, in [0, 1].
///
/// A (near-)silent spectrum counts as perfectly flat.
pub fn frame_flatness(magnitudes: &[f64]) -> f64 {
    if magnitudes.is_empty() || magnitudes.iter().sum::<f64>() < EPSILON {
        return 1.0;
    }

    let log_mean = magnitudes.iter().map(|m| (m + EPSILON).ln()).sum::<f64>()
        / magnitudes.len() as f64;
    let geometric = log_mean.exp();
    let arithmetic = mean(magnitudes);

    (geometric / (arithmetic + EPSILON)).clamp(0.0, 1.0)
}

/// Compute LSFM over `frame_length`-sample frames at `hop_length` stride.
///
/// Never fails: short buffers, bad framing or non-finite input yield
/// [`LSFM_FALLBACK`] and a warning.
pub fn compute_lsfm(samples: &[f32], config: &ClassifierConfig) -> f64 {
    match try_lsfm(samples, config) {
        Ok(lsfm) => lsfm,
        Err(e) => {
            log::warn!("LSFM computation failed ({}); using {}", e, LSFM_FALLBACK);
            LSFM_FALLBACK
        }
    }
}

fn try_lsfm(samples: &[f32], config: &ClassifierConfig) -> Result<f64, FeatureError> {
    check_samples(samples)?;
    let framer = Framer::new(samples, config.frame_length, config.hop_length)?;

    let mut fft = FftProcessor::new(config.frame_length, WindowType::Rectangular);
    let per_frame: Vec<f64> = framer
        .frames()
        .map(|frame| frame_flatness(&fft.magnitude_spectrum(frame)))
        .collect();

    log::debug!(
        "LSFM over {} frames of {} samples",
        per_frame.len(),
        config.frame_length
    );

    Ok(mean(&per_frame))
}
