//! Audio feature extraction
//!
//! Contains the three features the classifier consumes:
//! - Long-term spectral flatness (LSFM)
//! - Zero-crossing rate (ZCR)
//! - Mean MFCC vector
//!
//! None of these return errors. Each has a documented fallback value that
//! is substituted (and logged) when extraction fails.

mod flatness;
mod mfcc;
mod zcr;

pub use flatness::{compute_lsfm, frame_flatness, LSFM_FALLBACK};
pub use mfcc::{compute_mfcc_matrix, compute_mfcc_mean, MfccParams};
pub use zcr::{compute_zcr, frame_zero_crossing_rate, ZCR_FALLBACK};

use thiserror::Error;

use crate::error::NoiseCheckError;

/// Why a feature fell back to its default
#[derive(Debug, Error)]
pub enum FeatureError {
    #[error(transparent)]
    Framing(#[from] NoiseCheckError),

    #[error("non-finite sample at index {0}")]
    NonFinite(usize),

    #[error("empty audio buffer")]
    Empty,

    #[error("sample rate must be positive")]
    SampleRate,

    #[error("n_mfcc ({n_mfcc}) must be between 1 and n_mels ({n_mels})")]
    Coefficients { n_mfcc: usize, n_mels: usize },

    #[error("{name} ({value}) exceeds {max}")]
    TooLarge {
        name: &'static str,
        value: usize,
        max: usize,
    },
}

/// Shared input checks for all feature extractors
pub(crate) fn check_samples(samples: &[f32]) -> Result<(), FeatureError> {
    if samples.is_empty() {
        return Err(FeatureError::Empty);
    }
    if let Some(index) = crate::core::dsp::stats::first_non_finite(samples) {
        return Err(FeatureError::NonFinite(index));
    }
    Ok(())
}
