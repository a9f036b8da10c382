// src/core/analysis/zcr.rs
//
// Mean zero-crossing rate over frames.

use super::{check_samples, FeatureError};
use crate::config::ClassifierConfig;
use crate::core::dsp::{mean, Framer};

/// Returned when no frame can be analysed
pub const ZCR_FALLBACK: f64 = 0.0;

/// Magnitudes at or below this are treated as zero (and zero as positive)
const ZERO_THRESHOLD: f32 = 1e-10;

#[inline]
fn is_negative(sample: f32) -> bool {
    sample < -ZERO_THRESHOLD
}

/// Fraction of adjacent sample pairs in `frame` whose signs differ.
///
/// The divisor is the number of pairs, `frame.len() - 1`, not the frame
/// length, so a strictly alternating frame scores exactly 1.0.
pub fn frame_zero_crossing_rate(frame: &[f32]) -> f64 {
    if frame.len() < 2 {
        return 0.0;
    }

    let crossings = frame
        .windows(2)
        .filter(|pair| is_negative(pair[0]) != is_negative(pair[1]))
        .count();

    crossings as f64 / (frame.len() - 1) as f64
}

/// Compute the mean ZCR across frames.
///
/// Never fails: short buffers, bad framing or non-finite input yield
/// [`ZCR_FALLBACK`] and a warning.
pub fn compute_zcr(samples: &[f32], config: &ClassifierConfig) -> f64 {
    match try_zcr(samples, config) {
        Ok(zcr) => zcr,
        Err(e) => {
            log::warn!("ZCR computation failed ({}); using {}", e, ZCR_FALLBACK);
            ZCR_FALLBACK
        }
    }
}

fn try_zcr(samples: &[f32], config: &ClassifierConfig) -> Result<f64, FeatureError> {
    check_samples(samples)?;
    let framer = Framer::new(samples, config.frame_length, config.hop_length)?;

    let rates: Vec<f64> = framer.frames().map(frame_zero_crossing_rate).collect();
    Ok(mean(&rates))
}
