// src/core/buffer.rs
//
// Validated mono sample buffer handed to the classifier.

use crate::error::{NoiseCheckError, Result};

/// Mono samples paired with their sample rate.
///
/// Always non-empty with a positive sample rate. Samples are usually
/// normalized to [-1.0, 1.0] but this is not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f32>,
    sample_rate: u32,
}

impl SampleBuffer {
    pub fn new(samples: Vec<f32>, sample_rate: u32) -> Result<Self> {
        if samples.is_empty() {
            return Err(NoiseCheckError::InvalidBuffer(
                "sample buffer is empty".to_string(),
            ));
        }
        if sample_rate == 0 {
            return Err(NoiseCheckError::InvalidBuffer(
                "sample rate must be positive".to_string(),
            ));
        }
        Ok(Self {
            samples,
            sample_rate,
        })
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed buffer
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}
