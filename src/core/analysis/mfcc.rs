// src/core/analysis/mfcc.rs
//
// MFCC extraction and time-averaging.
//
// Pipeline: centred STFT (periodic Hann, power spectrum) -> mel filterbank
// -> dB with an 80 dB dynamic-range floor -> orthonormal DCT-II.

use super::{check_samples, FeatureError};
use crate::config::{ClassifierConfig, MAX_FRAME_LENGTH, MAX_MEL_BANDS};
use crate::core::dsp::mel::power_to_db;
use crate::core::dsp::{Dct, Framer, MelFilterbank, PowerSpectrum, WindowType};

const AMIN: f64 = 1e-10;

/// MFCC analysis parameters
#[derive(Debug, Clone)]
pub struct MfccParams {
    pub num_coefficients: usize,
    pub num_mel_bands: usize,
    pub fft_size: usize,
    pub hop_size: usize,
    /// Dynamic range kept below the loudest mel bin, in dB
    pub top_db: f64,
}

impl Default for MfccParams {
    fn default() -> Self {
        Self::from(&ClassifierConfig::default())
    }
}

impl From<&ClassifierConfig> for MfccParams {
    fn from(config: &ClassifierConfig) -> Self {
        Self {
            num_coefficients: config.n_mfcc,
            num_mel_bands: config.n_mels,
            fft_size: config.frame_length,
            hop_size: config.hop_length,
            top_db: 80.0,
        }
    }
}

/// Compute the MFCC matrix, one row per coefficient and one column per frame.
pub fn compute_mfcc_matrix(
    samples: &[f32],
    sample_rate: u32,
    params: &MfccParams,
) -> Result<Vec<Vec<f64>>, FeatureError> {
    check_samples(samples)?;
    if sample_rate == 0 {
        return Err(FeatureError::SampleRate);
    }
    if params.num_coefficients == 0 || params.num_coefficients > params.num_mel_bands {
        return Err(FeatureError::Coefficients {
            n_mfcc: params.num_coefficients,
            n_mels: params.num_mel_bands,
        });
    }

    if params.num_mel_bands > MAX_MEL_BANDS {
        return Err(FeatureError::TooLarge {
            name: "n_mels",
            value: params.num_mel_bands,
            max: MAX_MEL_BANDS,
        });
    }
    if params.fft_size > MAX_FRAME_LENGTH {
        return Err(FeatureError::TooLarge {
            name: "frame_length",
            value: params.fft_size,
            max: MAX_FRAME_LENGTH,
        });
    }

    // Centre frames on hop boundaries by zero-padding half a frame each side
    let pad = params.fft_size / 2;
    let padded_len = samples
        .len()
        .checked_add(2 * pad)
        .ok_or(FeatureError::TooLarge {
            name: "buffer length",
            value: samples.len(),
            max: usize::MAX - 2 * pad,
        })?;
    let mut padded = vec![0.0f64; padded_len];
    for (dst, &s) in padded[pad..].iter_mut().zip(samples) {
        *dst = s as f64;
    }
    let framer = Framer::new(&padded, params.fft_size, params.hop_size)?;

    let mut spectrum = PowerSpectrum::new(params.fft_size, WindowType::Hann);
    let filterbank = MelFilterbank::new(params.num_mel_bands, params.fft_size, sample_rate);
    let empty = filterbank.empty_filters();
    if empty > 0 {
        log::debug!(
            "{} of {} mel filters cover no FFT bin; try fewer mel bands",
            empty,
            params.num_mel_bands
        );
    }

    let mut mel_frames = framer
        .frames()
        .map(|frame| -> Result<Vec<f64>, FeatureError> {
            let power = spectrum.compute(frame)?;
            Ok(filterbank.apply(&power))
        })
        .collect::<Result<Vec<_>, _>>()?;

    power_to_db(&mut mel_frames, AMIN, params.top_db);

    let dct = Dct::new(params.num_mel_bands, params.num_coefficients);
    let per_frame: Vec<Vec<f64>> = mel_frames.iter().map(|bands| dct.transform(bands)).collect();

    Ok((0..params.num_coefficients)
        .map(|k| per_frame.iter().map(|coeffs| coeffs[k]).collect())
        .collect())
}

/// Mean of each MFCC coefficient over time; always `n_mfcc` long.
///
/// Never fails: on any extraction error the result is a zero vector and a
/// warning is logged.
pub fn compute_mfcc_mean(samples: &[f32], sample_rate: u32, config: &ClassifierConfig) -> Vec<f64> {
    let params = MfccParams::from(config);

    match compute_mfcc_matrix(samples, sample_rate, &params) {
        Ok(matrix) => matrix
            .iter()
            .map(|row| row.iter().sum::<f64>() / row.len().max(1) as f64)
            .collect(),
        Err(e) => {
            log::warn!("MFCC computation failed ({}); using zero vector", e);
            vec![0.0; config.n_mfcc]
        }
    }
}
