//! Mel filterbank and cepstral transform
//!
//! Slaney-style mel scale (linear below 1 kHz, logarithmic above) with
//! area-normalised triangular filters, plus an orthonormal DCT-II.

use std::f64::consts::PI;

const F_SP: f64 = 200.0 / 3.0;
const MIN_LOG_HZ: f64 = 1000.0;
const MIN_LOG_MEL: f64 = MIN_LOG_HZ / F_SP;

fn log_step() -> f64 {
    6.4f64.ln() / 27.0
}

/// Hz to mel (Slaney scale)
pub fn hz_to_mel(hz: f64) -> f64 {
    if hz >= MIN_LOG_HZ {
        MIN_LOG_MEL + (hz / MIN_LOG_HZ).ln() / log_step()
    } else {
        hz / F_SP
    }
}

/// Mel to Hz (Slaney scale)
pub fn mel_to_hz(mel: f64) -> f64 {
    if mel >= MIN_LOG_MEL {
        MIN_LOG_HZ * (log_step() * (mel - MIN_LOG_MEL)).exp()
    } else {
        mel * F_SP
    }
}

/// Triangular mel filters spanning 0 Hz to Nyquist
pub struct MelFilterbank {
    /// Per filter: first bin and the weights starting there
    filters: Vec<(usize, Vec<f64>)>,
    num_bins: usize,
}

impl MelFilterbank {
    pub fn new(n_mels: usize, fft_size: usize, sample_rate: u32) -> Self {
        let num_bins = fft_size / 2 + 1;
        let nyquist = sample_rate as f64 / 2.0;

        let fft_freqs: Vec<f64> = (0..num_bins)
            .map(|k| k as f64 * sample_rate as f64 / fft_size as f64)
            .collect();

        // n_mels + 2 edges evenly spaced on the mel axis
        let mel_max = hz_to_mel(nyquist);
        let edges: Vec<f64> = (0..n_mels + 2)
            .map(|i| mel_to_hz(mel_max * i as f64 / (n_mels + 1) as f64))
            .collect();

        let mut filters = Vec::with_capacity(n_mels);
        for m in 0..n_mels {
            let (lo, center, hi) = (edges[m], edges[m + 1], edges[m + 2]);
            let norm = 2.0 / (hi - lo);

            let weights: Vec<f64> = fft_freqs
                .iter()
                .map(|&f| {
                    let rising = (f - lo) / (center - lo);
                    let falling = (hi - f) / (hi - center);
                    rising.min(falling).max(0.0) * norm
                })
                .collect();

            // Keep only the non-zero support
            match weights.iter().position(|&w| w > 0.0) {
                Some(start) => {
                    let end = weights.iter().rposition(|&w| w > 0.0).unwrap_or(start);
                    filters.push((start, weights[start..=end].to_vec()));
                }
                None => filters.push((0, Vec::new())),
            }
        }

        Self { filters, num_bins }
    }

    /// Apply filters to a one-sided power spectrum
    pub fn apply(&self, power: &[f64]) -> Vec<f64> {
        self.filters
            .iter()
            .map(|(start, weights)| {
                weights
                    .iter()
                    .zip(power.iter().skip(*start))
                    .map(|(w, p)| w * p)
                    .sum()
            })
            .collect()
    }

    pub fn num_filters(&self) -> usize {
        self.filters.len()
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Filters with no FFT bin inside their support
    pub fn empty_filters(&self) -> usize {
        self.filters.iter().filter(|(_, w)| w.is_empty()).count()
    }
}

/// Orthonormal DCT-II keeping the first `num_coefficients` outputs
pub struct Dct {
    basis: Vec<Vec<f64>>,
}

impl Dct {
    pub fn new(input_len: usize, num_coefficients: usize) -> Self {
        let n = input_len as f64;
        let basis = (0..num_coefficients)
            .map(|k| {
                let scale = if k == 0 { (1.0 / n).sqrt() } else { (2.0 / n).sqrt() };
                (0..input_len)
                    .map(|i| scale * (PI * k as f64 * (2.0 * i as f64 + 1.0) / (2.0 * n)).cos())
                    .collect()
            })
            .collect();
        Self { basis }
    }

    pub fn transform(&self, input: &[f64]) -> Vec<f64> {
        self.basis
            .iter()
            .map(|row| row.iter().zip(input).map(|(b, x)| b * x).sum())
            .collect()
    }
}

/// Power to decibels with a floor `top_db` below the global maximum.
/// Operates in place over a whole (frames × bands) spectrogram.
pub fn power_to_db(spectrogram: &mut [Vec<f64>], amin: f64, top_db: f64) {
    let mut max_db = f64::NEG_INFINITY;
    for row in spectrogram.iter_mut() {
        for value in row.iter_mut() {
            *value = 10.0 * value.max(amin).log10();
            max_db = max_db.max(*value);
        }
    }

    let floor = max_db - top_db;
    for row in spectrogram.iter_mut() {
        for value in row.iter_mut() {
            *value = value.max(floor);
        }
    }
}
