//! FFT processing with windowing

use num_complex::Complex;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

use super::windows::{create_window, WindowType};
use crate::error::{NoiseCheckError, Result};

/// Full-length complex FFT over real frames.
///
/// Returns every bin (`fft_size` of them, mirrored negative frequencies
/// included), matching a plain DFT of the frame.
pub struct FftProcessor {
    fft: Arc<dyn Fft<f64>>,
    window: Vec<f64>,
    buffer: Vec<Complex<f64>>,
}

impl FftProcessor {
    pub fn new(fft_size: usize, window_type: WindowType) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(fft_size),
            window: create_window(fft_size, window_type),
            buffer: vec![Complex::new(0.0, 0.0); fft_size],
        }
    }

    /// Compute magnitude spectrum over all bins.
    /// Short frames are zero-padded, long ones truncated.
    pub fn magnitude_spectrum(&mut self, samples: &[f32]) -> Vec<f64> {
        for (i, slot) in self.buffer.iter_mut().enumerate() {
            let s = samples.get(i).copied().unwrap_or(0.0) as f64;
            *slot = Complex::new(s * self.window[i], 0.0);
        }

        self.fft.process(&mut self.buffer);

        self.buffer.iter().map(|c| c.norm()).collect()
    }
}

/// Real-input FFT producing the one-sided power spectrum (`fft_size / 2 + 1` bins)
pub struct PowerSpectrum {
    fft: Arc<dyn RealToComplex<f64>>,
    window: Vec<f64>,
    input: Vec<f64>,
    output: Vec<Complex<f64>>,
    fft_size: usize,
}

impl PowerSpectrum {
    pub fn new(fft_size: usize, window_type: WindowType) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let fft = planner.plan_fft_forward(fft_size);
        let input = fft.make_input_vec();
        let output = fft.make_output_vec();
        Self {
            fft,
            window: create_window(fft_size, window_type),
            input,
            output,
            fft_size,
        }
    }

    /// `|X[k]|^2` of the windowed frame, unnormalized
    pub fn compute(&mut self, frame: &[f64]) -> Result<Vec<f64>> {
        for (i, slot) in self.input.iter_mut().enumerate() {
            *slot = frame.get(i).copied().unwrap_or(0.0) * self.window[i];
        }

        self.fft
            .process(&mut self.input, &mut self.output)
            .map_err(|e| NoiseCheckError::InvalidParameters(format!("FFT failed: {}", e)))?;

        Ok(self.output.iter().map(|c| c.norm_sqr()).collect())
    }

    pub fn num_bins(&self) -> usize {
        self.fft_size / 2 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_full_spectrum_length() {
        let mut fft = FftProcessor::new(1024, WindowType::Rectangular);
        let samples = vec![0.25f32; 1024];
        let mags = fft.magnitude_spectrum(&samples);
        assert_eq!(mags.len(), 1024);
        // DC carries all the energy of a constant signal
        assert!((mags[0] - 256.0).abs() < 1e-9);
        assert!(mags[1..].iter().all(|&m| m < 1e-9));
    }

    #[test]
    fn test_full_spectrum_is_symmetric() {
        let mut fft = FftProcessor::new(64, WindowType::Rectangular);
        let samples: Vec<f32> = (0..64).map(|i| ((i * 7) % 5) as f32 - 2.0).collect();
        let mags = fft.magnitude_spectrum(&samples);
        for k in 1..32 {
            assert!((mags[k] - mags[64 - k]).abs() < 1e-9);
        }
    }

    #[test]
    fn test_power_spectrum_peak() {
        let n = 2048;
        let sr = 16000.0;
        let mut spec = PowerSpectrum::new(n, WindowType::Hann);
        assert_eq!(spec.num_bins(), 1025);

        // 1000 Hz lands exactly on bin 128
        let frame: Vec<f64> = (0..n)
            .map(|i| (2.0 * PI * 1000.0 * i as f64 / sr).sin())
            .collect();
        let power = spec.compute(&frame).unwrap();
        assert_eq!(power.len(), 1025);

        let peak_bin = power
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap();
        assert_eq!(peak_bin, 128);
    }
}
