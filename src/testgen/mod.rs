// src/testgen/mod.rs
//
// Test signal generation utilities for noisecheckr.
// Produces deterministic synthetic clips (white noise, tones, silence) and
// writes them as WAV files, so classification can be checked without
// shipping audio fixtures.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::PI;
use std::path::{Path, PathBuf};

/// Uniform white noise in `[-amplitude, amplitude]`, reproducible per seed
pub fn white_noise(len: usize, amplitude: f32, seed: u64) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.gen_range(-1.0f32..=1.0) * amplitude)
        .collect()
}

/// Pure sine tone starting at phase zero
pub fn sine_wave(frequency: f32, amplitude: f32, sample_rate: u32, len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| amplitude * (2.0 * PI * frequency * i as f32 / sample_rate as f32).sin())
        .collect()
}

/// Digital silence
pub fn silence(len: usize) -> Vec<f32> {
    vec![0.0; len]
}

/// Write mono samples as a 16-bit PCM WAV file
pub fn write_wav(path: &Path, samples: &[f32], sample_rate: u32) -> Result<()> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;

    for &s in samples {
        let value = (s.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
        writer.write_sample(value)?;
    }

    writer.finalize().context("Failed to finalize WAV file")?;
    Ok(())
}

/// Synthetic clip kinds with a known expected label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestSignal {
    /// All-zero buffer (silence gate)
    Silence,
    /// Full-scale uniform white noise
    WhiteNoise,
    /// 440 Hz tone at half scale
    Tone,
}

impl TestSignal {
    pub fn all() -> [Self; 3] {
        [Self::Silence, Self::WhiteNoise, Self::Tone]
    }

    pub fn file_stem(&self) -> &'static str {
        match self {
            TestSignal::Silence => "silence",
            TestSignal::WhiteNoise => "white_noise",
            TestSignal::Tone => "tone_440",
        }
    }

    /// One second of the signal at `sample_rate`
    pub fn generate(&self, sample_rate: u32) -> Vec<f32> {
        let len = sample_rate as usize;
        match self {
            TestSignal::Silence => silence(len),
            TestSignal::WhiteNoise => white_noise(len, 1.0, 42),
            TestSignal::Tone => sine_wave(440.0, 0.5, sample_rate, len),
        }
    }
}

/// Write one WAV per [`TestSignal`] into `dir`, returning the paths
pub fn generate_test_set(dir: &Path, sample_rate: u32) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    TestSignal::all()
        .iter()
        .map(|signal| {
            let path = dir.join(format!("{}.wav", signal.file_stem()));
            write_wav(&path, &signal.generate(sample_rate), sample_rate)?;
            Ok(path)
        })
        .collect()
}
