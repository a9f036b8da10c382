// src/core/analyzer.rs
//
// High-level file classification API with builder pattern.

use anyhow::Result;
use std::path::{Path, PathBuf};

use super::buffer::SampleBuffer;
use super::classifier::NoiseClassifier;
use super::decoder::{decode_audio, AudioData};
use crate::config::{ClassificationThresholds, ClassifierConfig, ConfigBuilder};
use crate::detection::ClassificationResult;

/// Builder for AudioAnalyzer configuration
pub struct AnalyzerBuilder {
    config: ConfigBuilder,
}

impl AnalyzerBuilder {
    pub fn new() -> Self {
        Self {
            config: ConfigBuilder::new(),
        }
    }

    pub fn config(mut self, config: ClassifierConfig) -> Self {
        self.config = ConfigBuilder::from_config(config);
        self
    }

    pub fn frame_length(mut self, frame_length: usize) -> Self {
        self.config = self.config.frame_length(frame_length);
        self
    }

    pub fn hop_length(mut self, hop_length: usize) -> Self {
        self.config = self.config.hop_length(hop_length);
        self
    }

    pub fn n_mfcc(mut self, n_mfcc: usize) -> Self {
        self.config = self.config.n_mfcc(n_mfcc);
        self
    }

    pub fn thresholds(mut self, thresholds: ClassificationThresholds) -> Self {
        self.config = self.config.thresholds(thresholds);
        self
    }

    pub fn build<P: AsRef<Path>>(self, path: P) -> Result<AudioAnalyzer> {
        let classifier = NoiseClassifier::new(self.config.build()?)?;
        let audio = decode_audio(path.as_ref())?;
        let buffer = audio.to_sample_buffer()?;
        Ok(AudioAnalyzer {
            path: path.as_ref().to_path_buf(),
            audio,
            buffer,
            classifier,
        })
    }
}

impl Default for AnalyzerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoded file plus the classifier that will label it
pub struct AudioAnalyzer {
    path: PathBuf,
    audio: AudioData,
    buffer: SampleBuffer,
    classifier: NoiseClassifier,
}

impl AudioAnalyzer {
    /// Create analyzer with default configuration
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        AnalyzerBuilder::new().build(path)
    }

    /// Create analyzer with custom configuration
    pub fn with_config<P: AsRef<Path>>(path: P, config: ClassifierConfig) -> Result<Self> {
        AnalyzerBuilder::new().config(config).build(path)
    }

    /// Create a builder for custom configuration
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Run the classifier on the decoded mono signal
    pub fn classify(&self) -> ClassificationResult {
        self.classifier.classify(&self.buffer)
    }

    /// Get raw (interleaved) audio data
    pub fn audio_data(&self) -> &AudioData {
        &self.audio
    }

    /// Get the mono buffer fed to the classifier
    pub fn sample_buffer(&self) -> &SampleBuffer {
        &self.buffer
    }

    /// Get file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::NoiseLabel;
    use crate::testgen::{silence, write_wav};

    #[test]
    fn test_silent_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiet.wav");
        write_wav(&path, &silence(4096), 16000).unwrap();

        let analyzer = AudioAnalyzer::new(&path).unwrap();
        let result = analyzer.classify();
        assert_eq!(result.label, NoiseLabel::Noise);
        assert!(result.silent);
        assert_eq!(analyzer.sample_buffer().sample_rate(), 16000);
        assert_eq!(analyzer.path(), path.as_path());
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiet.wav");
        write_wav(&path, &silence(4096), 16000).unwrap();

        assert!(AudioAnalyzer::builder().hop_length(0).build(&path).is_err());
    }
}
