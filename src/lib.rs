//! noisecheckr - Rule-based noise classification for short audio clips
//!
//! Extracts three features from a mono clip and labels it as
//! **Noise**, **Semi-Noise** or **None-Noise** with a fixed threshold
//! cascade.
//!
//! ## Features
//!
//! - **MFCC**: time-averaged Mel-frequency cepstral coefficients (13 by default)
//! - **LSFM**: long-term spectral flatness, near 1 for noise and near 0 for tones
//! - **ZCR**: mean zero-crossing rate over frames
//! - **Batch mode**: classify a whole folder in parallel (WAV, MP3, FLAC)
//!
//! Feature extraction never fails. Each feature substitutes a fallback
//! (LSFM 1.0, ZCR 0.0, zero MFCC vector) and logs the cause instead.
//!
//! ## Module Structure
//!
//! - `core` - Framing, DSP primitives, feature extraction and the classifier
//! - `cli` - Command-line interface and batch runner
//! - `config` - Classifier configuration
//! - `detection` - Labels, feature sets and report types
//! - `testgen` - Synthetic test signals
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use noisecheckr::{NoiseClassifier, SampleBuffer, ConfigBuilder};
//!
//! let config = ConfigBuilder::new().hop_length(256).build()?;
//! let classifier = NoiseClassifier::new(config)?;
//!
//! let buffer = SampleBuffer::new(samples, 16000)?;
//! let result = classifier.classify(&buffer);
//! println!("{}", result.label);
//! ```
//!
//! ## Decision Bands
//!
//! | Label      | LSFM          | ZCR           | MFCC energy     |
//! |------------|---------------|---------------|-----------------|
//! | Noise      | > 0.8         | > 0.3         | < 50            |
//! | Semi-Noise | 0.3 ..= 0.8   | 0.1 ..= 0.3   | 50 ..= 150      |
//! | None-Noise | anything else |               |                 |
//!
//! Clips whose peak amplitude is below 1e-6 are labelled Noise without
//! computing any feature.

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Configuration
pub mod config;

// Result types
pub mod detection;

pub mod error;

// Synthetic signal generation for tests
pub mod testgen;

// Re-export commonly used types at crate root for convenience
pub use config::{ClassificationThresholds, ClassifierConfig, ConfigBuilder};
pub use core::{
    classify, decide, extract_features, AnalyzerBuilder, AudioAnalyzer, AudioData,
    NoiseClassifier, SampleBuffer,
};
pub use detection::{BatchSummary, ClassificationResult, FeatureSet, FileReport, NoiseLabel};
pub use error::{NoiseCheckError, Result};
