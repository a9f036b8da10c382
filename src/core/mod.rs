//! Core analysis and classification modules

pub mod analysis;
pub mod analyzer;
pub mod buffer;
pub mod classifier;
pub mod decoder;
pub mod dsp;

pub use analysis::{compute_lsfm, compute_mfcc_mean, compute_zcr, FeatureError, MfccParams};
pub use analyzer::{AnalyzerBuilder, AudioAnalyzer};
pub use buffer::SampleBuffer;
pub use classifier::{classify, decide, extract_features, NoiseClassifier};
pub use decoder::{decode_audio, load_mono, AudioData};
pub use dsp::Framer;
