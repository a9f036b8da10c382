//! Configuration module for noisecheckr

mod settings;

pub use settings::{
    ClassificationThresholds, ClassifierConfig, ConfigBuilder, MAX_FRAME_LENGTH, MAX_MEL_BANDS,
};
