//! Detection module for noisecheckr

mod result;

pub use result::{
    BatchSummary, ClassificationResult, FeatureSet, FileOutcome, FileReport, NoiseLabel,
};
