//! Classification result types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Noise category assigned to a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseLabel {
    /// Flat, busy spectrum with little cepstral energy (or silence)
    #[serde(rename = "Noise")]
    Noise,
    /// Every feature inside the intermediate band
    #[serde(rename = "Semi-Noise")]
    SemiNoise,
    /// Anything else
    #[serde(rename = "None-Noise")]
    NoneNoise,
}

impl NoiseLabel {
    pub fn all() -> [Self; 3] {
        [Self::Noise, Self::SemiNoise, Self::NoneNoise]
    }

    pub fn name(&self) -> &'static str {
        match self {
            NoiseLabel::Noise => "Noise",
            NoiseLabel::SemiNoise => "Semi-Noise",
            NoiseLabel::NoneNoise => "None-Noise",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            NoiseLabel::Noise => "✗",
            NoiseLabel::SemiNoise => "~",
            NoiseLabel::NoneNoise => "✓",
        }
    }
}

impl fmt::Display for NoiseLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Features extracted from one clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Time-averaged MFCC vector (`n_mfcc` entries)
    pub mfcc: Vec<f64>,
    /// Long-term spectral flatness, in [0, 1]
    pub lsfm: f64,
    /// Mean zero-crossing rate, >= 0
    pub zcr: f64,
}

impl FeatureSet {
    /// Mean absolute MFCC value, the scalar the classifier thresholds
    pub fn mfcc_energy(&self) -> f64 {
        if self.mfcc.is_empty() {
            return 0.0;
        }
        self.mfcc.iter().map(|c| c.abs()).sum::<f64>() / self.mfcc.len() as f64
    }
}

/// Outcome of classifying one sample buffer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: NoiseLabel,
    /// Absent when the silence gate fired
    pub features: Option<FeatureSet>,
    pub silent: bool,
    pub peak_amplitude: f32,
    pub sample_rate: u32,
    pub duration_secs: f64,
}

impl ClassificationResult {
    pub fn mfcc_energy(&self) -> Option<f64> {
        self.features.as_ref().map(FeatureSet::mfcc_energy)
    }
}

/// What happened to one file of a batch
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum FileOutcome {
    Classified(ClassificationResult),
    Failed { error: String },
}

/// Per-file entry of a batch report
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

impl FileReport {
    pub fn classified(path: impl Into<String>, result: ClassificationResult) -> Self {
        Self {
            path: path.into(),
            outcome: FileOutcome::Classified(result),
        }
    }

    pub fn failed(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            outcome: FileOutcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn label(&self) -> Option<NoiseLabel> {
        match &self.outcome {
            FileOutcome::Classified(result) => Some(result.label),
            FileOutcome::Failed { .. } => None,
        }
    }
}

/// Counts over a whole batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub noise: usize,
    pub semi_noise: usize,
    pub none_noise: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[FileReport], skipped: usize) -> Self {
        let mut summary = Self {
            total: reports.len(),
            skipped,
            ..Default::default()
        };

        for report in reports {
            match report.label() {
                Some(NoiseLabel::Noise) => summary.noise += 1,
                Some(NoiseLabel::SemiNoise) => summary.semi_noise += 1,
                Some(NoiseLabel::NoneNoise) => summary.none_noise += 1,
                None => summary.failed += 1,
            }
        }

        summary
    }

    pub fn count(&self, label: NoiseLabel) -> usize {
        match label {
            NoiseLabel::Noise => self.noise,
            NoiseLabel::SemiNoise => self.semi_noise,
            NoiseLabel::NoneNoise => self.none_noise,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(label: NoiseLabel) -> ClassificationResult {
        ClassificationResult {
            label,
            features: None,
            silent: false,
            peak_amplitude: 0.5,
            sample_rate: 16000,
            duration_secs: 1.0,
        }
    }

    #[test]
    fn test_label_names() {
        assert_eq!(NoiseLabel::Noise.to_string(), "Noise");
        assert_eq!(NoiseLabel::SemiNoise.to_string(), "Semi-Noise");
        assert_eq!(NoiseLabel::NoneNoise.to_string(), "None-Noise");
        assert_eq!(
            serde_json::to_string(&NoiseLabel::SemiNoise).unwrap(),
            "\"Semi-Noise\""
        );
    }

    #[test]
    fn test_mfcc_energy() {
        let features = FeatureSet {
            mfcc: vec![-100.0, 50.0, 0.0, 10.0],
            lsfm: 0.5,
            zcr: 0.2,
        };
        assert!((features.mfcc_energy() - 40.0).abs() < 1e-12);

        let empty = FeatureSet {
            mfcc: vec![],
            lsfm: 0.5,
            zcr: 0.2,
        };
        assert_eq!(empty.mfcc_energy(), 0.0);
    }

    #[test]
    fn test_summary_counts() {
        let reports = vec![
            FileReport::classified("a.wav", result(NoiseLabel::Noise)),
            FileReport::classified("b.wav", result(NoiseLabel::Noise)),
            FileReport::classified("c.wav", result(NoiseLabel::NoneNoise)),
            FileReport::failed("d.mp3", "corrupt"),
        ];

        let summary = BatchSummary::from_reports(&reports, 3);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(NoiseLabel::Noise), 2);
        assert_eq!(summary.semi_noise, 0);
        assert_eq!(summary.none_noise, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 3);
    }

    #[test]
    fn test_report_json_shape() {
        let json = serde_json::to_value(FileReport::failed("d.mp3", "corrupt")).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["path"], "d.mp3");
        assert_eq!(json["error"], "corrupt");

        let json =
            serde_json::to_value(FileReport::classified("a.wav", result(NoiseLabel::Noise)))
                .unwrap();
        assert_eq!(json["status"], "classified");
        assert_eq!(json["label"], "Noise");
    }
}
