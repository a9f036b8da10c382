//! Batch classification over a file or folder

use anyhow::{bail, Result};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::{load_mono, NoiseClassifier};
use crate::detection::FileReport;

/// Extensions the batch runner decodes (case-insensitive)
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["wav", "mp3", "flac"];

/// Files found under the input path
#[derive(Debug, Default)]
pub struct FileScan {
    pub audio_files: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Collect audio files from a file or directory.
///
/// Directories are scanned one level deep unless `recursive` is set.
/// Both lists come back sorted.
pub fn collect_audio_files(path: &Path, recursive: bool) -> Result<FileScan> {
    let mut scan = FileScan::default();

    if !path.exists() {
        bail!("Input path does not exist: {}", path.display());
    }

    if path.is_file() {
        if is_supported(path) {
            scan.audio_files.push(path.to_path_buf());
        } else {
            scan.skipped.push(path.to_path_buf());
        }
        return Ok(scan);
    }

    let walker = WalkDir::new(path)
        .min_depth(1)
        .max_depth(if recursive { usize::MAX } else { 1 })
        .follow_links(true);

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let file = entry.path();
        if is_supported(file) {
            scan.audio_files.push(file.to_path_buf());
        } else {
            scan.skipped.push(file.to_path_buf());
        }
    }

    scan.audio_files.sort();
    scan.skipped.sort();
    Ok(scan)
}

/// Decode and classify one file; failures are captured in the report
pub fn classify_file(path: &Path, classifier: &NoiseClassifier) -> FileReport {
    let display = path.display().to_string();

    match load_mono(path) {
        Ok(buffer) => FileReport::classified(display, classifier.classify(&buffer)),
        Err(e) => {
            log::warn!("Failed to process {}: {:#}", display, e);
            FileReport::failed(display, format!("{:#}", e))
        }
    }
}

/// Classify files in parallel, returning reports in input order
pub fn run_batch(files: &[PathBuf], classifier: &NoiseClassifier, show_progress: bool) -> Vec<FileReport> {
    let progress = if show_progress {
        let bar = ProgressBar::new(files.len() as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] {bar:40} {pos}/{len} {msg}",
        ) {
            bar.set_style(style);
        }
        bar
    } else {
        ProgressBar::hidden()
    };

    let reports: Vec<FileReport> = files
        .par_iter()
        .progress_with(progress.clone())
        .map(|path| classify_file(path, classifier))
        .collect();

    progress.finish_and_clear();
    reports
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::NoiseLabel;
    use crate::testgen::generate_test_set;

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("a.wav")));
        assert!(is_supported(Path::new("b.MP3")));
        assert!(is_supported(Path::new("dir/c.Flac")));
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("README")));
    }

    #[test]
    fn test_collect_non_recursive() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.wav"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("nested").join("b.flac"), b"").unwrap();

        let scan = collect_audio_files(dir.path(), false).unwrap();
        assert_eq!(scan.audio_files, vec![dir.path().join("a.wav")]);
        assert_eq!(scan.skipped, vec![dir.path().join("notes.txt")]);

        let scan = collect_audio_files(dir.path(), true).unwrap();
        assert_eq!(scan.audio_files.len(), 2);
    }

    #[test]
    fn test_collect_missing_path() {
        assert!(collect_audio_files(Path::new("/nonexistent/audios"), false).is_err());
    }

    #[test]
    fn test_run_batch_keeps_order_and_failures() {
        let dir = tempfile::tempdir().unwrap();
        let mut files = generate_test_set(dir.path(), 16000).unwrap();
        let broken = dir.path().join("broken.mp3");
        std::fs::write(&broken, b"not audio").unwrap();
        files.push(broken);

        let classifier = NoiseClassifier::default();
        let reports = run_batch(&files, &classifier, false);

        assert_eq!(reports.len(), 4);
        for (report, file) in reports.iter().zip(&files) {
            assert_eq!(report.path, file.display().to_string());
        }
        assert_eq!(reports[0].label(), Some(NoiseLabel::Noise)); // silence
        assert_eq!(reports[1].label(), Some(NoiseLabel::Noise)); // white noise
        assert_eq!(reports[2].label(), Some(NoiseLabel::NoneNoise)); // tone
        assert_eq!(reports[3].label(), None);
    }
}
