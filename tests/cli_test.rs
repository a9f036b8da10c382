// tests/cli_test.rs
//
// Runs the noisecheckr binary against a folder of generated clips.

use std::path::Path;
use std::process::{Command, Output};

use noisecheckr::testgen::{generate_test_set, write_wav, white_noise};

fn run_noisecheckr(args: &[&str], input: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_noisecheckr"))
        .arg(input)
        .args(args)
        .env_remove("NOISECHECKR_CONFIG")
        .output()
        .expect("Failed to execute noisecheckr")
}

#[test]
fn text_report_labels_each_file() {
    let dir = tempfile::tempdir().unwrap();
    generate_test_set(dir.path(), 16000).unwrap();
    std::fs::write(dir.path().join("notes.txt"), "not audio").unwrap();

    let output = run_noisecheckr(&["--quiet", "--features"], dir.path());
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Found 3 audio file(s)"));
    assert!(stdout.contains("Skipping unsupported file"));
    assert!(stdout.contains("notes.txt"));
    assert!(stdout.contains("white_noise.wav"));
    assert!(stdout.contains("LSFM:"));
    assert!(stdout.contains("ZCR:"));
    assert!(stdout.contains("None-Noise"));
}

#[test]
fn json_report_is_parseable() {
    let dir = tempfile::tempdir().unwrap();
    generate_test_set(dir.path(), 16000).unwrap();

    let output = run_noisecheckr(&["--format", "json"], dir.path());
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = value["results"].as_array().unwrap();
    assert_eq!(results.len(), 3);

    let label_of = |stem: &str| {
        results
            .iter()
            .find(|r| r["path"].as_str().unwrap().contains(stem))
            .map(|r| r["label"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(label_of("silence"), "Noise");
    assert_eq!(label_of("white_noise"), "Noise");
    assert_eq!(label_of("tone_440"), "None-Noise");

    assert_eq!(value["summary"]["noise"], 2);
    assert_eq!(value["summary"]["none_noise"], 1);
}

#[test]
fn corrupt_file_does_not_abort_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_wav(&dir.path().join("noise.wav"), &white_noise(16000, 1.0, 1), 16000).unwrap();
    std::fs::write(dir.path().join("broken.flac"), b"garbage").unwrap();

    let output = run_noisecheckr(&["--format", "json"], dir.path());
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["summary"]["total"], 2);
    assert_eq!(value["summary"]["failed"], 1);
    assert_eq!(value["summary"]["noise"], 1);
}

#[test]
fn recursive_flag_descends() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("nested");
    generate_test_set(&nested, 16000).unwrap();

    let flat = run_noisecheckr(&["--format", "json"], dir.path());
    let flat: serde_json::Value = serde_json::from_slice(&flat.stdout).unwrap();
    assert_eq!(flat["summary"]["total"], 0);

    let deep = run_noisecheckr(&["--format", "json", "--recursive"], dir.path());
    let deep: serde_json::Value = serde_json::from_slice(&deep.stdout).unwrap();
    assert_eq!(deep["summary"]["total"], 3);
}

#[test]
fn config_file_and_overrides_apply() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{ "hop_length": 256, "thresholds": { "zcr_high": 0.35 } }"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_noisecheckr"))
        .args(["--print-config", "--config"])
        .arg(&config)
        .args(["--n-mfcc", "20"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["hop_length"], 256);
    assert_eq!(value["n_mfcc"], 20);
    assert_eq!(value["frame_length"], 2048);
    assert_eq!(value["thresholds"]["zcr_high"], 0.35);
}

#[test]
fn config_path_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("env.json");
    std::fs::write(&config, r#"{ "frame_length": 1024, "n_mels": 64 }"#).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_noisecheckr"))
        .arg("--print-config")
        .env("NOISECHECKR_CONFIG", &config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["frame_length"], 1024);
    assert_eq!(value["n_mels"], 64);
    assert_eq!(value["hop_length"], 512);
}

#[test]
fn oversized_mel_count_in_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{ "n_mels": 100000 }"#).unwrap();

    let output = run_noisecheckr(&["--config", config.to_str().unwrap()], dir.path());
    assert!(!output.status.success());
}

#[test]
fn missing_input_fails() {
    let output = run_noisecheckr(&[], Path::new("/nonexistent/audios"));
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

#[test]
fn invalid_framing_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_noisecheckr(&["--hop-length", "0"], dir.path());
    assert!(!output.status.success());
}
