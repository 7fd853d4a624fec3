//! Integration tests for the textsplit CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn textsplit() -> Command {
    let mut cmd = Command::cargo_bin("textsplit").unwrap();
    cmd.env_remove("TEXTSPLIT_CONFIG");
    cmd
}

#[test]
fn test_split_markdown_sections() {
    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("guide.md"))
        .arg("--pattern")
        .arg(r"\n#")
        .arg("-n")
        .arg("1")
        .arg("--trim");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# Guide\nIntro text.\n\n"))
        .stdout(predicate::str::contains("## Install\nRun the installer.\n\n"))
        .stdout(predicate::str::contains("## Usage\nCall split on a document."));
}

#[test]
fn test_split_japanese_sentences() {
    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("japanese.txt"))
        .arg("-u")
        .arg("sentence")
        .arg("-n")
        .arg("1")
        .arg("--trim");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("これはテストです。\n\n"))
        .stdout(predicate::str::contains("日本語の文章を分割します。\n\n"));
}

#[test]
fn test_json_output() {
    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-n")
        .arg("1")
        .arg("--trim")
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let chunks: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[1]["text"], "The second paragraph is about mountains.");
    assert_eq!(chunks[1]["index"], 1);
    assert!(chunks[0]["source"].as_str().unwrap().ends_with("notes.txt"));
    assert_eq!(chunks[0]["start"], 0);
}

#[test]
fn test_markdown_output() {
    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-n")
        .arg("1")
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("### Chunk 1 `[0, "))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total chunks: 3*"));
}

#[test]
fn test_overlap_repeats_context() {
    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-u")
        .arg("sentence")
        .arg("-n")
        .arg("1")
        .arg("--overlap")
        .arg("50")
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let chunks: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    for pair in chunks.windows(2) {
        assert!(pair[1]["start"].as_u64() < pair[0]["end"].as_u64());
    }
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("The first paragraph talks about rivers."));
}

#[test]
fn test_glob_pattern() {
    let mut cmd = textsplit();
    cmd.arg("split").arg("-i").arg(fixture_path("*.txt")).arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("mountains"))
        .stdout(predicate::str::contains("二つ目の段落です。"));
}

#[test]
fn test_parallel_keeps_file_order() {
    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("*"))
        .arg("-p")
        .arg("-q")
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let chunks: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    let sources: Vec<&str> = chunks.iter().map(|c| c["source"].as_str().unwrap()).collect();
    let mut sorted = sources.clone();
    sorted.sort();
    assert_eq!(sources, sorted);
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("textsplit.toml");
    fs::write(
        &config,
        r#"
[splitting]
unit = "line"
max_units_per_chunk = 1
trim_whitespace = true

[output]
separator = "|"
"#,
    )
    .unwrap();

    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("guide.md"))
        .arg("-c")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("# Guide|Intro text.||## Install|"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = textsplit();
    cmd.arg("split").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_invalid_overlap() {
    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("--overlap")
        .arg("150");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_zero_budget() {
    let mut cmd = textsplit();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("notes.txt"))
        .arg("-n")
        .arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid budget 0"));
}

#[test]
fn test_help_command() {
    let mut cmd = textsplit();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("chunks"));
}

#[test]
fn test_list_units() {
    let mut cmd = textsplit();
    cmd.arg("list").arg("units");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("paragraph"))
        .stdout(predicate::str::contains("sentence"));
}

#[test]
fn test_list_formats() {
    let mut cmd = textsplit();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_generate_then_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("generated.toml");

    textsplit()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    textsplit()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Configuration is valid!"))
        .stdout(predicate::str::contains("Unit: paragraph"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[splitting]\nmax_units_per_chunk = 0\n").unwrap();

    textsplit()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗ Configuration is invalid!"))
        .stderr(predicate::str::contains("Validation failed"));
}
