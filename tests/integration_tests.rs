//! End-to-end runs of the `vidmark` binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Smallest header `infer` recognises as an MP4 video
const MP4_HEAD: &[u8] = b"\x00\x00\x00\x18ftypisom\x00\x00\x02\x00isomiso2mp41";
const PNG_HEAD: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

fn vidmark(workdir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vidmark").unwrap();
    cmd.current_dir(workdir)
        .env_remove("VIDMARK_CONFIG")
        .env_remove("VIDMARK_TEXT")
        .env_remove("VIDMARK_FONT")
        .env_remove("VIDMARK_LOG_LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_keep_flag() {
    let root = TempDir::new().unwrap();
    vidmark(root.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("-l, --leave-originals"))
        .stdout(predicate::str::contains("<INPUT_DIR>"))
        .stdout(predicate::str::contains("<OUTPUT_DIR>"));
}

#[test]
fn test_missing_arguments_fail() {
    let root = TempDir::new().unwrap();
    vidmark(root.path()).arg("only-input").assert().failure();
}

#[test]
fn test_empty_directory_is_a_noop() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    fs::create_dir(&input).unwrap();

    vidmark(root.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout("The directory is empty, nothing to do.\n");

    assert!(!output.exists());
}

#[test]
fn test_directory_without_videos() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("b.txt"), b"just some notes").unwrap();
    // Extension says video, content says image
    fs::write(input.join("fake.mp4"), PNG_HEAD).unwrap();

    vidmark(root.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout("Videos found... 0\nNo videos found, nothing to do.\n");

    assert!(input.join("b.txt").exists());
    assert!(input.join("fake.mp4").exists());
}

#[test]
fn test_missing_input_directory_fails() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("absent");
    let output = root.path().join("out");

    vidmark(root.path())
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist!"));

    assert!(!output.exists());
}

#[test]
fn test_missing_font_aborts_before_transcoding() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    let output = root.path().join("out");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("a.mp4"), MP4_HEAD).unwrap();
    fs::write(input.join("b.txt"), b"notes").unwrap();

    vidmark(root.path())
        .arg(&input)
        .arg(&output)
        .arg("--font")
        .arg(root.path().join("OpenSans-BoldItalic.ttf"))
        .assert()
        .failure()
        .stdout(predicate::str::starts_with("Videos found... 1\n(1/1) a.mp4 => "))
        .stdout(predicate::str::contains("OK").not())
        .stderr(predicate::str::contains("OpenSans-BoldItalic.ttf is not found!"));

    assert!(input.join("a.mp4").exists());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
fn test_invalid_log_level_fails() {
    let root = TempDir::new().unwrap();
    fs::create_dir(root.path().join("in")).unwrap();

    vidmark(root.path())
        .args(["--log-level", "chatty", "in", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level"));
}

#[test]
fn test_config_file_supplies_font() {
    let root = TempDir::new().unwrap();
    let input = root.path().join("in");
    fs::create_dir(&input).unwrap();
    fs::write(input.join("a.mp4"), MP4_HEAD).unwrap();
    fs::write(
        root.path().join("vidmark.toml"),
        "[watermark]\nfont = \"fonts/Custom.ttf\"\n",
    )
    .unwrap();

    // Picked up from the working directory; the relative font is missing
    vidmark(root.path())
        .args(["in", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Custom.ttf is not found!"));

    assert!(input.join("a.mp4").exists());
}
