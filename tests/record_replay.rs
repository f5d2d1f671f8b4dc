//! Cassette replay integration tests - zero network I/O.
//!
//! All tests set `ROOMGEN_REPLAY` so the binary never contacts a live API.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd(cassette: &str) -> Command {
    let mut cmd = Command::cargo_bin("roomgen").unwrap();
    cmd.env("ROOMGEN_REPLAY", fixtures_dir().join(cassette))
        .env("ROOMGEN_CONFIG", "/nonexistent/roomgen/config.toml")
        .env_remove("ROOMGEN_REC")
        .env_remove("OPENAI_API_KEY")
        .env_remove("TOGETHER_API_KEY");
    cmd
}

/// Absolute path to the `test_fixtures` directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures")
}

fn fresh_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn together_replay_writes_each_variation() {
    let out = fresh_dir("roomgen_replay_together");

    cmd("together_bedroom.cassette.yaml")
        .args(["--provider", "together", "--style", "Scandinavian", "--room-type", "bedroom"])
        .args(["-n", "2", "--output-dir", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:").count(2));

    let png = out.join("roomgen_scandinavian_bedroom_1.png");
    let jpg = out.join("roomgen_scandinavian_bedroom_2.jpg");
    assert!(png.exists(), "first variation should be written as PNG");
    assert!(jpg.exists(), "second variation should be written as JPEG");

    let data = std::fs::read(&png).unwrap();
    assert_eq!(&data[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

    let _ = std::fs::remove_dir_all(&out);
}

#[test]
fn openai_replay_needs_no_key() {
    let out = fresh_dir("roomgen_replay_openai");

    cmd("openai_kitchen.cassette.yaml")
        .args(["--provider", "openai", "--style", "Industrial", "--room-type", "kitchen"])
        .args(["--output-dir", out.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved:"));

    assert!(out.join("roomgen_industrial_kitchen_1.png").exists());

    let _ = std::fs::remove_dir_all(&out);
}

#[test]
fn together_replay_still_rejects_malformed_size() {
    let out = fresh_dir("roomgen_replay_bad_size");

    cmd("together_bedroom.cassette.yaml")
        .args(["--provider", "together", "--size", "1024by1024", "-n", "2"])
        .args(["--output-dir", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("Saved:").not());

    assert!(!out.exists(), "no images should be written for a rejected size");
}

#[test]
fn replayed_backend_error_fails_without_writing() {
    let out = fresh_dir("roomgen_replay_error");

    cmd("openai_quota_error.cassette.yaml")
        .args(["--provider", "openai", "--output-dir", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeded your current quota"));

    assert!(!out.exists(), "no output directory should be created on failure");
}

#[test]
fn missing_cassette_is_reported() {
    cmd("does_not_exist.cassette.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read cassette"));
}

#[test]
fn corrupt_payload_is_reported() {
    let cassette = std::env::temp_dir().join("roomgen_corrupt.cassette.yaml");
    std::fs::write(
        &cassette,
        "name: corrupt\nrecorded_at: \"2026-10-16T00:00:00Z\"\ncommit: test\ninteractions:\n  - seq: 0\n    port: image_generator\n    method: generate\n    input: {}\n    output:\n      Ok:\n        images:\n          - \"%%% not base64 %%%\"\n",
    )
    .unwrap();
    let out = fresh_dir("roomgen_replay_corrupt");

    Command::cargo_bin("roomgen")
        .unwrap()
        .env("ROOMGEN_REPLAY", &cassette)
        .env("ROOMGEN_CONFIG", "/nonexistent/roomgen/config.toml")
        .args(["--output-dir", out.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Image 1 is not valid base64"));

    let _ = std::fs::remove_file(&cassette);
}
