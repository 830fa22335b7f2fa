#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use tempfile::tempdir;

#[test]
fn renames_matching_files() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("img_7.jpg")).unwrap();
    File::create(dir.path().join("readme.md")).unwrap();

    let mut cmd = Command::cargo_bin("brn").unwrap();
    cmd.args([
        dir.path().to_str().unwrap(),
        r"img_(\d+)\.jpg",
        "holidays_:1,04i:.jpg",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[>] img_7.jpg -> holidays_0007.jpg"))
        .stdout(predicate::str::contains("1 file matched"));

    assert!(dir.path().join("holidays_0007.jpg").exists());
    assert!(dir.path().join("readme.md").exists());
}

#[test]
fn dry_run_reports_without_renaming() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("Track01.MP3")).unwrap();

    let mut cmd = Command::cargo_bin("brn").unwrap();
    cmd.args([
        "-n",
        dir.path().to_str().unwrap(),
        r"Track(\d+)\.(MP3)",
        "track_:1,i:.:2,lower:",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--- dry run ---"))
        .stdout(predicate::str::contains("[>] Track01.MP3 -> track_1.mp3"));

    let entries: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["Track01.MP3"]);
}

#[test]
fn unchanged_is_reported() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("same.txt")).unwrap();

    let mut cmd = Command::cargo_bin("brn").unwrap();
    cmd.args([dir.path().to_str().unwrap(), r"same\.txt", ":0:"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("[=] same.txt"));
}

#[test]
fn no_match_message() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a.txt")).unwrap();

    let mut cmd = Command::cargo_bin("brn").unwrap();
    cmd.args([dir.path().to_str().unwrap(), r"\.jpg$", "x"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("no files matched the pattern"));
}

#[test]
fn json_output() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("a_1.txt")).unwrap();

    let mut cmd = Command::cargo_bin("brn").unwrap();
    cmd.args([
        "--json",
        "--dry-run",
        dir.path().to_str().unwrap(),
        r"a_(\d)",
        "b_:1:.txt",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""status": "simulated""#))
        .stdout(predicate::str::contains(r#""target": "b_1.txt""#));
}

#[test]
fn invalid_regex_errors() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("brn").unwrap();
    cmd.args([dir.path().to_str().unwrap(), "img_(", ":1:"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid input regex"));
}

#[test]
fn wide_pad_renders_and_warns() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("n_7.txt")).unwrap();

    let mut cmd = Command::cargo_bin("brn").unwrap();
    cmd.args(["-n", dir.path().to_str().unwrap(), r"n_(\d)", ":1,0300i:.txt"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("{}7.txt", "0".repeat(299))))
        .stderr(predicate::str::contains("pad width exceeds"));
}
