#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn photoindex_cmd(data: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("photoindex"));
    cmd.env("PHOTOINDEX_DATA", data.as_os_str())
        .env_remove("PHOTOINDEX_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn write_image(dir: &Path, name: &str, bytes: &[u8]) -> String {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path.to_string_lossy().into_owned()
}

fn blob_count(data: &Path) -> usize {
    match fs::read_dir(data.join("photos")) {
        Ok(entries) => entries.count(),
        Err(_) => 0,
    }
}

#[test]
fn test_capture_list_delete_workflow() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    let first = write_image(temp.path(), "a.jpeg", b"first image");
    let second = write_image(temp.path(), "b.jpeg", b"second image");

    photoindex_cmd(&data)
        .args(["capture", first.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo added:"));
    photoindex_cmd(&data)
        .args(["add", second.as_str()])
        .assert()
        .success();

    assert!(data.join("meta").join("photos.json").exists());
    assert_eq!(blob_count(&data), 2);

    photoindex_cmd(&data)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("2. "))
        .stdout(predicate::str::contains(".jpeg"));

    photoindex_cmd(&data)
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo deleted (1)"));

    assert_eq!(blob_count(&data), 1);

    // No subcommand lists
    let out = photoindex_cmd(&data).assert().success().get_output().stdout.clone();
    let listing = String::from_utf8(out).unwrap();
    assert_eq!(listing.lines().count(), 1);
}

#[test]
fn test_newest_photo_is_listed_first() {
    let temp = TempDir::new().unwrap();
    let data = temp.path().join("data");
    let first = write_image(temp.path(), "a.jpeg", b"first");
    let second = write_image(temp.path(), "b.jpeg", b"second");

    photoindex_cmd(&data).args(["capture", first.as_str()]).assert().success();
    photoindex_cmd(&data).args(["capture", second.as_str()]).assert().success();

    let out = photoindex_cmd(&data)
        .args(["list", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let rows: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);

    let newest = rows[0]["storageKey"].as_str().unwrap();
    let oldest = rows[1]["storageKey"].as_str().unwrap();
    let millis = |key: &str| key.trim_end_matches(".jpeg").parse::<i64>().unwrap();
    assert!(millis(newest) > millis(oldest));
    assert_eq!(rows[0]["available"], true);

    let blob = fs::read(data.join("photos").join(newest)).unwrap();
    assert_eq!(blob, b"second");
}

#[test]
fn test_capture_from_stdin() {
    let temp = TempDir::new().unwrap();

    photoindex_cmd(temp.path())
        .args(["capture", "-"])
        .write_stdin("piped image bytes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Photo added:"));

    assert_eq!(blob_count(temp.path()), 1);
}

#[test]
fn test_capture_without_input_is_cancelled() {
    let temp = TempDir::new().unwrap();

    photoindex_cmd(temp.path())
        .args(["capture"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Capture cancelled."));

    photoindex_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No photos yet."));
    assert!(!temp.path().join("meta").join("photos.json").exists());
}

#[test]
fn test_capture_missing_file_reports_and_adds_nothing() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.jpeg");

    photoindex_cmd(temp.path())
        .args(["capture", missing.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could not capture photo"));

    assert_eq!(blob_count(temp.path()), 0);
}

#[test]
fn test_delete_without_terminal_is_cancelled() {
    let temp = TempDir::new().unwrap();
    let image = write_image(temp.path(), "a.jpeg", b"keep me");
    photoindex_cmd(temp.path()).args(["capture", image.as_str()]).assert().success();

    photoindex_cmd(temp.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));

    assert_eq!(blob_count(temp.path()), 1);
}

#[test]
fn test_delete_unknown_index_fails() {
    let temp = TempDir::new().unwrap();

    photoindex_cmd(temp.path())
        .args(["delete", "5", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Photo 5 not found"));
}

#[test]
fn test_doctor_sweeps_orphan_files() {
    let temp = TempDir::new().unwrap();
    let image = write_image(temp.path(), "a.jpeg", b"listed");
    photoindex_cmd(temp.path()).args(["capture", image.as_str()]).assert().success();

    photoindex_cmd(temp.path())
        .args(["doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No inconsistencies found."));

    fs::write(temp.path().join("photos").join("42.jpeg"), b"orphan").unwrap();

    photoindex_cmd(temp.path())
        .args(["doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 photo file(s)"));

    assert!(!temp.path().join("photos").join("42.jpeg").exists());
    assert_eq!(blob_count(temp.path()), 1);
}

#[test]
fn test_missing_blob_is_listed_as_unavailable() {
    let temp = TempDir::new().unwrap();
    let image = write_image(temp.path(), "a.jpeg", b"soon gone");
    photoindex_cmd(temp.path()).args(["capture", image.as_str()]).assert().success();

    for entry in fs::read_dir(temp.path().join("photos")).unwrap() {
        fs::remove_file(entry.unwrap().path()).unwrap();
    }

    photoindex_cmd(temp.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(unavailable)"));

    photoindex_cmd(temp.path())
        .args(["doctor"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 catalog photo(s) have no file"));
}

#[test]
fn test_path_points_into_data_dir() {
    let temp = TempDir::new().unwrap();
    let image = write_image(temp.path(), "a.jpeg", b"bytes");
    photoindex_cmd(temp.path()).args(["capture", image.as_str()]).assert().success();

    let out = photoindex_cmd(temp.path())
        .args(["path", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let path = String::from_utf8(out).unwrap();
    assert!(Path::new(path.trim()).exists());
}

#[test]
fn test_data_flag_overrides_env() {
    let temp = TempDir::new().unwrap();
    let env_dir = temp.path().join("env");
    let flag_dir = temp.path().join("flag");
    let image = write_image(temp.path(), "a.jpeg", b"bytes");

    photoindex_cmd(&env_dir)
        .args(["capture", image.as_str(), "--data", flag_dir.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(blob_count(&flag_dir), 1);
    assert_eq!(blob_count(&env_dir), 0);
}
