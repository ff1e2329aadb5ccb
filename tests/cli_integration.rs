//! Integration tests for the command line surface.

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Command with an isolated config file and no location in the environment.
fn fishfind(config_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("fishfind"));
    cmd.env("FISHFIND_CONFIG", config_dir.join("config.toml"))
        .env_remove("FISHFIND_LATITUDE")
        .env_remove("FISHFIND_LONGITUDE")
        .env_remove("FISHFIND_DATABASE_URL")
        .env_remove("FISHFIND_MODEL")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_species_lists_all_nine_labels() {
    let dir = TempDir::new().unwrap();
    let mut assert = fishfind(dir.path()).arg("species").assert().success();
    for label in [
        "Black Sea Sprat",
        "Gilt-Head Bream",
        "Horse Mackerel",
        "Red Mullet",
        "Red Sea Bream",
        "Sea Bass",
        "Shrimp",
        "Striped Red Mullet",
        "Trout",
    ] {
        assert = assert.stdout(predicate::str::contains(label));
    }
    assert.stdout(predicate::str::contains("Hourse").not());
}

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    fishfind(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("upload"))
        .stdout(predicate::str::contains("find"))
        .stdout(predicate::str::contains("gallery"));
}

#[test]
fn test_no_command_prints_first_time_help() {
    let dir = TempDir::new().unwrap();
    fishfind(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("fishfind config init"));
}

#[test]
fn test_config_path_honours_env() {
    let dir = TempDir::new().unwrap();
    fishfind(dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains(
            dir.path().to_string_lossy().as_ref(),
        ));
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    fishfind(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(dir.path().join("config.toml").exists());

    fishfind(dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    fishfind(dir.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fishdetection"));
}

#[test]
fn test_invalid_config_is_a_one_line_error() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[defaults]\nlatitude = 123.0\n").unwrap();
    fishfind(dir.path())
        .arg("species")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error: invalid latitude"));
}

#[test]
fn test_upload_without_image_asks_for_one() {
    let dir = TempDir::new().unwrap();
    fishfind(dir.path())
        .args(["upload", "missing.jpg", "--lat", "41.0", "--lon", "29.0"])
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("please upload an image"));
}

#[test]
fn test_upload_rejects_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let notes = dir.path().join("notes.txt");
    std::fs::write(&notes, "not a fish").unwrap();
    fishfind(dir.path())
        .arg("upload")
        .arg(&notes)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported image format"));
}

#[test]
fn test_unknown_species_is_rejected() {
    let dir = TempDir::new().unwrap();
    fishfind(dir.path())
        .args(["find", "Goldfish", "--lat", "1", "--lon", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown species"));
}

#[test]
fn test_gallery_writes_html() {
    let dir = TempDir::new().unwrap();
    let images = dir.path().join("images");
    std::fs::create_dir(&images).unwrap();
    for name in ["b.png", "a.jpg", "readme.md"] {
        std::fs::write(images.join(name), b"").unwrap();
    }
    let output = dir.path().join("out/gallery.html");

    fishfind(dir.path())
        .arg("gallery")
        .arg(&images)
        .arg("--columns")
        .arg("2")
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("written to"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("<figure>").count(), 2);
    assert!(html.find("a.jpg").unwrap() < html.find("b.png").unwrap());
    assert!(!html.contains("readme.md"));
}

#[test]
fn test_gallery_links_resolve_from_nested_output() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("images")).unwrap();
    std::fs::write(dir.path().join("images/a.jpg"), b"").unwrap();

    fishfind(dir.path())
        .current_dir(dir.path())
        .args(["gallery", "images", "-o", "site/gallery.html"])
        .assert()
        .success();

    let html = std::fs::read_to_string(dir.path().join("site/gallery.html")).unwrap();
    let image = std::fs::canonicalize(dir.path().join("images/a.jpg")).unwrap();
    assert!(html.contains(&format!("src=\"file://{}\"", image.display())));
    assert!(!html.contains("src=\"images/"));
}

#[test]
fn test_gallery_missing_folder_fails() {
    let dir = TempDir::new().unwrap();
    fishfind(dir.path())
        .arg("gallery")
        .arg(dir.path().join("nope"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read image folder"));
}
