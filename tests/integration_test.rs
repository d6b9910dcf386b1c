//! Integration tests for bookbind.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use bookbind::{CHAPTERS, Concatenator, Manifest, OUTPUT_PATH};
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Writes every chapter of the book under `root`, content naming the chapter.
fn write_book(root: &Path) {
    std::fs::create_dir_all(root.join("src")).expect("Failed to create src dir");
    for chapter in CHAPTERS {
        std::fs::write(root.join(chapter), format!("# {chapter}"))
            .expect("Failed to write chapter");
    }
}

fn expected_book() -> String {
    CHAPTERS.iter().map(|c| format!("# {c}\n")).collect()
}

fn bookbind() -> Command {
    Command::cargo_bin("bookbind").expect("binary should build")
}

#[test]
fn test_binary_binds_book_in_working_directory() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_book(temp.path());

    bookbind()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("wrote 11 chapters"));

    let bound = std::fs::read_to_string(temp.path().join(OUTPUT_PATH)).expect("read output");
    assert_eq!(bound, expected_book());
}

#[test]
fn test_binary_root_flag() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_book(temp.path());

    bookbind()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success();

    assert!(temp.path().join("all.md").exists());
}

#[test]
fn test_binary_ignores_root_environment_variable() {
    let cwd = TempDir::new().expect("Failed to create temp dir");
    let elsewhere = TempDir::new().expect("Failed to create temp dir");
    write_book(cwd.path());
    write_book(elsewhere.path());

    bookbind()
        .current_dir(cwd.path())
        .env("BOOKBIND_ROOT", elsewhere.path())
        .assert()
        .success();

    assert!(cwd.path().join("all.md").exists());
    assert!(!elsewhere.path().join("all.md").exists());
}

#[test]
fn test_binary_report_names_clean_output_path() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_book(temp.path());
    let expected = format!("to {}\n", temp.path().join("all.md").display());

    bookbind()
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::ends_with(expected));
}

#[test]
fn test_binary_json_report() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_book(temp.path());

    let output = bookbind()
        .arg("-C")
        .arg(temp.path())
        .args(["--format", "json"])
        .output()
        .expect("run binary");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("report should be JSON");
    assert_eq!(value["inputs"], CHAPTERS.len());
    assert_eq!(value["bytes"], expected_book().len());
}

#[test]
fn test_binary_missing_chapter_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_book(temp.path());
    std::fs::remove_file(temp.path().join("src/ch03-00.md")).expect("remove chapter");

    bookbind()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"))
        .stderr(predicate::str::contains("ch03-00.md"));

    // Chapters before the missing one were already written.
    let partial = std::fs::read_to_string(temp.path().join("all.md")).expect("read output");
    assert!(partial.contains("# ./src/ch02-02-reading-runtime.md\n"));
    assert!(!partial.contains("ch04-00-conclusion"));
}

#[test]
fn test_binary_missing_chapter_json_error() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    bookbind()
        .arg("-C")
        .arg(temp.path())
        .args(["--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"kind\": \"file_not_found\""));
}

#[test]
fn test_binary_bad_root_fails() {
    let temp = TempDir::new().expect("Failed to create temp dir");

    bookbind()
        .arg("-C")
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("root is not a directory"));
}

#[test]
fn test_binary_rejects_positional_arguments() {
    bookbind().arg("chapter.md").assert().failure();
}

#[test]
fn test_rerun_truncates_previous_output() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    write_book(temp.path());
    std::fs::write(temp.path().join("all.md"), "left over from an older build")
        .expect("seed output");

    for _ in 0..2 {
        bookbind()
            .current_dir(temp.path())
            .assert()
            .success();
    }

    let bound = std::fs::read_to_string(temp.path().join("all.md")).expect("read output");
    assert_eq!(bound, expected_book());
}

#[test]
fn test_library_chapter_order_is_output_order() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let names = ["c.md", "a.md", "b.md"];
    for name in names {
        std::fs::write(temp.path().join(name), name.trim_end_matches(".md"))
            .expect("write input");
    }
    let manifest = Manifest::new(names, "all.md").rooted_at(temp.path());

    let report = Concatenator::new(manifest).run().expect("run");

    assert_eq!(report.inputs, 3);
    assert_eq!(report.bytes, 6);
    let bound = std::fs::read_to_string(temp.path().join("all.md")).expect("read output");
    assert_eq!(bound, "c\na\nb\n");
}
