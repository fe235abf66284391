//! Playback error scenarios driven through the binary
//!
//! These paths fail before the audio output device is touched, so they
//! run without hardware.

use assert_cmd::Command;
use predicates::prelude::*;

fn voice_comments_bin() -> Command {
    Command::cargo_bin("voice-comments").expect("binary builds")
}

fn annotated_project(line: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("main.rs");
    std::fs::write(&file, format!("{}\n", line)).unwrap();
    (dir, file)
}

#[test]
fn play_without_marker_reports_no_marker() {
    let (dir, file) = annotated_project("fn main() {}");

    voice_comments_bin()
        .args([
            "play",
            file.to_str().unwrap(),
            "--line",
            "1",
            "--project-root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No voice note marker"));
}

#[test]
fn play_with_colon_in_comment_still_reports_no_marker() {
    // The naive first-colon parse would have extracted "//example.com"
    let (dir, file) = annotated_project("// see https://example.com");

    voice_comments_bin()
        .args([
            "play",
            file.to_str().unwrap(),
            "--line",
            "1",
            "--project-root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No voice note marker"));
}

#[test]
fn play_with_malformed_marker_reports_malformed() {
    let (dir, file) = annotated_project("// [Voice Note: ]");

    voice_comments_bin()
        .args([
            "play",
            file.to_str().unwrap(),
            "--line",
            "1",
            "--project-root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Malformed voice note marker"));
}

#[test]
fn play_with_missing_note_reports_not_found() {
    let (dir, file) =
        annotated_project("// [Voice Note: voicecomments/voice_note_1700000000000.wav]");

    voice_comments_bin()
        .args([
            "play",
            file.to_str().unwrap(),
            "--line",
            "1",
            "--project-root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn play_with_cursor_past_end_reports_out_of_range() {
    let (dir, file) = annotated_project("fn main() {}");

    voice_comments_bin()
        .args([
            "play",
            file.to_str().unwrap(),
            "--line",
            "99",
            "--project-root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn play_with_missing_document_reports_context_unavailable() {
    let dir = tempfile::tempdir().unwrap();

    voice_comments_bin()
        .args([
            "play",
            dir.path().join("ghost.rs").to_str().unwrap(),
            "--line",
            "1",
            "--project-root",
            dir.path().to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no such document"));
}
