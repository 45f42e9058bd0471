//! Binary integration tests.
//!
//! These tests spawn the actual `rollbook` process, feed the menu through
//! stdin and inspect stdout plus the data file it leaves behind.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Run `rollbook` in `dir` with the given stdin and optional `--data-file`.
fn run_rollbook(dir: &Path, data_file: Option<&Path>, input: &str) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_rollbook"));
    command
        .current_dir(dir)
        .env_remove("ROLLBOOK_DATA_FILE")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(path) = data_file {
        command.arg("--data-file").arg(path);
    }

    let mut child = command.spawn().expect("Failed to spawn rollbook");
    child
        .stdin
        .take()
        .expect("Failed to get stdin")
        .write_all(input.as_bytes())
        .expect("Failed to write input");

    child.wait_with_output().expect("Failed to wait for rollbook")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("Stdout should be UTF-8")
}

mod process {
    use super::*;

    #[test]
    fn exits_cleanly_and_saves_to_default_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let output = run_rollbook(dir.path(), None, "1\n4\nDev\n0\n");

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.starts_with("======================================\n"));
        assert!(stdout.contains("Smart Attendance & Performance Tracker"));
        assert!(stdout.contains("Goodbye!"));

        let saved = std::fs::read_to_string(dir.path().join("attendance_data.txt"))
            .expect("Default data file should exist");
        assert_eq!(saved, "4 Dev 0 0 0\n");
    }

    #[test]
    fn honours_data_file_flag() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_file = dir.path().join("class-b.txt");
        std::fs::write(&data_file, "8 Eve 3 3 88\n").expect("Failed to seed data file");

        let output = run_rollbook(dir.path(), Some(&data_file), "4\n0\n");

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("Loaded 1 student(s) from file."));
        assert!(stdout.contains("8       Eve"));
        assert!(!dir.path().join("attendance_data.txt").exists());
    }

    #[test]
    fn keeps_logs_off_stdout() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let output = run_rollbook(dir.path(), None, "7\n");

        assert!(output.status.success());
        let stdout = stdout_of(&output);
        assert!(stdout.contains("Invalid choice! Please enter 0-5."));
        assert!(!stdout.contains("WARN"));
        assert!(!stdout.contains("INFO"));
    }
}
