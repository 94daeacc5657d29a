//! Basic CLI E2E tests.
//!
//! Tests invoke the compiled binary directly with an isolated HOME so the
//! config file never touches the real user directory.

use std::path::Path;
use std::process::Command;

fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_focustask"))
        .args(args)
        .env("HOME", home)
        .env("FOCUSTASK_ENV", "dev")
        .output()
        .expect("failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn config_show_prints_defaults() {
    let home = tempfile::tempdir().unwrap();
    let (stdout, _, code) = run_cli(home.path(), &["config", "show"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["work_duration_secs"], 1500);
    assert_eq!(parsed["long_break_interval"], 4);
}

#[test]
fn config_set_persists_and_rejects_zero() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["config", "set", "--work", "600"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(home.path(), &["config", "show"]);
    assert_eq!(code, 0);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["work_duration_secs"], 600);

    let (_, stderr, code) = run_cli(home.path(), &["config", "set", "--interval", "0"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("long_break_interval"));
}

#[test]
fn turbo_run_completes_a_single_pomodoro() {
    let home = tempfile::tempdir().unwrap();
    // Shrink durations so the turbo loop finishes quickly.
    let (_, _, code) = run_cli(
        home.path(),
        &[
            "config", "set", "--work", "3", "--short-break", "2", "--long-break", "2",
        ],
    );
    assert_eq!(code, 0);

    let (stdout, stderr, code) = run_cli(
        home.path(),
        &["run", "write tests", "--pomodoros", "1", "--turbo"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("\"type\": \"session_started\""));
    assert!(stdout.contains("\"type\": \"session_completed\""));
    assert!(stderr.contains("[cue] ticking starts"));
    assert!(stderr.contains("[cue] ticking stops"));
}

#[test]
fn turbo_run_binds_subtask_when_given() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(
        home.path(),
        &[
            "config", "set", "--work", "2", "--short-break", "1", "--long-break", "1",
        ],
    );
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(
        home.path(),
        &[
            "run",
            "parent task",
            "--subtask",
            "first slice",
            "--turbo",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("\"kind\": \"subtask\""));
}
