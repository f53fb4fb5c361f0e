//! End-to-end tests running the `tasbeeh` binary against a temporary database.
//!
//! Each test points `TASBEEH_DATABASE_PATH` at its own temp dir and drives
//! the binary through stdin/stdout the way a user would.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn tasbeeh_binary() -> String {
    env!("CARGO_BIN_EXE_tasbeeh").to_string()
}

fn tasbeeh(temp: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(tasbeeh_binary())
        .env("HOME", temp)
        .env("XDG_CONFIG_HOME", temp.join(".config"))
        .env("TASBEEH_DATABASE_PATH", temp.join("data/tasbeeh.db"))
        .env_remove("TASBEEH_UTC_OFFSET_MINUTES")
        .env_remove("RUST_LOG")
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn tasbeeh");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "tasbeeh failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_status_on_fresh_database() {
    let temp = TempDir::new().unwrap();
    let output = stdout_of(&tasbeeh(temp.path(), &["status"], ""));

    assert!(output.contains("Today: 0\n"), "{output}");
    assert!(output.contains("Default target: 33\n"), "{output}");
    assert!(temp.path().join("data/tasbeeh.db").exists());
}

#[test]
fn test_daily_total_persists_across_runs() {
    let temp = TempDir::new().unwrap();

    let first = stdout_of(&tasbeeh(temp.path(), &["count", "1", "2"], "\n\n\nq\n"));
    assert!(first.contains("Session ended. Taps this session: 3\n"), "{first}");

    let second = stdout_of(&tasbeeh(temp.path(), &["count", "5"], "\n\n"));
    assert!(second.ends_with("Today: 5\n"), "{second}");

    let status = stdout_of(&tasbeeh(temp.path(), &["status"], ""));
    assert!(status.contains("Today: 5\n"), "{status}");
}

#[test]
fn test_default_target_applies_to_new_sessions() {
    let temp = TempDir::new().unwrap();

    let set = stdout_of(&tasbeeh(temp.path(), &["target", "2"], ""));
    assert_eq!(set, "Default target set to 2 (custom)\n");

    let output = stdout_of(&tasbeeh(temp.path(), &["count", "4"], "\n\n"));
    assert!(output.starts_with("[1/1] لا إله إلا الله (0/2)\n"), "{output}");
    assert!(output.contains("Session complete: 2 taps."), "{output}");
}

#[test]
fn test_target_rejects_zero() {
    let temp = TempDir::new().unwrap();
    let output = tasbeeh(temp.path(), &["target", "0"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("target must be a positive integer"), "{stderr}");
}

#[test]
fn test_custom_azkar_can_be_counted() {
    let temp = TempDir::new().unwrap();

    let added = stdout_of(&tasbeeh(
        temp.path(),
        &["add", "--category", "evening", "--count", "2", "يا حي يا قيوم"],
        "",
    ));
    let id = added
        .strip_prefix("Added ")
        .and_then(|rest| rest.split_whitespace().next())
        .expect("added line should carry the id")
        .to_string();

    let listed = stdout_of(&tasbeeh(
        temp.path(),
        &["presets", "--category", "evening"],
        "",
    ));
    assert!(listed.contains(&id), "{listed}");
    assert!(listed.trim_end().ends_with("يا حي يا قيوم"), "{listed}");

    let output = stdout_of(&tasbeeh(
        temp.path(),
        &["count", "--category", "evening", &id],
        "\n\n",
    ));
    assert!(output.contains("Session complete: 2 taps."), "{output}");
}

#[test]
fn test_count_with_unknown_id_fails() {
    let temp = TempDir::new().unwrap();
    let output = tasbeeh(temp.path(), &["count", "does-not-exist"], "");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no dhikr matches ids"), "{stderr}");
}
