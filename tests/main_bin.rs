use std::io::Write;
use std::process::{Command, Stdio};

fn run_menu_with(args: &[&str], input: &str) -> std::process::Output {
    let dir = tempfile::tempdir().unwrap();
    let mut child = Command::new(env!("CARGO_BIN_EXE_seabattle"))
        .args(args)
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to run seabattle binary");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn exit_from_menu() {
    let output = run_menu_with(&[], "3\n");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("--- Battleship Menu ---"));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn unknown_flag_still_runs_menu() {
    let output = run_menu_with(&["--bogus"], "3\n");
    assert_eq!(output.status.code(), Some(0));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("--bogus"));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn malformed_flag_value_still_runs_menu() {
    let output = run_menu_with(&["--seed", "abc"], "2\n3\n");
    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("No history found."));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn closed_stdin_exits_cleanly() {
    let output = run_menu_with(&[], "");
    assert_eq!(output.status.code(), Some(0));
}
