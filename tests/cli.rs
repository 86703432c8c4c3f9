//! Tests for the `brew-grep` binary: exit codes, query modes and output.
//!
//! Every run starts from an empty environment so the host's `PATH` and
//! `BREW_GREP_COMMAND` cannot leak in. Tests that need a real search tool
//! put the system grep's directory on `PATH` and are skipped without it.

use brew_grep::{find_executable, SystemEnv};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

fn brew_grep() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_brew-grep"));
    command.env_clear().stdin(Stdio::null());
    command
}

fn run(command: &mut Command) -> Output {
    command.output().unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Directory holding the system grep, if there is one.
fn grep_dir() -> Option<PathBuf> {
    let grep = find_executable("grep", &SystemEnv)?;
    grep.parent().map(Path::to_path_buf)
}

/// A tap with a single matching formula.
#[cfg(unix)]
fn make_tap(text: &str) -> tempfile::TempDir {
    let tap = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tap.path().join("Formula")).unwrap();
    std::fs::write(tap.path().join("Formula/foo.rb"), text).unwrap();
    tap
}

#[test]
fn test_no_arguments_prints_usage() {
    let output = run(&mut brew_grep());

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage:"), "{}", stderr(&output));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_list_commands() {
    let output = run(brew_grep().arg("--list-commands"));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "rg\nack\ngrep\n");
}

#[test]
fn test_override_not_installed_exits_1() {
    let output = run(brew_grep()
        .env("PATH", "/nonexistent/bin")
        .env("BREW_GREP_COMMAND", "ack")
        .arg("needle"));

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    assert!(message.contains("ack"), "{message}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_which_with_nothing_installed_exits_1() {
    let output = run(brew_grep().env("PATH", "/nonexistent/bin").arg("--which"));

    assert_eq!(output.status.code(), Some(1));
    let message = stderr(&output);
    for name in ["rg", "ack", "grep"] {
        assert!(message.contains(name), "{message} should list {name}");
    }
}

#[test]
fn test_unknown_command_exits_1() {
    let output = run(brew_grep().args(["--command", "ag", "--which"]));

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("ag"));
}

#[test]
fn test_which_prints_selected_command() {
    let Some(dir) = grep_dir() else {
        return;
    };
    let output = run(brew_grep()
        .env("PATH", &dir)
        .env("BREW_GREP_COMMAND", "grep")
        .arg("--which"));

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "grep\n");
}

/// Search the given taps with the system grep.
#[cfg(unix)]
fn search_with_grep(dir: &Path, taps: &[&Path], args: &[&str]) -> Output {
    let mut command = brew_grep();
    command.env("PATH", dir).env("BREW_GREP_COMMAND", "grep");
    for tap in taps {
        command.arg("--tap-dir").arg(tap);
    }
    run(command.args(args))
}

#[cfg(unix)]
#[test]
fn test_tap_blocks_separated_by_blank_line() {
    let Some(dir) = grep_dir() else {
        return;
    };
    let one = make_tap("needle one\n");
    let two = make_tap("needle two\n");
    let taps = [one.path(), two.path()];

    let output = search_with_grep(&dir, &taps, &["needle"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let text = stdout(&output);
    assert_eq!(text.matches("\n\n").count(), 2, "{text:?}");
    assert!(text.ends_with("\n\n"));

    let output = search_with_grep(&dir, &taps, &["-l", "needle"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 2, "{text:?}");
    assert!(!text.contains("\n\n"));
}

#[cfg(unix)]
#[test]
fn test_closed_stdout_exits_0() {
    let Some(dir) = grep_dir() else {
        return;
    };
    let tap = make_tap(&"needle\n".repeat(10_000));

    let mut child = brew_grep()
        .env("PATH", &dir)
        .env("BREW_GREP_COMMAND", "grep")
        .arg("--tap-dir")
        .arg(tap.path())
        .arg("needle")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    assert_eq!(child.wait().unwrap().code(), Some(0));
}
