//! Integration tests for the `lights` binary.
//!
//! These tests exercise the full CLI: argument parsing, config loading,
//! reading the instruction file and printing the count.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Get a command for running lights, isolated from any user config.
fn lights() -> Command {
    let mut cmd = Command::cargo_bin("lights").unwrap();
    cmd.env_remove("LIGHTS_CONFIG")
        .env_remove("XDG_CONFIG_HOME")
        .env("HOME", "/nonexistent-lights-home");
    cmd
}

/// Write `lines` to an instruction file inside `dir`.
fn instructions(dir: &TempDir, lines: &[&str]) -> assert_fs::fixture::ChildPath {
    let file = dir.child("instructions.txt");
    let contents: String = lines.iter().map(|line| format!("{}\n", line)).collect();
    file.write_str(&contents).unwrap();
    file
}

fn assert_count(lines: &[&str], expected: &str) {
    let dir = TempDir::new().unwrap();
    let file = instructions(&dir, lines);
    lights()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", expected)))
        .stderr("");
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[test]
fn all_on() {
    assert_count(&["turn on 0,0 through 999,999"], "1000000");
}

#[test]
fn all_on_then_toggle_column() {
    assert_count(
        &["turn on 0,0 through 999,999", "toggle 0,0 through 999,0"],
        "999000",
    );
}

#[test]
fn block_with_hole() {
    assert_count(
        &["turn on 0,0 through 9,9", "turn off 4,4 through 5,5"],
        "96",
    );
}

#[test]
fn single_toggle() {
    assert_count(&["toggle 0,0 through 0,0"], "1");
}

#[test]
fn empty_file_prints_zero() {
    assert_count(&[], "0");
}

#[test]
fn nonsense_fails_without_count() {
    let dir = TempDir::new().unwrap();
    let file = instructions(&dir, &["nonsense command"]);
    lights()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("unrecognized command: 'nonsense command'"))
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn bad_line_after_good_ones_fails() {
    let dir = TempDir::new().unwrap();
    let file = instructions(
        &dir,
        &["turn on 0,0 through 9,9", "turn sideways 0,0 through 1,1"],
    );
    lights()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn out_of_range_fails() {
    let dir = TempDir::new().unwrap();
    let file = instructions(&dir, &["turn on 0,0 through 1000,0"]);
    lights()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("out-of-range rectangle"));
}

#[test]
fn inverted_rectangle_fails() {
    let dir = TempDir::new().unwrap();
    let file = instructions(&dir, &["toggle 5,5 through 4,4"]);
    lights()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("out-of-range rectangle"));
}

#[test]
fn blank_line_fails() {
    let dir = TempDir::new().unwrap();
    let file = instructions(&dir, &["turn on 0,0 through 9,9", "", "toggle 0,0 through 0,0"]);
    lights()
        .arg(file.path())
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("line 2: unrecognized command"));
}

#[test]
fn crlf_input_accepted() {
    let dir = TempDir::new().unwrap();
    let file = dir.child("instructions.txt");
    file.write_str("turn on 0,0 through 9,9\r\nturn off 4,4 through 5,5\r\n")
        .unwrap();
    lights().arg(file.path()).assert().success().stdout("96\n");
}

#[test]
fn missing_file_fails() {
    lights()
        .arg("/nonexistent/instructions.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"));
}

// =============================================================================
// Flags and configuration
// =============================================================================

#[test]
fn reads_stdin() {
    lights()
        .arg("-")
        .write_stdin("turn on 0,0 through 1,1\ntoggle 0,0 through 0,0\n")
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn size_flag() {
    let dir = TempDir::new().unwrap();
    let file = instructions(&dir, &["turn on 0,0 through 9,9"]);
    lights()
        .args(["--size", "10"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("100\n");

    let file = instructions(&dir, &["turn on 0,0 through 10,10"]);
    lights()
        .args(["--size", "10"])
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let file = instructions(&dir, &["turn on 0,0 through 2,2", "toggle 1,1 through 1,1"]);
    lights()
        .arg("--json")
        .arg(file.path())
        .assert()
        .success()
        .stdout("{\"size\":1000,\"commands\":2,\"lit\":8}\n");
}

#[test]
fn debug_traces_to_stderr() {
    let dir = TempDir::new().unwrap();
    let file = instructions(&dir, &["turn on 0,0 through 2,2"]);
    lights()
        .arg("--debug")
        .arg(file.path())
        .assert()
        .success()
        .stdout("9\n")
        .stderr(predicate::str::contains("[debug] line 1: turn on 0,0 through 2,2"));
}

#[test]
fn config_file_sets_size() {
    let dir = TempDir::new().unwrap();
    let config = dir.child("config.toml");
    config.write_str("[grid]\nsize = 5\n").unwrap();
    let file = instructions(&dir, &["turn on 0,0 through 4,4"]);

    lights()
        .env("LIGHTS_CONFIG", config.path())
        .arg(file.path())
        .assert()
        .success()
        .stdout("25\n");

    let file = instructions(&dir, &["turn on 0,0 through 5,5"]);
    lights()
        .env("LIGHTS_CONFIG", config.path())
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside a 5x5 grid"));

    // --no-config falls back to the default size
    lights()
        .env("LIGHTS_CONFIG", config.path())
        .arg("--no-config")
        .arg(file.path())
        .assert()
        .success()
        .stdout("36\n");
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = dir.child("config.toml");
    config.write_str("[grid]\nsize = 0\n").unwrap();
    let file = instructions(&dir, &["turn on 0,0 through 1,1"]);

    lights()
        .env("LIGHTS_CONFIG", config.path())
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn missing_config_warns() {
    let dir = TempDir::new().unwrap();
    let file = instructions(&dir, &["turn on 0,0 through 1,1"]);

    lights()
        .env("LIGHTS_CONFIG", dir.path().join("absent.toml"))
        .arg(file.path())
        .assert()
        .success()
        .stdout("4\n")
        .stderr(predicate::str::contains("warning:"));

    lights()
        .env("LIGHTS_CONFIG", dir.path().join("absent.toml"))
        .arg("--quiet")
        .arg(file.path())
        .assert()
        .success()
        .stdout("4\n")
        .stderr("");
}

#[test]
fn help_flag_works() {
    lights()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("turn on 0,0 through 999,999"));
}

#[test]
fn version_flag_works() {
    lights()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lights"));
}
