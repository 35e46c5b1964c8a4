use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("cheatsheet")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("entries"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("open"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_show_help_shows_options() {
    cargo_bin_cmd!("cheatsheet")
        .args(["show", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--width"));
}

#[test]
fn test_global_flags_in_help() {
    cargo_bin_cmd!("cheatsheet")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("--no-color"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("cheatsheet")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}
