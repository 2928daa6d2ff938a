//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

fn studyhub() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("studyhub").unwrap()
}

#[test]
fn help_lists_subcommands() {
    studyhub()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("courses"))
        .stdout(predicate::str::contains("featured"))
        .stdout(predicate::str::contains("quizzes"))
        .stdout(predicate::str::contains("decks"));
}

#[test]
fn courses_help_lists_filter_flags() {
    studyhub()
        .arg("courses")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--language"))
        .stdout(predicate::str::contains("--difficulty"))
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("--course-type"))
        .stdout(predicate::str::contains("--sort"));
}

#[test]
fn course_requires_an_id() {
    studyhub()
        .arg("course")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn unknown_sort_key_is_rejected() {
    studyhub()
        .arg("courses")
        .arg("--sort")
        .arg("alphabet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown sort key"));
}

#[test]
fn unknown_status_is_rejected() {
    studyhub()
        .arg("course")
        .arg("c1")
        .arg("--set-status")
        .arg("done")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown enrollment status"));
}

#[test]
fn missing_config_file_is_reported() {
    studyhub()
        .arg("quizzes")
        .arg("--config")
        .arg("/no/such/studyhub.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn version_flag_works() {
    studyhub()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("studyhub"));
}
