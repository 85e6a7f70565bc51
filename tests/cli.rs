use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn parse_missing_file_fails_before_password_prompt() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("billfold")
        .unwrap()
        .current_dir(dir.path())
        .args(["parse", "no_such_statement.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn parse_rejects_year_without_month() {
    Command::cargo_bin("billfold")
        .unwrap()
        .args(["parse", "--year", "2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--year and --month must be given together"));
}

#[test]
fn rules_list_shows_builtin_table() {
    Command::cargo_bin("billfold")
        .unwrap()
        .args(["rules", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("交通"))
        .stdout(predicate::str::contains("永豐信用卡卡費"));
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("billfold")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parse"))
        .stdout(predicate::str::contains("rules"));
}
