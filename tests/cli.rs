use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::io::Write;
use tempfile::NamedTempFile;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("pwcheck").unwrap();
    cmd.env_remove("PWCHECK_PROTECT_PARAM_ONE")
        .env_remove("PWCHECK_MAX_LENGTH")
        .env_remove("RUST_LOG");
    cmd
}

fn password_file(passwords: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    for pwd in passwords {
        writeln!(file, "{}", pwd).expect("write password");
    }
    file
}

#[test]
fn prints_failing_passwords_in_order() {
    cmd()
        .args(["1", "1"])
        .write_stdin("Abc123\nabc123\nPassword\nALLCAPS\n")
        .assert()
        .success()
        .stdout("abc123\nALLCAPS\n");
}

#[test]
fn passing_flag_prints_accepted_passwords() {
    cmd()
        .args(["--passing", "-l", "1"])
        .write_stdin("Abc123\nabc123\n")
        .assert()
        .success()
        .stdout("Abc123\n");
}

#[test]
fn level_two_threshold() {
    cmd()
        .args(["-l", "2", "-p", "3"])
        .write_stdin("abc\nabcD3\nabcD3!\n")
        .assert()
        .success()
        .stdout("abc\n");
}

#[test]
fn level_three_runs() {
    cmd()
        .args(["-l", "3", "-p", "3"])
        .write_stdin("Aaaab1\nAabb1\n")
        .assert()
        .success()
        .stdout("Aaaab1\n");
}

#[test]
fn level_three_param_one_protection() {
    cmd()
        .args(["3", "1"])
        .write_stdin("Ab\n")
        .assert()
        .success()
        .stdout("Ab\n");

    cmd()
        .env("PWCHECK_PROTECT_PARAM_ONE", "1")
        .args(["3", "1"])
        .write_stdin("Ab\n")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn level_four_repeated_substring() {
    let file = password_file(&["AbAb", "Abcd"]);
    cmd()
        .args(["4", "2"])
        .pipe_stdin(file.path())
        .unwrap()
        .assert()
        .success()
        .stdout("AbAb\n");
}

#[test]
fn stats_report() {
    let file = password_file(&["abc", "abcD3"]);
    cmd()
        .args(["-l", "2", "-p", "3", "--stats"])
        .pipe_stdin(file.path())
        .unwrap()
        .assert()
        .success()
        .stdout(
            "abc\nStatistics:\nDistinct characters: 5\nMinimum length: 3\nAverage length: 4.0\n",
        );
}

#[test]
fn blank_line_is_a_password() {
    cmd()
        .arg("--stats")
        .write_stdin("\nGood\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\nStatistics:\n"))
        .stdout(contains("Minimum length: 0"))
        .stdout(contains("Average length: 2.0"));
}

#[test]
fn invalid_level_fails_before_reading() {
    cmd()
        .args(["-l", "5", "--stats"])
        .write_stdin("abc\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(contains("level out of range"));
}

#[test]
fn invalid_param_fails() {
    cmd()
        .args(["-l", "2", "-p", "0"])
        .write_stdin("abc\n")
        .assert()
        .code(2)
        .stderr(contains("param too small"));
}

#[test]
fn unknown_argument_fails() {
    cmd()
        .args(["1", "--frobnicate"])
        .write_stdin("abc\n")
        .assert()
        .code(2)
        .stdout("")
        .stderr(contains("argument 2: \"--frobnicate\""));
}

#[test]
fn too_many_numbers_fails() {
    cmd()
        .args(["1", "2", "3"])
        .write_stdin("")
        .assert()
        .code(2);
}

#[test]
fn too_long_password_aborts_run() {
    let long = "A".repeat(101);
    cmd()
        .arg("--stats")
        .write_stdin(format!("abc\n{long}\nxyz\n"))
        .assert()
        .code(2)
        .stdout("abc\n")
        .stderr(contains("is too long"))
        .stderr(contains(long.as_str()));
}

#[test]
fn max_length_from_environment() {
    cmd()
        .env("PWCHECK_MAX_LENGTH", "3")
        .write_stdin("Abcd\n")
        .assert()
        .code(2)
        .stderr(contains("limit 3"));

    cmd()
        .env("PWCHECK_MAX_LENGTH", "lots")
        .write_stdin("Abcd\n")
        .assert()
        .code(2)
        .stderr(contains("PWCHECK_MAX_LENGTH"));
}
