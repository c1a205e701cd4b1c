use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("booty").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn shares_with_remainder() {
    cmd()
        .write_stdin("2\n10\n")
        .assert()
        .success()
        .stdout(
            "How many crew? How many pieces of eight? \
             Each crew member gets 3 piece(s) of eight.\n\
             The captain gets 6 piece(s) of eight.\n\
             Remainder: 1 piece(s) of eight left over.\n",
        )
        .stderr("");
}

#[test]
fn exact_split_has_no_remainder_line() {
    cmd()
        .write_stdin("1\n1000000\n")
        .assert()
        .success()
        .stdout(contains("Each crew member gets 500000 piece(s) of eight."))
        .stdout(contains("The captain gets 1000000 piece(s) of eight."))
        .stdout(contains("Remainder").not());
}

#[test]
fn rejects_words() {
    cmd()
        .write_stdin("abc\n10\n")
        .assert()
        .code(1)
        .stdout("How many crew? ")
        .stderr(contains("\"abc\"").and(contains("whole number")));
}

#[test]
fn rejects_empty_hold() {
    cmd()
        .write_stdin("3\n0\n")
        .assert()
        .code(1)
        .stdout("How many crew? How many pieces of eight? ")
        .stderr(contains("\"0\"").and(contains("1 or greater")));
}

#[test]
fn rejects_blank_line() {
    cmd()
        .write_stdin("\n")
        .assert()
        .code(1)
        .stdout("How many crew? ")
        .stderr(contains("no input provided"));
}

#[test]
fn rejects_bytes_that_are_not_text() {
    cmd()
        .write_stdin(&b"\xff\xfe\n10\n"[..])
        .assert()
        .code(1)
        .stdout("How many crew? ")
        .stderr(contains("whole number"))
        .stderr(contains("no input available").not());
}

#[test]
fn closed_stdin_fails() {
    cmd()
        .write_stdin("")
        .assert()
        .code(1)
        .stdout("How many crew? ")
        .stderr(contains("no input available"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    cmd()
        .arg("-vv")
        .write_stdin("2\n10\n")
        .assert()
        .success()
        .stdout(contains("Remainder: 1 piece(s) of eight left over."))
        .stdout(contains("DEBUG").not())
        .stderr(contains("shared out"));
}
