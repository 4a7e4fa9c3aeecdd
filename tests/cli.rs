//! End-to-end tests against the real binary with scripted stdin.

use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    Command::cargo_bin("libris").unwrap()
}

#[test]
fn exits_on_zero() {
    cmd()
        .write_stdin("0\n")
        .assert()
        .success()
        .stdout(contains("------ Library System ------"))
        .stdout(contains("Choose an option: "));
}

#[test]
fn exits_on_end_of_input() {
    cmd().write_stdin("").assert().success();
}

#[test]
fn add_and_list_session() {
    cmd()
        .write_stdin("1\nDune\nFrank Herbert\nSci-Fi\n2\n0\n")
        .assert()
        .success()
        .stdout(contains("Book added."))
        .stdout(contains("Id: 1, Title: Dune, Author: Frank Herbert"));
}

#[test]
fn empty_library_message() {
    cmd()
        .write_stdin("2\n0\n")
        .assert()
        .success()
        .stdout(contains("The library is empty."));
}

#[test]
fn invalid_option_keeps_looping() {
    cmd()
        .write_stdin("x\n0\n")
        .assert()
        .success()
        .stdout(contains("Invalid option."));
}

#[test]
fn remove_unknown_id() {
    cmd()
        .write_stdin("5\n7\n0\n")
        .assert()
        .success()
        .stdout(contains("Book not found."));
}

#[test]
fn malformed_remove_id_does_not_crash() {
    cmd()
        .write_stdin("5\nnot-a-number\n0\n")
        .assert()
        .success()
        .stdout(contains("Invalid book ID: 'not-a-number'"));
}
