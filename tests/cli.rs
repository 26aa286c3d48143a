//! End-to-end tests for the ctrace command-line surface

use assert_cmd::Command;
use predicates::prelude::*;

fn ctrace() -> Command {
    Command::cargo_bin("ctrace").expect("ctrace binary should be built")
}

#[test]
fn input_only_exits_zero() {
    ctrace().arg("foo.c").assert().success();
}

#[test]
fn short_output_flag_exits_zero() {
    ctrace().args(["foo.c", "-o", "out.c"]).assert().success();
}

#[test]
fn long_output_flag_exits_zero() {
    ctrace()
        .args(["foo.c", "--output", "out.c"])
        .assert()
        .success();
}

#[test]
fn input_file_does_not_need_to_exist() {
    ctrace().arg("definitely/not/present.c").assert().success();
}

#[test]
fn missing_input_fails_with_usage_on_stderr() {
    ctrace()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("input_file"));
}

#[test]
fn output_flag_without_value_fails() {
    ctrace().args(["foo.c", "-o"]).assert().failure().code(2);
}

#[test]
fn unknown_flag_fails() {
    ctrace()
        .args(["foo.c", "--frobnicate"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn help_prints_description_and_exits_zero() {
    ctrace()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Instrument C code for tracing."));
}

#[test]
fn short_help_exits_zero() {
    ctrace()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("Instrument C code for tracing."));
}
