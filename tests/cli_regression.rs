// Regression tests for the tristate binary.

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

fn tristate() -> Command {
    let mut cmd = Command::cargo_bin("tristate").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_classifies_text_tokens() {
    tristate()
        .args(["y", "Yes", "no", "xyz"])
        .assert()
        .success()
        .stdout("y\ttrue\nYes\ttrue\nno\tfalse\nxyz\tunknown\n");
}

#[test]
fn cli_emits_json_rows() {
    tristate()
        .args(["--format", "json", "N", "maybe"])
        .assert()
        .success()
        .stdout(contains("\"result\": \"false\"").and(contains("\"result\": \"unknown\"")));
}

#[test]
fn cli_reports_miette_diagnostics_on_non_text() {
    tristate()
        .args(["--json", "yes", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("must be of type string").and(contains("help")));
}

#[test]
fn cli_reports_large_json_numbers_without_saturation() {
    tristate()
        .args(["--json", "12345678901234567890"])
        .assert()
        .failure()
        .stderr(contains("12345678901234567").and(contains("9223372036854775807").not()));
}

#[test]
fn cli_reports_json_objects_in_key_order() {
    tristate()
        .args(["--json", r#"{"c": 3, "a": 1, "b": 2}"#])
        .assert()
        .failure()
        .stderr(contains("{a: 1, b: 2, c: 3} must be of type string"));
}

#[test]
fn cli_json_mode_accepts_quoted_and_bare_strings() {
    tristate()
        .args(["--json", "\"YES\"", "no"])
        .assert()
        .success()
        .stdout("YES\ttrue\nno\tfalse\n");
}

#[test]
fn cli_requires_a_token() {
    tristate().assert().failure().stderr(contains("Usage"));
}
