//! Binary startup checks.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_api_key_exits_before_binding() {
    Command::cargo_bin("asfalt_server")
        .unwrap()
        .env_remove("OPENAI_API_KEY")
        .env("PORT", "0")
        .env("RUST_LOG", "info")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("OPENAI_API_KEY"))
        .stderr(predicate::str::contains("Server is running").not());
}

#[test]
fn blank_api_key_exits_before_binding() {
    Command::cargo_bin("asfalt_server")
        .unwrap()
        .env("OPENAI_API_KEY", "")
        .env("PORT", "0")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Server is running").not());
}

#[test]
fn help_lists_options() {
    Command::cargo_bin("asfalt_server")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--api-key"))
        .stdout(predicate::str::contains("--port"));
}
