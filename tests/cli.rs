//! Runs the `check` command of the binary.

use std::process::{Command, Output};

use pretty_assertions::assert_eq;

mod common;

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_visit-rules"))
        .args(args)
        .env("RUST_APP_LOG", "off")
        .output()
        .expect("should be able to run the binary")
}

#[test]
fn test_sunday_visit_is_rejected() {
    let file = common::write_temp_file(
        ".toml",
        concat!(
            "[[visits]]\n",
            "id = 4\n",
            "date = \"2024-01-07\"\n",
            "description = \"checkup\"\n",
        ),
    );
    let path = file.path().to_str().unwrap();

    let output = run(&["check", "--visits", path, "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let stdout: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(
        stdout,
        serde_json::json!([{
            "index": 0,
            "id": 4,
            "errors": [{
                "field": "date",
                "code": "sunday.not.allowed",
                "message": "Visits on Sundays are not allowed",
            }],
        }])
    );

    let output = run(&["check", "--visits", path]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stdout).contains("sunday.not.allowed"));
}

#[test]
fn test_monday_visit_is_accepted() {
    let file = common::write_temp_file(
        ".json",
        r#"{ "visits": [{ "date": "2024-01-08", "description": "checkup" }] }"#,
    );
    let path = file.path().to_str().unwrap();

    let output = run(&["check", "--visits", path, "--json"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be json");
    assert_eq!(stdout, serde_json::json!([]));
}

#[test]
fn test_unsupported_file_fails() {
    let file = common::write_temp_file(".yaml", "visits: []\n");
    let path = file.path().to_str().unwrap();

    assert_eq!(run(&["check", "--visits", path]).status.code(), Some(1));
}

#[test]
fn test_missing_visits_flag_fails() {
    assert_eq!(run(&["check"]).status.code(), Some(1));
}
