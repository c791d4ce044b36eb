/*
 * cli_integration.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Integration tests for the field-template binary.
 */

use std::fs;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn field_template(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_field-template"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to run field-template")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

#[test]
fn render_prints_html() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let settings = temp.path().join("body.yml");
    fs::write(
        &settings,
        "fis: '1'\nfis-el: div\nfis-cl: fi-class-2\nfi: '1'\nfi-el: span\nfi-cl: fi-class\n",
    )
    .expect("Failed to write settings");

    let settings = settings.to_string_lossy().into_owned();
    let output = field_template(&[
        "render",
        "body",
        "--settings",
        &settings,
        "--content",
        "<p>Hello</p>",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        r#"<div class="fi-class-2"><span class="fi-class"><p>Hello</p></span></div>"#
    );
}

#[test]
fn render_without_content_prints_nothing() {
    let output = field_template(&["render", "body"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "");
}

#[test]
fn render_with_slot_defaults_and_label_prefix() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let settings = temp.path().join("body.yml");
    let defaults = temp.path().join("defaults.yml");
    fs::write(
        &settings,
        "label-format: inline\nlabel-colon: true\nouter:\n  enabled: true\n  default-class: true\n",
    )
    .expect("Failed to write settings");
    fs::write(&defaults, "outer:\n  class: field-outer\n").expect("Failed to write defaults");

    let settings = settings.to_string_lossy().into_owned();
    let defaults = defaults.to_string_lossy().into_owned();
    let output = field_template(&[
        "render",
        "body",
        "--name",
        "Body",
        "--settings",
        &settings,
        "--slot-defaults",
        &defaults,
        "--label-class-prefix",
        "field-",
        "--content",
        "Hi",
    ]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output).trim_end(),
        r#"<div class="field-outer"><div class="field-label-inline">Body:</div>Hi</div>"#
    );
}

#[test]
fn resolve_prints_json() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let settings = temp.path().join("body.yml");
    fs::write(&settings, "labelformat: inline\n").expect("Failed to write settings");

    let settings = settings.to_string_lossy().into_owned();
    let output = field_template(&["resolve", "--settings", &settings]);

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("resolve output should be JSON");
    assert_eq!(report["resolved"]["label_format"], "inline");
    assert_eq!(report["merged"]["label-format"], "inline");
}

#[test]
fn malformed_settings_fail() {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let settings = temp.path().join("body.yml");
    fs::write(&settings, "outer: [unclosed\n").expect("Failed to write settings");

    let settings = settings.to_string_lossy().into_owned();
    let output = field_template(&["render", "body", "--settings", &settings, "--content", "x"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse settings file"));
}
