// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use interview_scheduler::config::Config;
use interview_scheduler::config::loader::ConfigLoader;
use interview_scheduler::config::types::InputEncoding;
use interview_scheduler::logging::LogLevel;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = Config::parse("").unwrap();
    assert!(config.input.path.is_none());
    assert!(config.output.pretty);
}

#[test]
fn config_parse_global_section() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 5
file_log_level = 1
log_file = "logs/scheduler.log"
"#,
    )
    .unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
    assert_eq!(config.global.file_log_level, LogLevel::ERROR);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/scheduler.log"))
    );
}

#[test]
fn config_parse_input_encoding() {
    let config = Config::parse("[input]\nencoding = \"utf16le\"").unwrap();
    assert_eq!(config.input.encoding, InputEncoding::Utf16Le);

    assert!(Config::parse("[input]\nencoding = \"ebcdic\"").is_err());
}

#[test]
fn config_unknown_section_rejected() {
    assert!(Config::parse("[scheduler]\nmax_nodes = 1000").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_file_then_overrides() {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[input]
path = "rmadding.txt"

[output]
pretty = true
show_date_map = true
"#
    )
    .expect("failed to write temp file");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .apply_overrides(&["output/show_date_map=false", "input/lenient=true"])
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.input.path, Some(PathBuf::from("rmadding.txt")));
    assert!(config.input.lenient);
    assert!(config.output.pretty);
    assert!(!config.output.show_date_map);
}

#[test]
fn config_from_file_round_trips_options() {
    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(file, "[output]\npath = \"out/results.json\"").expect("failed to write temp file");

    let config = Config::from_file(file.path()).unwrap();
    let options = config.format_options();
    assert!(
        options
            .iter()
            .any(|line| line.starts_with("output/path") && line.ends_with("= out/results.json")),
        "{options:?}"
    );
}

#[test]
fn config_bad_override_rejected() {
    let result = ConfigLoader::new().apply_overrides(&["pretty=false"]);
    assert!(result.is_err());
}
