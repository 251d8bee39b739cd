// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use interview_scheduler::cli::global::GlobalOptions;
use interview_scheduler::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Version Command
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["interview-scheduler", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_version_alias() {
    let cli = Cli::try_parse_from(["interview-scheduler", "-v"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["interview-scheduler"]).unwrap();
    assert!(cli.command.is_none());
}

// =============================================================================
// Schedule / Dates / Check
// =============================================================================

#[test]
fn cli_schedule_defaults() {
    let cli = Cli::try_parse_from(["interview-scheduler", "schedule"]).unwrap();
    let Some(Command::Schedule(args)) = cli.command else {
        panic!("expected schedule command");
    };
    assert!(args.input.input.is_none());
    assert!(!args.input.lenient);
    assert!(args.output.is_none());
    assert!(!args.no_date_map);
    assert!(!args.compact);
}

#[test]
fn cli_schedule_all_flags() {
    let cli = Cli::try_parse_from([
        "interview-scheduler",
        "schedule",
        "programs.txt",
        "--lenient",
        "--no-date-map",
        "--compact",
        "--output",
        "results.json",
    ])
    .unwrap();
    let Some(Command::Schedule(args)) = cli.command else {
        panic!("expected schedule command");
    };
    assert_eq!(args.input.input, Some(PathBuf::from("programs.txt")));
    assert!(args.input.lenient);
    assert!(args.no_date_map);
    assert!(args.compact);
    assert_eq!(args.output, Some(PathBuf::from("results.json")));
}

#[test]
fn cli_dates_and_check_take_input() {
    let cli = Cli::try_parse_from(["interview-scheduler", "dates", "a.txt"]).unwrap();
    let Some(Command::Dates(args)) = cli.command else {
        panic!("expected dates command");
    };
    assert_eq!(args.input, Some(PathBuf::from("a.txt")));

    let cli = Cli::try_parse_from(["interview-scheduler", "check", "--lenient", "b.txt"]).unwrap();
    let Some(Command::Check(args)) = cli.command else {
        panic!("expected check command");
    };
    assert_eq!(args.input, Some(PathBuf::from("b.txt")));
    assert!(args.lenient);
}

#[test]
fn cli_output_flag_not_on_dates() {
    let result = Cli::try_parse_from(["interview-scheduler", "dates", "--output", "x.json"]);
    assert!(result.is_err());
}

// =============================================================================
// Global Options
// =============================================================================

#[test]
fn cli_global_options_multiple_inis() {
    let cli = Cli::try_parse_from([
        "interview-scheduler",
        "-i",
        "base.toml",
        "-i",
        "override.toml",
        "schedule",
    ])
    .unwrap();
    assert_eq!(
        cli.global.inis,
        vec![PathBuf::from("base.toml"), PathBuf::from("override.toml")]
    );
}

#[test]
fn cli_global_options_to_config_overrides() {
    let opts = GlobalOptions {
        log_level: Some(4),
        log_file: Some(PathBuf::from("logs/run.log")),
        options: vec!["output/pretty=false".to_string()],
        ..Default::default()
    };
    insta::assert_debug_snapshot!(opts.to_config_overrides(), @r#"
    [
        "output/pretty=false",
        "global/output_log_level=4",
        "global/file_log_level=4",
        "global/log_file=logs/run.log",
    ]
    "#);
}

#[test]
fn cli_file_log_level_overrides_log_level() {
    let opts = GlobalOptions {
        log_level: Some(1),
        file_log_level: Some(5),
        ..Default::default()
    };
    assert_eq!(
        opts.to_config_overrides(),
        vec![
            "global/output_log_level=1".to_string(),
            "global/file_log_level=5".to_string(),
        ]
    );
}
