// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! interview-scheduler [global options] <command>
//! version
//! options
//! schedule [INPUT] [--output FILE] [--no-date-map] [--compact] [--lenient]
//! dates [INPUT]
//! check [INPUT]
//! ```

pub mod global;
pub mod schedule;


use crate::cli::global::GlobalOptions;
use crate::cli::schedule::{InputArgs, ScheduleArgs};
use clap::{Parser, Subcommand};

/// Fellowship Interview Scheduler
///
/// Assigns every fellowship program a distinct interview date.
#[derive(Debug, Parser)]
#[command(
    name = "interview-scheduler",
    author,
    version,
    about = "Fellowship Interview Scheduler",
    long_about = "Assigns every fellowship program a distinct interview date so that\n\
                  as many programs as possible are covered, and lists the dates\n\
                  nobody was assigned as secondary options.\n\n\
                  The input lists one program per line as NAME|DATE[,DATE...]\n\
                  with ISO dates, e.g. `Cardiology|2024-08-01,2024-08-05`.",
    after_help = "CONFIG FILES:\n\n\
                  `scheduler.toml` in the current directory is loaded if present.\n\
                  Files given with --ini are loaded after it, in order, followed by\n\
                  SCHEDULER_<SECTION>__<KEY> environment variables and --set options."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Assigns interview dates and prints the results.
    Schedule(ScheduleArgs),

    /// Prints which programs interview on each date.
    Dates(InputArgs),

    /// Validates a program list and prints a summary.
    Check(InputArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
