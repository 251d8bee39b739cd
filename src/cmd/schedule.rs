// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Schedule, dates and check command implementations.
//!
//! ```text
//! InputArgs + Config --> load_programs --> DateAssigner --> report
//! ```

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context;

use crate::cli::schedule::{InputArgs, ScheduleArgs};
use crate::config::Config;
use crate::error::{ReportError, Result, SchedulerError, SchedulerResult};
use crate::input::{InputOptions, load_programs};
use crate::matching::DateAssigner;
use crate::program::Program;
use crate::report::{self, RenderOptions};

/// Applies command flags to a copy of `config` and loads the program list.
async fn load(args: &InputArgs, config: &Config) -> Result<(PathBuf, Vec<Program>)> {
    let mut config = config.clone();
    args.apply_to(&mut config);
    let path = config.input_path(args.input.as_deref())?;
    let programs = load_programs(&path, InputOptions::from(&config.input))
        .await
        .map_err(SchedulerError::from)
        .with_context(|| format!("failed to load programs from {}", path.display()))?;
    Ok((path, programs))
}

/// Runs the assignment and returns the rendered report.
///
/// Writes the results file as well when `output.path` or `--output` is set.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the program list cannot
/// be loaded, or the results file cannot be written.
pub async fn schedule_report(args: &ScheduleArgs, config: &Config) -> Result<String> {
    let mut config = config.clone();
    args.apply_to(&mut config);
    config.validate()?;

    let (_, mut programs) = load(&args.input, &config).await?;
    if programs.is_empty() {
        tracing::warn!("program list is empty");
    }

    let summary = DateAssigner::new().assign(&mut programs);
    let rendered = report::render_schedule(&programs, &summary, RenderOptions::from(&config.output))
        .map_err(|e| SchedulerError::from(ReportError::from(e)))?;

    if let Some(ref path) = config.output.path {
        report::write_results(path, &programs, config.output.pretty)
            .await
            .map_err(SchedulerError::from)?;
    }
    Ok(rendered)
}

/// Main handler for schedule command.
///
/// # Errors
///
/// See [`schedule_report`].
pub async fn run_schedule_command(args: &ScheduleArgs, config: &Config) -> Result<()> {
    let rendered = schedule_report(args, config).await?;
    emit(&rendered)?;
    Ok(())
}

/// Returns the rendered date to programs map.
///
/// # Errors
///
/// Returns an error if the program list cannot be loaded.
pub async fn dates_report(args: &InputArgs, config: &Config) -> Result<String> {
    let (_, programs) = load(args, config).await?;
    report::render_date_map(&programs, config.output.pretty)
        .map_err(|e| SchedulerError::from(ReportError::from(e)).into())
}

/// Main handler for dates command.
///
/// # Errors
///
/// See [`dates_report`].
pub async fn run_dates_command(args: &InputArgs, config: &Config) -> Result<()> {
    let rendered = dates_report(args, config).await?;
    emit(&rendered)?;
    Ok(())
}

/// Returns a short summary of a program list and how many programs can be
/// given a date.
///
/// # Errors
///
/// Returns an error if the program list cannot be loaded.
pub async fn check_report(args: &InputArgs, config: &Config) -> Result<String> {
    let (path, mut programs) = load(args, config).await?;
    let summary = DateAssigner::new().assign(&mut programs);

    let mut out = String::new();
    writeln!(out, "input:        {}", path.display())?;
    writeln!(out, "programs:     {}", summary.programs)?;
    writeln!(out, "unique dates: {}", summary.unique_dates)?;
    writeln!(out, "assignable:   {}", summary.matched)?;
    if !summary.is_complete() {
        writeln!(out, "unassigned:   {}", summary.unassigned.join(", "))?;
    }
    Ok(out)
}

/// Main handler for check command.
///
/// # Errors
///
/// See [`check_report`].
pub async fn run_check_command(args: &InputArgs, config: &Config) -> Result<()> {
    let rendered = check_report(args, config).await?;
    emit(&rendered)?;
    Ok(())
}

/// Writes a rendered report to stdout.
fn emit(rendered: &str) -> SchedulerResult<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
