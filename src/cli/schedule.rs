// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the `schedule`, `dates` and `check` commands.

use clap::Args;
use std::path::PathBuf;

use crate::config::Config;

/// Program list selection shared by every command that reads one.
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Program list (`NAME|DATE[,DATE...]` per line). Defaults to `input.path`.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Skip lines with invalid dates instead of failing.
    #[arg(long)]
    pub lenient: bool,
}

impl InputArgs {
    /// Folds the flags into `config`.
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(ref path) = self.input {
            config.input.path = Some(path.clone());
        }
        if self.lenient {
            config.input.lenient = true;
        }
    }
}

/// Arguments of the `schedule` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ScheduleArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Also write the results JSON to FILE.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not print the date to programs map.
    #[arg(long = "no-date-map")]
    pub no_date_map: bool,

    /// Print JSON on a single line.
    #[arg(long)]
    pub compact: bool,
}

impl ScheduleArgs {
    /// Folds the flags into `config`.
    pub fn apply_to(&self, config: &mut Config) {
        self.input.apply_to(config);
        if let Some(ref path) = self.output {
            config.output.path = Some(path.clone());
        }
        if self.no_date_map {
            config.output.show_date_map = false;
        }
        if self.compact {
            config.output.pretty = false;
        }
    }
}
