// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Options command implementation.

use crate::config::Config;

/// Prints every configuration option with its effective value.
pub fn run_options_command(config: &Config, loaded_files: &[String]) {
    if loaded_files.is_empty() {
        println!("# no config files loaded");
    } else {
        for file in loaded_files {
            println!("# {file}");
        }
    }
    for line in config.format_options() {
        println!("{line}");
    }
}
