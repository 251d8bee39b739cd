// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Schedule | Dates | Check
//! ```

use std::process::ExitCode;

use interview_scheduler::cli::global::GlobalOptions;
use interview_scheduler::cli::{self, Command};
use interview_scheduler::cmd::config::run_options_command;
use interview_scheduler::cmd::schedule::{
    run_check_command, run_dates_command, run_schedule_command,
};
use interview_scheduler::config::Config;
use interview_scheduler::config::loader::ConfigLoader;
use interview_scheduler::error::bail_out;
use interview_scheduler::logging::{FILE_ONLY_TARGET, LogConfig, LogLevel, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    if let Some(Command::Version) = cli.command {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    let loaded_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let log_config = build_log_config(&config);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(files = loaded_files.len(), "configuration loaded");

    dispatch_command(&cli, &config, &loaded_files).await
}

fn build_log_config(config: &Config) -> LogConfig {
    let show_target = config.global.output_log_level >= LogLevel::DEBUG;

    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .with_show_target(show_target)
        .build()
}

async fn dispatch_command(cli: &cli::Cli, config: &Config, loaded_files: &[String]) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config, loaded_files);
            Ok(())
        }
        Some(Command::Schedule(args)) => run_schedule_command(args, config).await,
        Some(Command::Dates(args)) => run_dates_command(args, config).await,
        Some(Command::Check(args)) => run_check_command(args, config).await,
        None => {
            Err(bail_out("no command specified, see --help").into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(target: FILE_ONLY_TARGET, "{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> interview_scheduler::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional("scheduler.toml");
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader
        .with_env_prefix("SCHEDULER")
        .apply_overrides(&global.to_config_overrides())
}
