// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. scheduler.toml (cwd, optional)
//! 3. --ini files, in order
//! 4. SCHEDULER_* env vars
//! 5. --set overrides
//! 6. command flags (--output, --lenient, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SCHEDULER_INPUT__PATH=programs.txt     → input.path
//! SCHEDULER_OUTPUT__SHOW_DATE_MAP=false  → output.show_date_map
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result, SchedulerResult};

use loader::ConfigLoader;
use types::{GlobalConfig, InputConfig, OutputConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Logging options.
    pub global: GlobalConfig,
    /// Program list options.
    pub input: InputConfig,
    /// Result rendering options.
    pub output: OutputConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use interview_scheduler::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("scheduler.toml")
    ///     .with_env_prefix("SCHEDULER")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Reject combinations that would make a run destructive or meaningless.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` if the results file would overwrite
    /// the input file.
    pub fn validate(&self) -> SchedulerResult<()> {
        if let (Some(input), Some(output)) = (&self.input.path, &self.output.path)
            && same_file(input, output)
        {
            return Err(ConfigError::InvalidValue {
                section: "output".to_string(),
                key: "path".to_string(),
                message: format!("'{}' is also the input file", output.display()),
            }
            .into());
        }
        Ok(())
    }

    /// Resolve the program list path.
    ///
    /// A path given on the command line wins over `input.path`.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::MissingKey` if neither is set.
    pub fn input_path(&self, cli_input: Option<&Path>) -> SchedulerResult<PathBuf> {
        cli_input
            .map(Path::to_path_buf)
            .or_else(|| self.input.path.clone())
            .ok_or_else(|| {
                ConfigError::MissingKey {
                    section: "input".to_string(),
                    key: "path".to_string(),
                }
                .into()
            })
    }

    /// Format configuration options for display.
    ///
    /// One `section/key = value` line per option, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(|| "(unset)".to_string(), |p| p.display().to_string())
        };

        let mut options = BTreeMap::new();
        options.insert(
            "global/output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global/file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert("global/log_file", fmt(&self.global.log_file));
        options.insert("input/path", fmt(&self.input.path));
        options.insert("input/lenient", self.input.lenient.to_string());
        options.insert("input/encoding", self.input.encoding.to_string());
        options.insert("output/pretty", self.output.pretty.to_string());
        options.insert(
            "output/show_date_map",
            self.output.show_date_map.to_string(),
        );
        options.insert("output/path", fmt(&self.output.path));

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}

/// Compares resolved paths so `./a` and `a` match; falls back to the raw
/// paths when either one does not exist yet.
fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
