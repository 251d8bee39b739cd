// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! ```text
//! Config: GlobalConfig, InputConfig, OutputConfig
//! InputEncoding: Auto (default) | Utf8 | Utf16Le | Windows1252
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Text encoding of the program list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputEncoding {
    /// Sniff a byte order mark, fall back to UTF-8.
    #[default]
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "utf8")]
    Utf8,
    #[serde(rename = "utf16le")]
    Utf16Le,
    #[serde(rename = "windows-1252")]
    Windows1252,
}

impl std::fmt::Display for InputEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Utf8 => write!(f, "utf8"),
            Self::Utf16Le => write!(f, "utf16le"),
            Self::Windows1252 => write!(f, "windows-1252"),
        }
    }
}

impl std::str::FromStr for InputEncoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "utf8" | "utf-8" => Ok(Self::Utf8),
            "utf16le" | "utf-16le" => Ok(Self::Utf16Le),
            "windows-1252" | "cp1252" => Ok(Self::Windows1252),
            _ => Err(ConfigError::InvalidValue {
                section: "input".to_string(),
                key: "encoding".to_string(),
                message: format!(
                    "expected 'auto', 'utf8', 'utf16le', or 'windows-1252', got '{s}'"
                ),
            }),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Where and how the program list is read.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputConfig {
    /// Program list used when no input is given on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Skip lines with unparsable dates instead of failing.
    pub lenient: bool,
    /// Text encoding of the program list.
    pub encoding: InputEncoding,
}

/// How results are rendered.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Indented JSON.
    pub pretty: bool,
    /// Print the date to programs map before the results.
    pub show_date_map: bool,
    /// Also write the results JSON to this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            show_date_map: true,
            path: None,
        }
    }
}
