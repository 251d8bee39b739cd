// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!        SchedulerError (~24 bytes)
//!                 |
//!   +------+------+------+------+
//!   |      |      |      |      |
//!   v      v      v      v      v
//! Bail  Input  Report Config   Io
//!        Box    Box    Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Input   NotFound, InvalidDate, ReadFailed
//!   Report  Serialize, WriteFailed
//!   Config  ParseError, MissingKey, InvalidValue, NotFound
//!
//! All variants boxed => SchedulerError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`SchedulerError`].
pub type SchedulerResult<T> = std::result::Result<T, SchedulerError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Reading or parsing the program list failed.
    #[error("input error: {0}")]
    Input(#[from] Box<InputError>),

    /// Rendering or writing results failed.
    #[error("report error: {0}")]
    Report(#[from] Box<ReportError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`SchedulerError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> SchedulerError {
    SchedulerError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for SchedulerError {
                fn from(err: $error) -> Self {
                    SchedulerError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    InputError => Input,
    ReportError => Report,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Input Errors ---

/// Errors raised while loading the program list.
#[derive(Debug, Error)]
pub enum InputError {
    /// Input file does not exist.
    #[error("input file not found: {0}")]
    NotFound(String),

    /// A date field could not be parsed as `YYYY-MM-DD`.
    #[error("line {line}: invalid date '{value}': {source}")]
    InvalidDate {
        line: usize,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Reading the input file failed.
    #[error("failed to read '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Report Errors ---

/// Errors raised while rendering or saving results.
#[derive(Debug, Error)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("failed to serialize results: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing a results file failed.
    #[error("failed to write '{path}': {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse configuration sources.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Configuration file not found.
    #[error("config file not found: {0}")]
    NotFound(String),
}
