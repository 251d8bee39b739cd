// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Program list reader.
//!
//! # Format
//!
//! ```text
//! # comment
//! Cardiology|2024-08-01,2024-08-05
//! Nephrology | 2024-08-05
//! ```
//!
//! One program per line, name and comma-separated ISO dates split by `|`.
//!
//! ```text
//! blank / '#' line         ignored
//! trailing empty fields    dropped ("A|2024-08-01," == "A|2024-08-01")
//! not exactly one '|'      skipped, warn (includes "A|")
//! unparsable date          error (lenient: skipped, warn)
//! ```

pub mod encoding;


use chrono::NaiveDate;
use std::path::Path;

use crate::config::types::{InputConfig, InputEncoding};
use crate::error::InputError;
use crate::program::Program;

/// How a program list is decoded and how strictly it is parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputOptions {
    /// Skip lines with unparsable dates instead of failing.
    pub lenient: bool,
    pub encoding: InputEncoding,
}

impl From<&InputConfig> for InputOptions {
    fn from(config: &InputConfig) -> Self {
        Self {
            lenient: config.lenient,
            encoding: config.encoding,
        }
    }
}

/// Parses a program list.
///
/// # Errors
///
/// Returns `InputError::InvalidDate` for the first unparsable date unless
/// `options.lenient` is set.
pub fn parse_programs(text: &str, options: InputOptions) -> Result<Vec<Program>, InputError> {
    let mut programs = Vec::new();

    'lines: for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields = split_fields(trimmed, '|');
        let [name, dates_field] = fields.as_slice() else {
            tracing::warn!(line, "skipping line: expected NAME|DATE[,DATE...]");
            continue;
        };

        let mut dates = Vec::new();
        for value in split_fields(dates_field, ',') {
            match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                Ok(date) => dates.push(date),
                Err(source) if options.lenient => {
                    tracing::warn!(line, value, %source, "skipping line: invalid date");
                    continue 'lines;
                }
                Err(source) => {
                    return Err(InputError::InvalidDate {
                        line,
                        value: value.to_string(),
                        source,
                    });
                }
            }
        }

        let name = name.trim();
        if name.is_empty() {
            tracing::warn!(line, "program has an empty name");
        }
        tracing::trace!(line, program = name, dates = dates.len(), "parsed program");
        programs.push(Program::new(name, dates));
    }

    Ok(programs)
}

/// Splits on `separator`, trims each field and drops trailing empty fields,
/// so `A|2024-08-01|` and `A|2024-08-01,` read like their tidy forms.
fn split_fields(text: &str, separator: char) -> Vec<&str> {
    let mut fields: Vec<&str> = text.split(separator).map(str::trim).collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}

/// Reads, decodes and parses a program list file.
///
/// # Errors
///
/// Returns `InputError::NotFound` if the file does not exist,
/// `InputError::ReadFailed` for other I/O failures, and any error of
/// [`parse_programs`].
pub async fn load_programs(path: &Path, options: InputOptions) -> Result<Vec<Program>, InputError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::NotFound(path.display().to_string())
        } else {
            InputError::ReadFailed {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    let text = encoding::decode(options.encoding, &bytes);
    let programs = parse_programs(&text, options)?;
    tracing::info!(
        path = %path.display(),
        programs = programs.len(),
        "loaded program list"
    );
    Ok(programs)
}
