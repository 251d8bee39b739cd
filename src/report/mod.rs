// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Result rendering.
//!
//! ```text
//! Date to programs:          (unless show_date_map = false)
//! { "2024-08-01": [...] }
//! Algorithm results:
//! [ { "programName": ... } ]
//! <name> has no assigned date
//! ```

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::path::Path;

use crate::config::types::OutputConfig;
use crate::error::ReportError;
use crate::matching::{MatchSummary, date_to_programs};
use crate::program::Program;

/// Which sections are rendered and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub pretty: bool,
    pub show_date_map: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            show_date_map: true,
        }
    }
}

impl From<&OutputConfig> for RenderOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            pretty: config.pretty,
            show_date_map: config.show_date_map,
        }
    }
}

/// Serializes `value` as indented or compact JSON.
///
/// # Errors
///
/// Returns a `serde_json::Error` if `value` cannot be serialized.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}

/// Renders the "Date to programs" section.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_date_map(programs: &[Program], pretty: bool) -> serde_json::Result<String> {
    let json = to_json(&date_to_programs(programs), pretty)?;
    Ok(format!("Date to programs:\n{json}\n"))
}

/// Renders the full report of a scheduling run.
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn render_schedule(
    programs: &[Program],
    summary: &MatchSummary,
    options: RenderOptions,
) -> serde_json::Result<String> {
    let mut out = String::new();
    if options.show_date_map {
        out.push_str(&render_date_map(programs, options.pretty)?);
    }

    out.push_str("Algorithm results:\n");
    out.push_str(&to_json(programs, options.pretty)?);
    out.push('\n');

    for name in &summary.unassigned {
        out.push_str(name);
        out.push_str(" has no assigned date\n");
    }
    Ok(out)
}

/// Writes the program list with assignments as JSON to `path`.
///
/// # Errors
///
/// Returns `ReportError::WriteFailed` if the file cannot be written.
pub async fn write_results(
    path: &Path,
    programs: &[Program],
    pretty: bool,
) -> Result<(), ReportError> {
    let mut json = to_json(programs, pretty)?;
    json.push('\n');
    tokio::fs::write(path, json)
        .await
        .map_err(|source| ReportError::WriteFailed {
            path: path.display().to_string(),
            source,
        })?;
    tracing::info!(path = %path.display(), "wrote results");
    Ok(())
}
