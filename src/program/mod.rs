// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fellowship programs and the dates they interview on.
//!
//! ```text
//! Program
//!   program_name      "Cardiology"
//!   available_dates   [2024-08-01, 2024-08-05]   (input order, read-only)
//!   assigned_date     Some(2024-08-05) | None    (set by matching)
//!   secondary_dates   [2024-08-01]               (set by matching)
//! ```
//!
//! Serializes with camelCase keys and ISO `YYYY-MM-DD` dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A fellowship program and its interview dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    program_name: String,
    available_dates: Vec<NaiveDate>,
    assigned_date: Option<NaiveDate>,
    #[serde(default)]
    secondary_dates: Vec<NaiveDate>,
}

impl Program {
    /// Creates a program with no assignment and no secondary dates.
    pub fn new(program_name: impl Into<String>, available_dates: Vec<NaiveDate>) -> Self {
        Self {
            program_name: program_name.into(),
            available_dates,
            assigned_date: None,
            secondary_dates: Vec::new(),
        }
    }

    #[must_use]
    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    /// Interview dates in input order.
    #[must_use]
    pub fn available_dates(&self) -> &[NaiveDate] {
        &self.available_dates
    }

    #[must_use]
    pub const fn assigned_date(&self) -> Option<NaiveDate> {
        self.assigned_date
    }

    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assigned_date.is_some()
    }

    #[must_use]
    pub fn secondary_dates(&self) -> &[NaiveDate] {
        &self.secondary_dates
    }

    pub(crate) const fn set_assigned_date(&mut self, date: Option<NaiveDate>) {
        self.assigned_date = date;
    }

    /// Appends a secondary date unless it is already listed.
    pub fn add_secondary_date(&mut self, date: NaiveDate) {
        if !self.secondary_dates.contains(&date) {
            self.secondary_dates.push(date);
        }
    }

    /// Drops the results of a previous matching run.
    pub(crate) fn clear_results(&mut self) {
        self.assigned_date = None;
        self.secondary_dates.clear();
    }
}
