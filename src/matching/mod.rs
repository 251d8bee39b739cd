// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

//! Interview date assignment as maximum bipartite matching.
//!
//! # Network Layout
//!
//! ```text
//!            cap 1           cap 1             cap 1
//! source(0) -------> P1 ----------> D1 ----------> sink
//!           -------> P2 ----------> D2 ---------->
//!           -------> ..   (one edge per          ..
//!           -------> Pn    distinct date)  Dm -->
//!
//! nodes: 0 | 1..=n programs (input order) | dates (first appearance) | sink
//! ```
//!
//! A program is assigned the date whose program → date edge carries flow.
//! Dates no program was assigned become secondary options of every program
//! offering them.

pub mod flow;

#[cfg(test)]
mod tests;

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::program::Program;
use flow::{EdgeId, FlowNetwork};

const SOURCE: usize = 0;

/// Outcome of one [`DateAssigner::assign`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    /// Programs that received a date.
    pub matched: usize,
    /// Programs in the input.
    pub programs: usize,
    /// Distinct interview dates across all programs.
    pub unique_dates: usize,
    /// Names of programs left without a date, in input order.
    pub unassigned: Vec<String>,
}

impl MatchSummary {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.unassigned.is_empty()
    }
}

/// Assigns each program at most one interview date, no date shared.
///
/// The assigner keeps the set of dates handed out by its most recent run;
/// every call to [`assign`](Self::assign) starts from scratch.
#[derive(Debug, Default)]
pub struct DateAssigner {
    assigned_dates: BTreeSet<NaiveDate>,
}

impl DateAssigner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dates handed out by the most recent run, ascending.
    #[must_use]
    pub const fn assigned_dates(&self) -> &BTreeSet<NaiveDate> {
        &self.assigned_dates
    }

    /// Assigns dates to `programs` in place and fills their secondary dates.
    ///
    /// Results of earlier runs on the same programs are discarded first.
    pub fn assign(&mut self, programs: &mut [Program]) -> MatchSummary {
        self.assigned_dates.clear();
        for program in programs.iter_mut() {
            program.clear_results();
        }

        let dates = unique_dates(programs);
        let program_count = programs.len();
        let date_node = move |index: usize| 1 + program_count + index;
        let sink = date_node(dates.len());
        let index_of: HashMap<NaiveDate, usize> =
            dates.iter().enumerate().map(|(i, &d)| (d, i)).collect();

        let mut network = FlowNetwork::new(sink + 1);
        let mut offers: Vec<Vec<(NaiveDate, EdgeId)>> = Vec::with_capacity(program_count);
        for (i, program) in programs.iter().enumerate() {
            let program_node = 1 + i;
            network.add_edge(SOURCE, program_node, 1);

            let mut seen = HashSet::new();
            let edges = program
                .available_dates()
                .iter()
                .filter(|date| seen.insert(**date))
                .map(|&date| {
                    let edge = network.add_edge(program_node, date_node(index_of[&date]), 1);
                    (date, edge)
                })
                .collect();
            offers.push(edges);
        }
        for index in 0..dates.len() {
            network.add_edge(date_node(index), sink, 1);
        }

        tracing::debug!(
            nodes = network.node_count(),
            edges = network.edge_count(),
            "built flow network"
        );
        let matched = network.max_flow(SOURCE, sink) as usize;

        for (program, edges) in programs.iter_mut().zip(&offers) {
            let assigned = edges
                .iter()
                .find(|(_, edge)| network.flow(*edge) > 0)
                .map(|(date, _)| *date);
            if let Some(date) = assigned {
                self.assigned_dates.insert(date);
            }
            program.set_assigned_date(assigned);
        }

        let mut unassigned = Vec::new();
        for program in programs.iter_mut() {
            let open: Vec<NaiveDate> = program
                .available_dates()
                .iter()
                .copied()
                .filter(|date| !self.assigned_dates.contains(date))
                .collect();
            for date in open {
                program.add_secondary_date(date);
            }

            match program.assigned_date() {
                Some(date) => {
                    tracing::debug!(program = program.program_name(), %date, "assigned");
                }
                None => unassigned.push(program.program_name().to_string()),
            }
        }

        let summary = MatchSummary {
            matched,
            programs: program_count,
            unique_dates: dates.len(),
            unassigned,
        };
        tracing::info!(
            matched = summary.matched,
            programs = summary.programs,
            dates = summary.unique_dates,
            "assignment finished"
        );
        summary
    }
}

/// Distinct dates in order of first appearance.
fn unique_dates(programs: &[Program]) -> Vec<NaiveDate> {
    let mut seen = HashSet::new();
    programs
        .iter()
        .flat_map(Program::available_dates)
        .copied()
        .filter(|date| seen.insert(*date))
        .collect()
}

/// Maps every offered date to the programs offering it.
///
/// Dates ascend; names keep input order and appear once per program even if
/// a program lists a date twice.
#[must_use]
pub fn date_to_programs(programs: &[Program]) -> BTreeMap<NaiveDate, Vec<String>> {
    let mut map: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();
    for program in programs {
        let mut seen = HashSet::new();
        for &date in program.available_dates() {
            if seen.insert(date) {
                map.entry(date)
                    .or_default()
                    .push(program.program_name().to_string());
            }
        }
    }
    map
}
