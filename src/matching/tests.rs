// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{DateAssigner, date_to_programs};
use crate::program::Program;
use chrono::NaiveDate;
use std::collections::HashSet;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn program(name: &str, dates: &[&str]) -> Program {
    Program::new(name, dates.iter().map(|d| date(d)).collect())
}

/// Largest matching by exhaustive search.
fn brute_force_matching(programs: &[Program], used: &mut HashSet<NaiveDate>) -> usize {
    let Some((first, rest)) = programs.split_first() else {
        return 0;
    };
    let mut best = brute_force_matching(rest, used);
    for &candidate in first.available_dates() {
        if used.insert(candidate) {
            best = best.max(1 + brute_force_matching(rest, used));
            used.remove(&candidate);
        }
    }
    best
}

fn assert_invariants(programs: &[Program]) {
    let assigned: Vec<NaiveDate> = programs.iter().filter_map(Program::assigned_date).collect();
    let distinct: HashSet<_> = assigned.iter().collect();
    assert_eq!(distinct.len(), assigned.len(), "a date was assigned twice");

    for p in programs {
        if let Some(d) = p.assigned_date() {
            assert!(
                p.available_dates().contains(&d),
                "{} got a date it does not offer",
                p.program_name()
            );
        }
        for d in p.secondary_dates() {
            assert!(p.available_dates().contains(d));
            assert!(!distinct.contains(d), "secondary date {d} is assigned");
        }
    }
}

#[test]
fn test_everyone_gets_a_date_when_possible() {
    let mut programs = vec![
        program("Cardiology", &["2024-08-01", "2024-08-02"]),
        program("Nephrology", &["2024-08-01"]),
    ];
    let summary = DateAssigner::new().assign(&mut programs);

    assert_eq!(summary.matched, 2);
    assert!(summary.is_complete());
    assert_eq!(programs[0].assigned_date(), Some(date("2024-08-02")));
    assert_eq!(programs[1].assigned_date(), Some(date("2024-08-01")));
    assert!(programs[0].secondary_dates().is_empty());
    assert_invariants(&programs);
}

#[test]
fn test_more_programs_than_dates() {
    let mut programs = vec![
        program("A", &["2024-08-01", "2024-08-02"]),
        program("B", &["2024-08-01", "2024-08-02"]),
        program("C", &["2024-08-01", "2024-08-02"]),
    ];
    let summary = DateAssigner::new().assign(&mut programs);

    assert_eq!(summary.matched, 2);
    assert_eq!(summary.programs, 3);
    assert_eq!(summary.unique_dates, 2);
    assert_eq!(summary.unassigned, vec!["C".to_string()]);
    assert!(!programs[2].is_assigned());
    assert!(programs[2].secondary_dates().is_empty());
    assert_invariants(&programs);
}

#[test]
fn test_secondary_dates_are_unclaimed_dates() {
    let mut programs = vec![
        program("Allergy", &["2024-08-05", "2024-08-01", "2024-08-09"]),
        program("Surgery", &["2024-08-01"]),
        program("Dermatology", &["2024-08-09", "2024-08-12"]),
    ];
    let mut assigner = DateAssigner::new();
    assigner.assign(&mut programs);
    assert_invariants(&programs);

    let claimed = assigner.assigned_dates();
    assert_eq!(claimed.len(), 3);
    assert!(claimed.contains(&date("2024-08-01")));

    // 2024-08-01 belongs to Surgery; whatever Allergy and Dermatology drew,
    // the leftover dates stay available to them.
    let allergy_secondary: Vec<_> = programs[0]
        .available_dates()
        .iter()
        .copied()
        .filter(|d| !claimed.contains(d))
        .collect();
    assert_eq!(programs[0].secondary_dates(), allergy_secondary.as_slice());
    assert_eq!(programs[1].secondary_dates(), &[] as &[NaiveDate]);
}

#[test]
fn test_program_without_dates() {
    let mut programs = vec![program("Empty", &[]), program("Full", &["2024-08-01"])];
    let summary = DateAssigner::new().assign(&mut programs);
    assert_eq!(summary.matched, 1);
    assert_eq!(summary.unassigned, vec!["Empty".to_string()]);
}

#[test]
fn test_duplicate_dates_in_one_program() {
    let mut programs = vec![
        program("Twice", &["2024-08-01", "2024-08-01"]),
        program("Other", &["2024-08-01", "2024-08-03"]),
    ];
    let summary = DateAssigner::new().assign(&mut programs);
    assert_eq!(summary.matched, 2);
    assert_eq!(programs[0].assigned_date(), Some(date("2024-08-01")));
    assert_eq!(programs[1].assigned_date(), Some(date("2024-08-03")));
    assert_invariants(&programs);
}

#[test]
fn test_empty_input() {
    let mut programs: Vec<Program> = Vec::new();
    let summary = DateAssigner::new().assign(&mut programs);
    assert_eq!(summary.matched, 0);
    assert!(summary.is_complete());
}

#[test]
fn test_assigner_is_reusable() {
    let mut assigner = DateAssigner::new();

    let mut first = vec![program("A", &["2024-08-01"]), program("B", &["2024-08-02"])];
    assigner.assign(&mut first);
    assert_eq!(assigner.assigned_dates().len(), 2);

    let mut second = vec![program("C", &["2024-09-01", "2024-09-02"])];
    let summary = assigner.assign(&mut second);
    assert_eq!(summary.matched, 1);
    assert_eq!(assigner.assigned_dates().len(), 1);
    assert_eq!(second[0].secondary_dates().len(), 1);

    // running again over already-assigned programs gives the same result
    let before = second.clone();
    assigner.assign(&mut second);
    assert_eq!(before, second);
}

#[test]
fn test_matches_brute_force() {
    let pool: Vec<NaiveDate> = (1..=5)
        .map(|day| NaiveDate::from_ymd_opt(2024, 8, day).unwrap())
        .collect();

    // deterministic linear congruential sequence
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        state >> 33
    };

    for round in 0..200 {
        let count = 1 + (next() % 6) as usize;
        let mut programs: Vec<Program> = (0..count)
            .map(|i| {
                let dates = pool
                    .iter()
                    .copied()
                    .filter(|_| next() % 3 == 0)
                    .collect();
                Program::new(format!("P{i}"), dates)
            })
            .collect();

        let expected = brute_force_matching(&programs, &mut HashSet::new());
        let summary = DateAssigner::new().assign(&mut programs);
        assert_eq!(summary.matched, expected, "round {round}");
        assert_eq!(
            programs.iter().filter(|p| p.is_assigned()).count(),
            expected,
            "round {round}"
        );
        assert_invariants(&programs);
    }
}

// --- Date map ---

#[test]
fn test_date_to_programs() {
    let programs = vec![
        program("Cardiology", &["2024-08-05", "2024-08-01"]),
        program("Nephrology", &["2024-08-01", "2024-08-01"]),
    ];
    let map = date_to_programs(&programs);

    let keys: Vec<_> = map.keys().copied().collect();
    assert_eq!(keys, vec![date("2024-08-01"), date("2024-08-05")]);
    assert_eq!(
        map[&date("2024-08-01")],
        vec!["Cardiology".to_string(), "Nephrology".to_string()]
    );
    assert_eq!(map[&date("2024-08-05")], vec!["Cardiology".to_string()]);
}
