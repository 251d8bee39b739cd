// interview-scheduler: Fellowship Interview Scheduler
//
// SPDX-FileCopyrightText: 2026 gurkab
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{RenderOptions, render_date_map, render_schedule, write_results};
use crate::error::ReportError;
use crate::matching::DateAssigner;
use crate::program::Program;

fn programs() -> Vec<Program> {
    vec![
        Program::new("Cardiology", vec!["2024-08-01".parse().unwrap()]),
        Program::new("Nephrology", vec!["2024-08-01".parse().unwrap()]),
    ]
}

#[test]
fn test_render_date_map_pretty() {
    insta::assert_snapshot!(render_date_map(&programs(), true).unwrap(), @r#"
    Date to programs:
    {
      "2024-08-01": [
        "Cardiology",
        "Nephrology"
      ]
    }
    "#);
}

#[test]
fn test_render_schedule_compact() {
    let mut programs = programs();
    let summary = DateAssigner::new().assign(&mut programs);
    let options = RenderOptions {
        pretty: false,
        show_date_map: true,
    };

    insta::assert_snapshot!(render_schedule(&programs, &summary, options).unwrap(), @r#"
    Date to programs:
    {"2024-08-01":["Cardiology","Nephrology"]}
    Algorithm results:
    [{"programName":"Cardiology","availableDates":["2024-08-01"],"assignedDate":"2024-08-01","secondaryDates":[]},{"programName":"Nephrology","availableDates":["2024-08-01"],"assignedDate":null,"secondaryDates":[]}]
    Nephrology has no assigned date
    "#);
}

#[test]
fn test_render_schedule_without_date_map() {
    let mut programs = vec![Program::new("Solo", vec!["2024-08-03".parse().unwrap()])];
    let summary = DateAssigner::new().assign(&mut programs);
    let options = RenderOptions {
        pretty: true,
        show_date_map: false,
    };

    insta::assert_snapshot!(render_schedule(&programs, &summary, options).unwrap(), @r#"
    Algorithm results:
    [
      {
        "programName": "Solo",
        "availableDates": [
          "2024-08-03"
        ],
        "assignedDate": "2024-08-03",
        "secondaryDates": []
      }
    ]
    "#);
}

#[tokio::test]
async fn test_write_results() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("results.json");

    let mut programs = programs();
    DateAssigner::new().assign(&mut programs);
    write_results(&path, &programs, false).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let read_back: Vec<Program> = serde_json::from_str(&written).unwrap();
    assert_eq!(read_back, programs);
}

#[tokio::test]
async fn test_write_results_into_missing_directory_fails() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("missing").join("results.json");
    let err = write_results(&path, &programs(), true).await.unwrap_err();
    assert!(matches!(err, ReportError::WriteFailed { .. }));
    assert!(err.to_string().starts_with("failed to write"), "{err}");
}
