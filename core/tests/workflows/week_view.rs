// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Week resolution workflow tests.

use chrono::Weekday;
use rollcall_core::{Config, Schedule, WeekSpan, shift_weeks};

use crate::common::{FRIDAY, MONDAY, SUNDAY, WEDNESDAY, resolved_record, slot_record};

fn schedule() -> Schedule {
    let records = vec![
        slot_record("os", &["A3", "E3"]),
        resolved_record("dbms", Weekday::Fri, "2:00 PM - 2:55 PM"),
    ];
    Schedule::with_records(Config::default(), records)
}

#[test]
fn school_week_resolves_each_day() {
    let week = schedule().week(WEDNESDAY, WeekSpan::School);
    assert_eq!(week.len(), 5);
    assert_eq!(week[0].date, MONDAY);
    assert_eq!(week[4].date, FRIDAY);

    let counts: Vec<usize> = week.iter().map(|d| d.sessions.len()).collect();
    assert_eq!(counts, vec![1, 1, 1, 1, 1]);
    assert_eq!(week[4].sessions.afternoon[0].subject_id, "dbms");
}

#[test]
fn sunday_belongs_to_previous_school_week() {
    let week = schedule().week(SUNDAY, WeekSpan::School);
    assert_eq!(week[0].date, MONDAY);
}

#[test]
fn calendar_week_includes_weekend() {
    let week = schedule().week(WEDNESDAY, WeekSpan::Calendar);
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].weekday, Weekday::Sun);
    assert!(week[0].sessions.is_empty());
    assert!(week[6].sessions.is_empty());
}

#[test]
fn shifted_week_starts_seven_days_later() {
    let next = shift_weeks(WEDNESDAY, 1).unwrap();
    let week = schedule().week(next, WeekSpan::School);
    assert_eq!(week[0].date, shift_weeks(MONDAY, 1).unwrap());
}

#[test]
fn day_plan_serializes_for_json_output() {
    let plan = schedule().day(FRIDAY);
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(json["date"], "2026-02-27");
    assert_eq!(json["weekday"], "Fri");
    assert_eq!(json["lunchBoundary"], "13:00");
    assert_eq!(json["afternoon"][0]["subjectId"], "dbms");
    assert_eq!(json["afternoon"][0]["sortKey"], 1400);
    assert!(json["morning"].as_array().unwrap().is_empty());
}
