// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Attendance marking workflow tests.

use chrono::{Days, Weekday};
use rollcall_core::{AttendanceStatus, Config, RecordLayout, Schedule, parse_records};

use crate::common::{MONDAY, TempRecords, sample_records_json, setup_temp_records};

async fn schedule_over(records: &TempRecords) -> Schedule {
    let config = Config {
        records_path: Some(records.path.clone()),
        ..Default::default()
    };
    Schedule::new(config).await.unwrap()
}

#[tokio::test]
async fn mark_then_save_persists_status() {
    // Arrange
    let records = setup_temp_records(sample_records_json()).await.unwrap();
    let mut schedule = schedule_over(&records).await;

    // Act
    let mark = schedule
        .mark_session(MONDAY, "os", Some("A3"), AttendanceStatus::Absent)
        .unwrap();
    schedule.save().await.unwrap();

    // Assert
    assert_eq!(mark.subject_id, "os");
    assert_eq!(mark.day, Weekday::Mon);
    assert_eq!(mark.time_slot, "08:00 - 08:55");
    assert_eq!(mark.date, MONDAY);

    let saved = parse_records(&records.read().await.unwrap()).unwrap();
    assert_eq!(saved.layout, RecordLayout::Envelope);
    assert_eq!(saved.records.len(), 3);
    let os = saved.records.iter().find(|r| r.subject().id == "os").unwrap();
    assert_eq!(os.status(), AttendanceStatus::Unmarked);

    assert_eq!(saved.attendance.len(), 1);
    let entry = &saved.attendance[0];
    assert_eq!(entry.subject_id, "os");
    assert_eq!(entry.date, MONDAY);
    assert_eq!(entry.time_slot, "08:00 - 08:55");
    assert_eq!(entry.status, AttendanceStatus::Absent);
    assert!(entry.attendance_id.is_some());

    let reloaded = schedule_over(&records).await;
    let status = |date, code| reloaded.find_session(date, "os", Some(code)).unwrap().status;
    assert_eq!(status(MONDAY, "A3"), AttendanceStatus::Absent);
    assert_eq!(status(MONDAY, "C3"), AttendanceStatus::Unmarked);
    assert_eq!(status(MONDAY + Days::new(7), "A3"), AttendanceStatus::Unmarked);
}

#[tokio::test]
async fn remarking_keeps_attendance_id() {
    let records = setup_temp_records(sample_records_json()).await.unwrap();
    let mut schedule = schedule_over(&records).await;

    schedule
        .mark_session(MONDAY, "dbms", None, AttendanceStatus::Medical)
        .unwrap();

    let dbms = schedule.find_session(MONDAY, "dbms", None).unwrap();
    assert_eq!(dbms.status, AttendanceStatus::Medical);
    assert_eq!(dbms.attendance_id.as_deref(), Some("a-17"));

    let next_week = schedule.find_session(MONDAY + Days::new(7), "dbms", None).unwrap();
    assert_eq!(next_week.status, AttendanceStatus::Present);
}

#[tokio::test]
async fn unmarking_clears_attendance_id() {
    let records = setup_temp_records(sample_records_json()).await.unwrap();
    let mut schedule = schedule_over(&records).await;

    schedule
        .mark_session(MONDAY, "dbms", None, AttendanceStatus::Unmarked)
        .unwrap();

    let session = schedule.find_session(MONDAY, "dbms", None).unwrap();
    assert!(session.needs_marking());
    assert_eq!(session.attendance_id, None);
}

#[tokio::test]
async fn mark_payload_serializes_status_as_type() {
    let records = setup_temp_records(sample_records_json()).await.unwrap();
    let schedule = schedule_over(&records).await;

    let session = schedule.find_session(MONDAY, "dbms", None).unwrap();
    let mark = session.mark(AttendanceStatus::Cancelled, MONDAY);
    let json = serde_json::to_value(&mark).unwrap();

    assert_eq!(json["subjectId"], "dbms");
    assert_eq!(json["type"], "CANCELLED");
    assert_eq!(json["timeSlot"], "2:00 PM - 2:55 PM");
    assert_eq!(json["date"], "2026-02-23");
    assert_eq!(json["semester"], 6);
}

#[tokio::test]
async fn summary_counts_marked_records() {
    let records = setup_temp_records(sample_records_json()).await.unwrap();
    let mut schedule = schedule_over(&records).await;

    schedule
        .mark_session(MONDAY, "lab", Some("Q"), AttendanceStatus::Absent)
        .unwrap();

    let summary = schedule.summary();
    assert_eq!(summary.total_classes, 2);
    assert_eq!(summary.attended_classes, 1);
    assert_eq!(summary.absent_classes, 1);
    assert_eq!(summary.unmarked_classes, 0);
    assert_eq!(summary.percentage(), Some(50.0));

    let by_subject = schedule.summary_by_subject();
    let ids: Vec<_> = by_subject.iter().map(|(s, _)| s.id.as_str()).collect();
    assert_eq!(ids, vec!["os", "dbms", "lab"]);
}

#[tokio::test]
async fn save_into_fresh_file_uses_list_layout() {
    let records = TempRecords::empty().unwrap();
    let mut schedule = schedule_over(&records).await;
    assert!(schedule.records().is_empty());
    assert!(schedule.mark_session(MONDAY, "os", None, AttendanceStatus::Present).is_err());

    schedule.save().await.unwrap();
    assert_eq!(records.read().await.unwrap().trim(), "[]");
}
