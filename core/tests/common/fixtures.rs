// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! Dates are fixed so that weekday-dependent resolution is reproducible:
//! the week of 2026-02-23 runs Monday 23rd to Sunday 1st March.

use chrono::{NaiveDate, Weekday};
use rollcall_core::{AttendanceStatus, ResolvedRecord, SlotCodeRecord, Subject, SubjectSlotRecord};

pub const MONDAY: NaiveDate = ymd(2026, 2, 23);
pub const TUESDAY: NaiveDate = ymd(2026, 2, 24);
pub const WEDNESDAY: NaiveDate = ymd(2026, 2, 25);
pub const FRIDAY: NaiveDate = ymd(2026, 2, 27);
pub const SATURDAY: NaiveDate = ymd(2026, 2, 28);
pub const SUNDAY: NaiveDate = ymd(2026, 3, 1);

const fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(y, m, d) {
        Some(date) => date,
        None => panic!("invalid fixture date"),
    }
}

/// Creates a subject whose name and code derive from `id`.
#[must_use]
pub fn subject(id: &str) -> Subject {
    Subject {
        id: id.to_string(),
        name: format!("Subject {id}"),
        code: id.to_uppercase(),
        professor: Some("Dr. Rao".to_string()),
        location: None,
        semester: 6,
    }
}

/// Creates an unmarked slot-code record.
#[must_use]
pub fn slot_record(id: &str, codes: &[&str]) -> SubjectSlotRecord {
    SlotCodeRecord {
        subject: subject(id),
        slot_codes: codes.iter().map(|c| c.to_string()).collect(),
        attendance_id: None,
        status: AttendanceStatus::Unmarked,
    }
    .into()
}

/// Creates an unmarked pre-resolved record.
#[must_use]
pub fn resolved_record(id: &str, day: Weekday, time_slot: &str) -> SubjectSlotRecord {
    ResolvedRecord {
        subject: subject(id),
        day,
        time_slot: time_slot.to_string(),
        attendance_id: None,
        status: AttendanceStatus::Unmarked,
    }
    .into()
}

/// A record file mixing both input shapes, in the envelope layout.
#[must_use]
pub fn sample_records_json() -> &'static str {
    r#"{
  "classes": [
    {
      "subjectId": "os",
      "subjectName": "Operating Systems",
      "subjectCode": "CS31202",
      "professor": "Dr. Rao",
      "location": "NR-121",
      "semester": 6,
      "slots": ["A3", "C3"]
    },
    {
      "subjectId": "dbms",
      "subjectName": "Database Systems",
      "subjectCode": "CS31208",
      "semester": 6,
      "day": "Mon",
      "timeSlot": "2:00 PM - 2:55 PM",
      "attendanceId": "a-17",
      "status": "PRESENT"
    },
    {
      "subjectId": "lab",
      "subjectName": "Systems Lab",
      "subjectCode": "CS39002",
      "semester": 6,
      "slots": ["Q", "J"]
    }
  ]
}"#
}
