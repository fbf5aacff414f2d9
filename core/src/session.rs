// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, Weekday};

use crate::{AttendanceMark, AttendanceStatus};

/// One resolved occurrence of a subject meeting on a given day.
///
/// Sessions are derived from [`crate::SubjectSlotRecord`]s on every
/// resolution and never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassSession {
    /// Identifier of the subject, shared by every session of that subject.
    pub subject_id: String,

    /// Display name of the subject.
    pub subject_name: String,

    /// Course code of the subject.
    pub subject_code: String,

    /// The professor, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,

    /// The room, or the placeholder when the subject has none.
    pub location: String,

    /// Semester metadata carried through from the record.
    pub semester: u32,

    /// Weekday the session takes place on.
    pub day: Weekday,

    /// Human-readable time range, e.g. `"10:00 AM - 10:55 AM"`.
    pub display_time: String,

    /// `HHMM` of the start time, for ordering only.
    pub sort_key: u32,

    /// Slot codes this session derives from; empty for pre-resolved records.
    pub slot_codes: Vec<String>,

    /// Attendance entry identifier, `None` when unmarked.
    pub attendance_id: Option<String>,

    /// Attendance status, carried through unchanged from the record.
    pub status: AttendanceStatus,
}

impl ClassSession {
    /// Whether the session spans more than one catalog slot (a "double slot").
    pub fn is_multi_slot(&self) -> bool {
        self.slot_codes.len() > 1
    }

    /// Whether attendance still has to be recorded for this session.
    pub fn needs_marking(&self) -> bool {
        !self.status.is_marked()
    }

    /// Builds the request for marking this session with `status` on `date`.
    pub fn mark(&self, status: AttendanceStatus, date: NaiveDate) -> AttendanceMark {
        AttendanceMark {
            subject_id: self.subject_id.clone(),
            day: self.day,
            status,
            time_slot: self.display_time.clone(),
            date,
            semester: self.semester,
        }
    }
}
