// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, Weekday};
use uuid::Uuid;

use crate::{AttendanceStatus, ClassSession, ResolvedRecord};

/// Request for recording the attendance of one session.
///
/// This is the payload handed to the attendance service; in JSON the status
/// is sent as `type`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceMark {
    /// Subject being marked.
    pub subject_id: String,

    /// Weekday of the session.
    pub day: Weekday,

    /// The new status.
    #[serde(rename = "type")]
    pub status: AttendanceStatus,

    /// Display time range of the session, identifies the slot within the day.
    pub time_slot: String,

    /// Calendar date of the session.
    pub date: NaiveDate,

    /// Semester metadata of the subject.
    pub semester: u32,
}

/// Attendance recorded for one session of a subject on one date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceEntry {
    /// Subject the session belongs to.
    pub subject_id: String,

    /// Calendar date of the session.
    pub date: NaiveDate,

    /// Display time range of the session.
    pub time_slot: String,

    /// The recorded status.
    #[serde(alias = "type")]
    pub status: AttendanceStatus,

    /// Identifier of the attendance entry, `None` once unmarked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attendance_id: Option<String>,
}

impl AttendanceEntry {
    /// Whether this entry records the session of `subject_id` at `time_slot` on `date`.
    pub fn matches(&self, subject_id: &str, date: NaiveDate, time_slot: &str) -> bool {
        self.subject_id == subject_id
            && self.date == date
            && self.time_slot.trim() == time_slot.trim()
    }

    /// Whether this entry supersedes the status a pre-resolved record carries.
    pub(crate) fn covers(&self, record: &ResolvedRecord) -> bool {
        self.subject_id == record.subject.id
            && self.date.weekday() == record.day
            && self.time_slot.trim() == record.time_slot.trim()
    }
}

/// Records a mark in the attendance log, the way the attendance service
/// would on the next fetch of that date.
///
/// An existing entry of the same session is updated in place. A session
/// marked for the first time keeps `current_id` (the id the session already
/// carried) or gets a fresh one; marking it `UNMARKED` clears the id.
pub fn apply_mark<'a>(
    log: &'a mut Vec<AttendanceEntry>,
    mark: &AttendanceMark,
    current_id: Option<&str>,
) -> &'a AttendanceEntry {
    let index = log
        .iter()
        .position(|e| e.matches(&mark.subject_id, mark.date, &mark.time_slot));

    let previous_id = index.and_then(|i| log[i].attendance_id.as_deref()).or(current_id);
    let attendance_id = match (mark.status.is_marked(), previous_id) {
        (false, _) => None,
        (true, Some(id)) => Some(id.to_string()),
        (true, None) => Some(Uuid::new_v4().to_string()),
    };

    tracing::debug!(
        subject_id = mark.subject_id,
        date = %mark.date,
        status = %mark.status,
        attendance_id,
        "applying attendance mark"
    );
    let entry = AttendanceEntry {
        subject_id: mark.subject_id.clone(),
        date: mark.date,
        time_slot: mark.time_slot.clone(),
        status: mark.status,
        attendance_id,
    };
    let index = match index {
        Some(i) => {
            log[i] = entry;
            i
        }
        None => {
            log.push(entry);
            log.len() - 1
        }
    };
    &log[index]
}

/// Overlays the attendance log on the sessions of `date`.
pub fn apply_attendance(sessions: &mut [ClassSession], log: &[AttendanceEntry], date: NaiveDate) {
    for session in sessions {
        if let Some(entry) = log
            .iter()
            .find(|e| e.matches(&session.subject_id, date, &session.display_time))
        {
            session.status = entry.status;
            session.attendance_id = entry.attendance_id.clone();
        }
    }
}
