// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Weekday;

use crate::AttendanceStatus;

/// Identity and display metadata of an enrolled subject.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Opaque identifier, stable across resolutions.
    #[serde(alias = "subjectId", alias = "_id")]
    pub id: String,

    /// Display name, e.g. `"Operating Systems"`.
    #[serde(alias = "subjectName")]
    pub name: String,

    /// Course code, e.g. `"CS31202"`.
    #[serde(alias = "subjectCode")]
    pub code: String,

    /// The professor teaching the subject, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,

    /// The room or building, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Semester the subject belongs to; display metadata only.
    #[serde(default)]
    pub semester: u32,
}

/// A record whose time slot was already resolved by the server.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRecord {
    #[serde(flatten)]
    pub subject: Subject,

    /// The weekday this record is scheduled for.
    pub day: Weekday,

    /// Display time range, e.g. `"10:00 AM - 10:55 AM"`.
    pub time_slot: String,

    /// Identifier of the attendance entry for this date, `None` when unmarked.
    #[serde(default)]
    pub attendance_id: Option<String>,

    /// Attendance status for this date.
    #[serde(default, alias = "type")]
    pub status: AttendanceStatus,
}

/// A record carrying abstract slot codes, resolved against the slot catalog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotCodeRecord {
    #[serde(flatten)]
    pub subject: Subject,

    /// Slot codes claimed by the subject, e.g. `["A3", "Q"]`.
    #[serde(alias = "slots")]
    pub slot_codes: Vec<String>,

    /// Identifier of the attendance entry for this date, `None` when unmarked.
    #[serde(default)]
    pub attendance_id: Option<String>,

    /// Attendance status for this date.
    #[serde(default, alias = "type")]
    pub status: AttendanceStatus,
}

/// One subject's occupancy of the timetable, in either input shape.
///
/// In JSON the shape is inferred: a record with `day` and `timeSlot` is
/// pre-resolved, a record with `slots` (or `slotCodes`) needs the catalog.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum SubjectSlotRecord {
    /// Pre-resolved by the server.
    Resolved(ResolvedRecord),

    /// Raw slot codes, resolved locally.
    SlotCodes(SlotCodeRecord),
}

impl SubjectSlotRecord {
    /// The subject this record belongs to.
    pub fn subject(&self) -> &Subject {
        match self {
            SubjectSlotRecord::Resolved(r) => &r.subject,
            SubjectSlotRecord::SlotCodes(r) => &r.subject,
        }
    }

    /// The attendance status carried by the record.
    pub fn status(&self) -> AttendanceStatus {
        match self {
            SubjectSlotRecord::Resolved(r) => r.status,
            SubjectSlotRecord::SlotCodes(r) => r.status,
        }
    }

    /// The attendance entry identifier, if the record has been marked.
    pub fn attendance_id(&self) -> Option<&str> {
        match self {
            SubjectSlotRecord::Resolved(r) => r.attendance_id.as_deref(),
            SubjectSlotRecord::SlotCodes(r) => r.attendance_id.as_deref(),
        }
    }
}

impl From<ResolvedRecord> for SubjectSlotRecord {
    fn from(record: ResolvedRecord) -> Self {
        SubjectSlotRecord::Resolved(record)
    }
}

impl From<SlotCodeRecord> for SubjectSlotRecord {
    fn from(record: SlotCodeRecord) -> Self {
        SubjectSlotRecord::SlotCodes(record)
    }
}
