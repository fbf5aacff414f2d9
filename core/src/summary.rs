// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{AttendanceEntry, AttendanceStatus, Subject, SubjectSlotRecord};

/// Attendance counts per status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub total_classes: u32,
    pub attended_classes: u32,
    pub absent_classes: u32,
    pub medical_classes: u32,
    pub cancelled_classes: u32,
    pub unmarked_classes: u32,
}

impl AttendanceSummary {
    /// Counts one more session with the given status.
    pub fn add(&mut self, status: AttendanceStatus) {
        self.total_classes += 1;
        let counter = match status {
            AttendanceStatus::Present => &mut self.attended_classes,
            AttendanceStatus::Absent => &mut self.absent_classes,
            AttendanceStatus::Medical => &mut self.medical_classes,
            AttendanceStatus::Cancelled => &mut self.cancelled_classes,
            AttendanceStatus::Unmarked => &mut self.unmarked_classes,
        };
        *counter += 1;
    }

    /// Classes that actually took place and count towards attendance.
    ///
    /// Cancelled classes, medical leave and unmarked sessions are excluded.
    pub fn counted_classes(&self) -> u32 {
        self.attended_classes + self.absent_classes
    }

    /// Percentage of counted classes attended, `None` if none were counted.
    pub fn percentage(&self) -> Option<f64> {
        match self.counted_classes() {
            0 => None,
            n => Some(f64::from(self.attended_classes) * 100.0 / f64::from(n)),
        }
    }
}

impl FromIterator<AttendanceStatus> for AttendanceSummary {
    fn from_iter<I: IntoIterator<Item = AttendanceStatus>>(iter: I) -> Self {
        let mut summary = Self::default();
        iter.into_iter().for_each(|status| summary.add(status));
        summary
    }
}

/// Every counted session as `(subject id, status)`.
///
/// Each log entry is one session on one date. A pre-resolved record counts
/// with its own status when it is marked and no entry covers it.
fn counted<'a>(
    records: &'a [SubjectSlotRecord],
    log: &'a [AttendanceEntry],
) -> impl Iterator<Item = (&'a str, AttendanceStatus)> {
    let from_records = records.iter().filter_map(move |record| match record {
        SubjectSlotRecord::Resolved(r) if r.status.is_marked() => {
            match log.iter().any(|e| e.covers(r)) {
                true => None,
                false => Some((r.subject.id.as_str(), r.status)),
            }
        }
        SubjectSlotRecord::Resolved(_) | SubjectSlotRecord::SlotCodes(_) => None,
    });
    log.iter()
        .map(|e| (e.subject_id.as_str(), e.status))
        .chain(from_records)
}

/// Attendance counts over the whole log.
pub fn summarize(records: &[SubjectSlotRecord], log: &[AttendanceEntry]) -> AttendanceSummary {
    counted(records, log).map(|(_, status)| status).collect()
}

/// Per-subject summaries in order of first appearance in `records`.
pub fn summarize_by_subject(
    records: &[SubjectSlotRecord],
    log: &[AttendanceEntry],
) -> Vec<(Subject, AttendanceSummary)> {
    let mut summaries: Vec<(Subject, AttendanceSummary)> = Vec::new();
    for record in records {
        let subject = record.subject();
        if !summaries.iter().any(|(s, _)| s.id == subject.id) {
            summaries.push((subject.clone(), AttendanceSummary::default()));
        }
    }
    for (subject_id, status) in counted(records, log) {
        if let Some((_, summary)) = summaries.iter_mut().find(|(s, _)| s.id == subject_id) {
            summary.add(status);
        }
    }
    summaries
}
