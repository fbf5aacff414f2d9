// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, Weekday};

use crate::catalog::{SlotCatalog, SlotDefinition};
use crate::record::{ResolvedRecord, SlotCodeRecord, Subject};
use crate::time_slot::{self, TimeRange};
use crate::{AttendanceStatus, ClassSession, SubjectSlotRecord};

/// Location shown for subjects that have none.
pub const DEFAULT_LOCATION: &str = "TBA";

/// How a subject claiming several catalog slots on one day is emitted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum MultiSlotPolicy {
    /// One session per matched slot, all sharing the subject id.
    #[default]
    Discrete,

    /// A single session spanning every matched slot of the day.
    Combined,
}

/// Resolves subject-slot records into the ordered sessions of a date.
///
/// Resolution is pure: the same records and date always produce the same
/// sessions, and no input makes it fail. Unknown slot codes are dropped,
/// malformed time strings sort first, and days without catalog entries
/// produce no slot-code sessions.
#[derive(Debug, Clone)]
pub struct SessionResolver<'a> {
    catalog: &'a SlotCatalog,
    policy: MultiSlotPolicy,
    default_location: String,
}

impl<'a> SessionResolver<'a> {
    /// Creates a resolver over the given catalog with the default policy.
    pub fn new(catalog: &'a SlotCatalog) -> Self {
        Self {
            catalog,
            policy: MultiSlotPolicy::default(),
            default_location: DEFAULT_LOCATION.to_string(),
        }
    }

    /// Sets the multi-slot policy.
    pub fn with_policy(mut self, policy: MultiSlotPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the placeholder used when a subject has no location.
    pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
        self.default_location = location.into();
        self
    }

    /// The sessions of `date`, sorted by start time.
    ///
    /// Pre-resolved records yield exactly one session each. Slot-code records
    /// are looked up in the catalog for the weekday of `date`. Sessions with
    /// equal start times keep their input order.
    pub fn resolve(&self, records: &[SubjectSlotRecord], date: NaiveDate) -> Vec<ClassSession> {
        let weekday = date.weekday();
        let mut sessions = Vec::with_capacity(records.len());
        for record in records {
            match record {
                SubjectSlotRecord::Resolved(r) => sessions.push(self.resolve_preresolved(r)),
                SubjectSlotRecord::SlotCodes(r) => {
                    self.resolve_slot_codes(r, weekday, &mut sessions)
                }
            }
        }

        // stable, ties keep input order
        sessions.sort_by_key(|s| s.sort_key);

        tracing::debug!(%date, %weekday, count = sessions.len(), "resolved sessions");
        sessions
    }

    fn resolve_preresolved(&self, record: &ResolvedRecord) -> ClassSession {
        ClassSession {
            display_time: record.time_slot.clone(),
            sort_key: time_slot::sort_key(&record.time_slot),
            ..self.session(
                &record.subject,
                record.day,
                &record.attendance_id,
                record.status,
            )
        }
    }

    fn resolve_slot_codes(
        &self,
        record: &SlotCodeRecord,
        weekday: Weekday,
        sessions: &mut Vec<ClassSession>,
    ) {
        let mut matched: Vec<&SlotDefinition> = Vec::with_capacity(record.slot_codes.len());
        for code in &record.slot_codes {
            match self.catalog.find(weekday, code) {
                Some(def) if !matched.iter().any(|m| m.code == def.code) => matched.push(def),
                Some(_) => {} // listed twice
                None => tracing::trace!(code, %weekday, "slot code not scheduled on this day"),
            }
        }

        let base = || {
            self.session(
                &record.subject,
                weekday,
                &record.attendance_id,
                record.status,
            )
        };

        match (self.policy, matched.as_slice()) {
            (_, []) => {}
            (MultiSlotPolicy::Combined, [_, _, ..]) => {
                let (display_time, sort_key) = combine(&matched);
                sessions.push(ClassSession {
                    display_time,
                    sort_key,
                    slot_codes: matched.iter().map(|d| d.code.clone()).collect(),
                    ..base()
                });
            }
            (_, _) => sessions.extend(matched.iter().map(|def| ClassSession {
                display_time: def.time.clone(),
                sort_key: def.sort_key(),
                slot_codes: vec![def.code.clone()],
                ..base()
            })),
        }
    }

    fn session(
        &self,
        subject: &Subject,
        day: Weekday,
        attendance_id: &Option<String>,
        status: AttendanceStatus,
    ) -> ClassSession {
        ClassSession {
            subject_id: subject.id.clone(),
            subject_name: subject.name.clone(),
            subject_code: subject.code.clone(),
            professor: subject.professor.clone(),
            location: subject
                .location
                .clone()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| self.default_location.clone()),
            semester: subject.semester,
            day,
            display_time: String::new(),
            sort_key: 0,
            slot_codes: Vec::new(),
            attendance_id: attendance_id.clone(),
            status,
        }
    }
}

/// Spans several slots: from the earliest start to the latest end.
fn combine(slots: &[&SlotDefinition]) -> (String, u32) {
    let Some(first) = slots.iter().min_by_key(|d| d.sort_key()) else {
        return (String::new(), 0);
    };
    let last = slots
        .iter()
        .filter_map(|d| TimeRange::parse(&d.time).map(|r| (r.end, d)))
        .max_by_key(|(end, _)| *end)
        .map(|(_, d)| d)
        .unwrap_or(first);

    let display_time = match (
        time_slot::split_range(&first.time),
        time_slot::split_range(&last.time),
    ) {
        (Some((start, _)), Some((_, end))) => format!("{start} - {end}"),
        _ => first.time.clone(),
    };
    (display_time, first.sort_key())
}
