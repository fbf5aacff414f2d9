// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use chrono::{DateTime, Datelike, Local, NaiveDate, Weekday};

use crate::io::{self, RecordFile, RecordLayout};
use crate::mark::apply_attendance;
use crate::summary::{summarize, summarize_by_subject};
use crate::{
    AttendanceEntry, AttendanceMark, AttendanceStatus, AttendanceSummary, ClassSession, Config,
    DayPartition, LunchBoundary, SessionResolver, Subject, SubjectSlotRecord, WeekSpan, apply_mark,
    partition,
};

/// The resolved timetable of a single date.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// The calendar date.
    pub date: NaiveDate,

    /// Weekday of the date.
    pub weekday: Weekday,

    /// The lunch boundary the sessions were split at.
    #[serde(serialize_with = "serialize_boundary")]
    pub lunch_boundary: LunchBoundary,

    /// Sessions of the day, split into morning and afternoon.
    #[serde(flatten)]
    pub sessions: DayPartition,
}

fn serialize_boundary<S: serde::Serializer>(b: &LunchBoundary, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&b.to_string())
}

/// Rollcall schedule core: configuration, catalog, the student's records and
/// the attendance log.
#[derive(Debug, Clone)]
pub struct Schedule {
    now: DateTime<Local>,
    config: Config,
    records: Vec<SubjectSlotRecord>,
    attendance: Vec<AttendanceEntry>,
    layout: RecordLayout,
}

impl Schedule {
    /// Creates a schedule, loading records from the configured file if any.
    ///
    /// A configured path that does not exist yields an empty record set.
    pub async fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let file = match &config.records_path {
            Some(path) if path.exists() => io::load_records(path).await?,
            Some(path) => {
                tracing::warn!(path = %path.display(), "records_path does not exist, starting empty");
                RecordFile::default()
            }
            None => {
                tracing::info!("records_path not configured, starting empty");
                RecordFile::default()
            }
        };

        let mut schedule = Self::with_records(config, file.records);
        schedule.attendance = file.attendance;
        schedule.layout = file.layout;
        Ok(schedule)
    }

    /// Creates a schedule over in-memory records.
    pub fn with_records(config: Config, records: Vec<SubjectSlotRecord>) -> Self {
        Self {
            now: Local::now(),
            config,
            records,
            attendance: Vec::new(),
            layout: RecordLayout::default(),
        }
    }

    /// The current time in the schedule.
    pub fn now(&self) -> DateTime<Local> {
        self.now
    }

    /// Today's date in the local timezone.
    pub fn today(&self) -> NaiveDate {
        self.now.date_naive()
    }

    /// The configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The student's subject-slot records.
    pub fn records(&self) -> &[SubjectSlotRecord] {
        &self.records
    }

    /// Attendance recorded for single sessions, one entry per session and date.
    pub fn attendance(&self) -> &[AttendanceEntry] {
        &self.attendance
    }

    /// A resolver configured from this schedule's settings.
    pub fn resolver(&self) -> SessionResolver<'_> {
        SessionResolver::new(&self.config.catalog)
            .with_policy(self.config.multi_slot)
            .with_default_location(self.config.default_location.clone())
    }

    /// The sorted sessions of `date`, with the attendance recorded for that date.
    ///
    /// The record file holds the whole timetable, so pre-resolved records of
    /// other weekdays are left out before resolving.
    pub fn sessions(&self, date: NaiveDate) -> Vec<ClassSession> {
        let weekday = date.weekday();
        let records: Vec<SubjectSlotRecord> = self
            .records
            .iter()
            .filter(|r| match r {
                SubjectSlotRecord::Resolved(r) => r.day == weekday,
                SubjectSlotRecord::SlotCodes(_) => true,
            })
            .cloned()
            .collect();
        let mut sessions = self.resolver().resolve(&records, date);
        apply_attendance(&mut sessions, &self.attendance, date);
        sessions
    }

    /// The sessions of `date`, split around the lunch break.
    pub fn day(&self, date: NaiveDate) -> DayPlan {
        let lunch_boundary = self.config.lunch_boundary;
        DayPlan {
            date,
            weekday: date.weekday(),
            lunch_boundary,
            sessions: partition(self.sessions(date), lunch_boundary),
        }
    }

    /// The day plans of the week containing `anchor`.
    pub fn week(&self, anchor: NaiveDate, span: WeekSpan) -> Vec<DayPlan> {
        span.dates(anchor).into_iter().map(|d| self.day(d)).collect()
    }

    /// Finds the session of a subject on `date`.
    ///
    /// `time_slot` picks among several sessions of the same subject, matching
    /// either the display time or one of the slot codes.
    pub fn find_session(
        &self,
        date: NaiveDate,
        subject_id: &str,
        time_slot: Option<&str>,
    ) -> Result<ClassSession, Box<dyn Error>> {
        let mut candidates: Vec<ClassSession> = self
            .sessions(date)
            .into_iter()
            .filter(|s| s.subject_id == subject_id)
            .filter(|s| match time_slot {
                Some(t) => s.display_time.trim() == t.trim() || s.slot_codes.iter().any(|c| c == t),
                None => true,
            })
            .collect();

        match candidates.len() {
            0 => Err(format!("No session of subject {subject_id} on {date}").into()),
            1 => Ok(candidates.remove(0)),
            n => Err(format!(
                "Subject {subject_id} has {n} sessions on {date}, specify the time slot"
            )
            .into()),
        }
    }

    /// Records the attendance of one session on its date.
    ///
    /// The mark must name a session of `mark.date`; other dates and the other
    /// sessions of the subject are left untouched.
    pub fn mark(&mut self, mark: &AttendanceMark) -> Result<&AttendanceEntry, Box<dyn Error>> {
        let session = self.find_session(mark.date, &mark.subject_id, Some(&mark.time_slot))?;
        Ok(apply_mark(&mut self.attendance, mark, session.attendance_id.as_deref()))
    }

    /// Marks the session of a subject on `date` and returns the request sent.
    pub fn mark_session(
        &mut self,
        date: NaiveDate,
        subject_id: &str,
        time_slot: Option<&str>,
        status: AttendanceStatus,
    ) -> Result<AttendanceMark, Box<dyn Error>> {
        let session = self.find_session(date, subject_id, time_slot)?;
        let mark = session.mark(status, date);
        self.mark(&mark)?;
        Ok(mark)
    }

    /// Writes the records back to the configured file.
    pub async fn save(&self) -> Result<PathBuf, Box<dyn Error>> {
        let path = self
            .config
            .records_path
            .clone()
            .ok_or("records_path is not configured")?;
        let file = RecordFile {
            records: self.records.clone(),
            attendance: self.attendance.clone(),
            layout: self.layout,
        };
        io::save_records(&path, &file).await?;
        Ok(path)
    }

    /// Attendance counts over all recorded sessions.
    pub fn summary(&self) -> AttendanceSummary {
        summarize(&self.records, &self.attendance)
    }

    /// Attendance counts per subject.
    pub fn summary_by_subject(&self) -> Vec<(Subject, AttendanceSummary)> {
        summarize_by_subject(&self.records, &self.attendance)
    }
}
