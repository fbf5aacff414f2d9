// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Schedule engine for Rollcall: turns a student's subject-slot records into
//! the day's sorted class sessions, split around the lunch break.

mod catalog;
mod config;
mod io;
mod mark;
mod partition;
mod record;
mod resolver;
mod schedule;
mod session;
mod status;
mod summary;
pub mod time_slot;
mod week;

pub use crate::catalog::{SlotCatalog, SlotDefinition};
pub use crate::config::{APP_NAME, Config};
pub use crate::io::{
    RecordFile, RecordLayout, format_records, load_records, parse_records, save_records,
};
pub use crate::mark::{AttendanceEntry, AttendanceMark, apply_attendance, apply_mark};
pub use crate::partition::{DayPartition, LunchBoundary, partition};
pub use crate::record::{ResolvedRecord, SlotCodeRecord, Subject, SubjectSlotRecord};
pub use crate::resolver::{DEFAULT_LOCATION, MultiSlotPolicy, SessionResolver};
pub use crate::schedule::{DayPlan, Schedule};
pub use crate::session::ClassSession;
pub use crate::status::AttendanceStatus;
pub use crate::summary::{AttendanceSummary, summarize, summarize_by_subject};
pub use crate::week::{WeekSpan, shift_weeks};
