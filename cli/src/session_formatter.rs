// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::{Color, Colorize};
use rollcall_core::{AttendanceStatus, ClassSession, DayPlan};

use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::OutputFormat;

#[derive(Debug)]
pub struct SessionFormatter {
    columns: Vec<SessionColumn>,
    format: OutputFormat,
}

impl SessionFormatter {
    pub fn new(columns: Vec<SessionColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// The default columns, with identifiers and slot codes when `verbose`.
    pub fn columns(verbose: bool) -> Vec<SessionColumn> {
        match verbose {
            true => vec![
                SessionColumn::Status,
                SessionColumn::Time,
                SessionColumn::SubjectId,
                SessionColumn::Code,
                SessionColumn::Name,
                SessionColumn::Professor,
                SessionColumn::Location,
                SessionColumn::Slots,
            ],
            false => vec![
                SessionColumn::Status,
                SessionColumn::Time,
                SessionColumn::Code,
                SessionColumn::Name,
                SessionColumn::Location,
            ],
        }
    }

    pub fn format_day<'a>(&'a self, plan: &'a DayPlan) -> DayDisplay<'a> {
        DayDisplay {
            plan,
            formatter: self,
        }
    }

    pub fn format_week<'a>(&'a self, plans: &'a [DayPlan]) -> WeekDisplay<'a> {
        WeekDisplay {
            plans,
            formatter: self,
        }
    }

    fn write_day(&self, f: &mut fmt::Formatter<'_>, plan: &DayPlan) -> fmt::Result {
        let header = format!("{} {}", plan.weekday, plan.date.format("%Y-%m-%d"));
        writeln!(f, "🗓️ {}", header.bold())?;

        if plan.sessions.is_empty() {
            return write!(f, "{}", "No classes".italic());
        }

        // Pad both halves alike so the columns line up across the lunch break
        let all: Vec<ClassSession> = plan.sessions.iter().cloned().collect();
        let widths = Table::new(&self.columns, &all).column_widths();

        let mut first = true;
        for (title, sessions) in [
            ("Morning", &plan.sessions.morning),
            ("Afternoon", &plan.sessions.afternoon),
        ] {
            if sessions.is_empty() {
                continue;
            }
            if !first {
                writeln!(f)?;
                let lunch = format!("── Lunch break after {} ──", plan.lunch_boundary);
                writeln!(f, "{}", lunch.dimmed())?;
            }

            writeln!(f, " {} {}", "►".green(), title.italic())?;
            let table = Table::new(&self.columns, sessions).with_widths(widths.clone());
            write!(f, "{table}")?;
            first = false;
        }
        Ok(())
    }

    fn write_json<T: serde::Serialize + ?Sized>(
        f: &mut fmt::Formatter<'_>,
        value: &T,
    ) -> fmt::Result {
        let json = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
        write!(f, "{json}")
    }
}

#[derive(Debug)]
pub struct DayDisplay<'a> {
    plan: &'a DayPlan,
    formatter: &'a SessionFormatter,
}

impl fmt::Display for DayDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => SessionFormatter::write_json(f, self.plan),
            OutputFormat::Table => self.formatter.write_day(f, self.plan),
        }
    }
}

#[derive(Debug)]
pub struct WeekDisplay<'a> {
    plans: &'a [DayPlan],
    formatter: &'a SessionFormatter,
}

impl fmt::Display for WeekDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => SessionFormatter::write_json(f, self.plans),
            OutputFormat::Table => {
                for (i, plan) in self.plans.iter().enumerate() {
                    if i > 0 {
                        write!(f, "\n\n")?;
                    }
                    self.formatter.write_day(f, plan)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionColumn {
    Status,
    Time,
    SubjectId,
    Code,
    Name,
    Professor,
    Location,
    Slots,
}

impl TableColumn<ClassSession> for SessionColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            SessionColumn::Status => "Status",
            SessionColumn::Time => "Time",
            SessionColumn::SubjectId => "Subject ID",
            SessionColumn::Code => "Code",
            SessionColumn::Name => "Subject",
            SessionColumn::Professor => "Professor",
            SessionColumn::Location => "Location",
            SessionColumn::Slots => "Slots",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a ClassSession) -> Cow<'a, str> {
        match self {
            SessionColumn::Status => format_status(data.status).into(),
            SessionColumn::Time => data.display_time.as_str().into(),
            SessionColumn::SubjectId => format!("#{}", data.subject_id).into(),
            SessionColumn::Code => data.subject_code.as_str().into(),
            SessionColumn::Name => match data.is_multi_slot() {
                true => format!("{} (double slot)", data.subject_name).into(),
                false => data.subject_name.as_str().into(),
            },
            SessionColumn::Professor => data.professor.as_deref().unwrap_or("").into(),
            SessionColumn::Location => data.location.as_str().into(),
            SessionColumn::Slots => data.slot_codes.join(",").into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            SessionColumn::SubjectId => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, data: &ClassSession) -> Option<Color> {
        match self {
            SessionColumn::Status => status_color(data.status),
            _ if data.status == AttendanceStatus::Cancelled => Some(Color::BrightBlack),
            _ => None,
        }
    }
}

/// A compact marker for the status column.
pub fn format_status(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Unmarked => "[ ]",
        AttendanceStatus::Present => "[P]",
        AttendanceStatus::Absent => "[A]",
        AttendanceStatus::Medical => "[M]",
        AttendanceStatus::Cancelled => "[C]",
    }
}

pub fn status_color(status: AttendanceStatus) -> Option<Color> {
    match status {
        AttendanceStatus::Unmarked => None,
        AttendanceStatus::Present => Some(Color::Green),
        AttendanceStatus::Absent => Some(Color::Red),
        AttendanceStatus::Medical => Some(Color::Yellow),
        AttendanceStatus::Cancelled => Some(Color::BrightBlack),
    }
}
