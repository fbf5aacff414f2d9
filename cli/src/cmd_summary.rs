// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error};

use clap::{ArgMatches, Command};
use colored::{Color, Colorize};
use rollcall_core::{AttendanceSummary, Schedule, Subject};

use crate::arg::CommonArgs;
use crate::table::{PaddingDirection, Table, TableColumn};
use crate::util::OutputFormat;

/// Below this percentage attendance is shown as at risk.
const WARN_PERCENTAGE: f64 = 75.0;

#[derive(Debug, Clone, Copy)]
pub struct CmdSummary {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdSummary {
    pub const NAME: &str = "summary";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show attendance counts and percentage per subject")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, schedule: &Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "summarizing attendance...");
        let overall = schedule.summary();
        let rows: Vec<SummaryRow> = schedule
            .summary_by_subject()
            .into_iter()
            .map(|(subject, summary)| SummaryRow { subject, summary })
            .collect();

        match self.output_format {
            OutputFormat::Json => {
                let subjects: Vec<_> = rows
                    .iter()
                    .map(|r| {
                        serde_json::json!({
                            "subject": r.subject,
                            "summary": r.summary,
                            "percentage": r.summary.percentage(),
                        })
                    })
                    .collect();
                let json = serde_json::json!({
                    "overall": overall,
                    "percentage": overall.percentage(),
                    "subjects": subjects,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Table if rows.is_empty() => {
                println!("{}", "No attendance records".italic());
            }
            OutputFormat::Table => {
                let columns = SummaryColumn::columns(self.verbose);
                println!("{}", Table::new(&columns, &rows).with_header(true));
                println!();
                println!(
                    "{} {}/{} classes attended, {}",
                    "Overall:".bold(),
                    overall.attended_classes,
                    overall.counted_classes(),
                    format_percentage(&overall)
                );
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
struct SummaryRow {
    subject: Subject,
    summary: AttendanceSummary,
}

#[derive(Debug, Clone, Copy)]
enum SummaryColumn {
    Code,
    Name,
    Attended,
    Absent,
    Medical,
    Cancelled,
    Unmarked,
    Percentage,
}

impl SummaryColumn {
    fn columns(verbose: bool) -> Vec<Self> {
        use SummaryColumn::*;
        match verbose {
            true => vec![
                Code, Name, Attended, Absent, Medical, Cancelled, Unmarked, Percentage,
            ],
            false => vec![Code, Name, Attended, Absent, Percentage],
        }
    }
}

impl TableColumn<SummaryRow> for SummaryColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            SummaryColumn::Code => "Code",
            SummaryColumn::Name => "Subject",
            SummaryColumn::Attended => "Present",
            SummaryColumn::Absent => "Absent",
            SummaryColumn::Medical => "Medical",
            SummaryColumn::Cancelled => "Cancelled",
            SummaryColumn::Unmarked => "Unmarked",
            SummaryColumn::Percentage => "Attendance",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a SummaryRow) -> Cow<'a, str> {
        let s = &data.summary;
        match self {
            SummaryColumn::Code => data.subject.code.as_str().into(),
            SummaryColumn::Name => data.subject.name.as_str().into(),
            SummaryColumn::Attended => s.attended_classes.to_string().into(),
            SummaryColumn::Absent => s.absent_classes.to_string().into(),
            SummaryColumn::Medical => s.medical_classes.to_string().into(),
            SummaryColumn::Cancelled => s.cancelled_classes.to_string().into(),
            SummaryColumn::Unmarked => s.unmarked_classes.to_string().into(),
            SummaryColumn::Percentage => format_percentage(s).into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            SummaryColumn::Code | SummaryColumn::Name => PaddingDirection::Left,
            _ => PaddingDirection::Right,
        }
    }

    fn get_color(&self, data: &SummaryRow) -> Option<Color> {
        match (self, data.summary.percentage()) {
            (SummaryColumn::Percentage, Some(p)) if p < WARN_PERCENTAGE => Some(Color::Red),
            (SummaryColumn::Percentage, Some(_)) => Some(Color::Green),
            _ => None,
        }
    }
}

fn format_percentage(summary: &AttendanceSummary) -> String {
    match summary.percentage() {
        Some(p) => format!("{p:.2}%"),
        None => "-".to_string(),
    }
}
