// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use rollcall_core::{AttendanceMark, AttendanceStatus, Schedule};

use crate::arg::{CommonArgs, DateArgs, MarkArgs};
use crate::session_formatter::{format_status, status_color};
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdMark {
    pub subject_id: String,
    pub status: AttendanceStatus,
    pub date: Option<String>,
    pub time_slot: Option<String>,
    pub dry_run: bool,
    pub output_format: OutputFormat,
}

impl CmdMark {
    pub const NAME: &str = "mark";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Record the attendance of a class session")
            .arg(MarkArgs::subject_id())
            .arg(MarkArgs::status())
            .arg(DateArgs::date_flag())
            .arg(MarkArgs::time_slot())
            .arg(MarkArgs::dry_run())
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            subject_id: MarkArgs::get_subject_id(matches),
            status: MarkArgs::get_status(matches),
            date: DateArgs::get_date(matches),
            time_slot: MarkArgs::get_time_slot(matches),
            dry_run: MarkArgs::get_dry_run(matches),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, schedule: &mut Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "marking attendance...");
        let date = DateArgs::resolve(self.date.as_deref(), schedule.today())?;
        let time_slot = self.time_slot.as_deref();

        let mark = if self.dry_run {
            let session = schedule.find_session(date, &self.subject_id, time_slot)?;
            session.mark(self.status, date)
        } else {
            let mark = schedule.mark_session(date, &self.subject_id, time_slot, self.status)?;
            let path = schedule.save().await?;
            tracing::info!(path = %path.display(), "record file updated");
            mark
        };

        print_mark(&mark, self.output_format, self.dry_run)
    }
}

fn print_mark(
    mark: &AttendanceMark,
    output_format: OutputFormat,
    dry_run: bool,
) -> Result<(), Box<dyn Error>> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(mark)?),
        OutputFormat::Table => {
            let marker = format_status(mark.status);
            let marker = match status_color(mark.status) {
                Some(color) => marker.color(color).to_string(),
                None => marker.to_string(),
            };
            let verb = match dry_run {
                true => "Would mark".yellow(),
                false => "Marked".green(),
            };
            println!(
                "{verb} {marker} #{} {} {} {} as {}",
                mark.subject_id, mark.day, mark.date, mark.time_slot, mark.status
            );
        }
    }
    Ok(())
}
