// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;
use clap::{Arg, ArgMatches, arg, value_parser};
use rollcall_core::AttendanceStatus;

use crate::util::{OutputFormat, parse_date};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DateArgs;

impl DateArgs {
    pub fn date(required: bool) -> Arg {
        let arg = arg!(date: <DATE>)
            .help("Date as YYYY-MM-DD, today, tomorrow, yesterday or a weekday name");
        match required {
            true => arg,
            false => arg.required(false),
        }
    }

    pub fn date_flag() -> Arg {
        arg!(-d --date <DATE> "Date of the session, defaults to today")
    }

    /// The raw date argument; resolved against the schedule's today when run.
    pub fn get_date(matches: &ArgMatches) -> Option<String> {
        matches.get_one("date").cloned()
    }

    /// Resolves an optional raw date, falling back to `today`.
    pub fn resolve(date: Option<&str>, today: NaiveDate) -> Result<NaiveDate, String> {
        match date {
            Some(date) => parse_date(date, today),
            None => Ok(today),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MarkArgs;

impl MarkArgs {
    pub fn subject_id() -> Arg {
        arg!(subject_id: <SUBJECT_ID> "Identifier of the subject to mark")
    }

    pub fn get_subject_id(matches: &ArgMatches) -> String {
        matches
            .get_one::<String>("subject_id")
            .expect("subject id is required")
            .clone()
    }

    pub fn status() -> Arg {
        arg!(status: <STATUS> "Attendance status to record")
            .value_parser(value_parser!(AttendanceStatus))
    }

    pub fn get_status(matches: &ArgMatches) -> AttendanceStatus {
        matches
            .get_one("status")
            .copied()
            .expect("status is required")
    }

    pub fn time_slot() -> Arg {
        arg!(-t --"time-slot" <TIME_SLOT> "Time range or slot code, when the subject meets more than once that day")
    }

    pub fn get_time_slot(matches: &ArgMatches) -> Option<String> {
        matches.get_one("time-slot").cloned()
    }

    pub fn dry_run() -> Arg {
        arg!(--"dry-run" "Print the request without changing the record file")
    }

    pub fn get_dry_run(matches: &ArgMatches) -> bool {
        matches.get_flag("dry-run")
    }
}
