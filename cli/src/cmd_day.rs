// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::NaiveDate;
use clap::{ArgMatches, Command};
use rollcall_core::Schedule;

use crate::arg::{CommonArgs, DateArgs};
use crate::session_formatter::SessionFormatter;
use crate::util::{OutputFormat, parse_date};

#[derive(Debug, Clone, Copy)]
pub struct CmdToday {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdToday {
    pub const NAME: &str = "today";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show today's classes, split around the lunch break")
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
        tracing::debug!(?self, "showing today's classes...");
        print_day(schedule, schedule.today(), self.output_format, self.verbose);
        Ok(())
    }
}

impl Default for CmdToday {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CmdDay {
    pub date: String,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the classes of a date")
            .arg(DateArgs::date(true))
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            date: DateArgs::get_date(matches).unwrap_or_else(|| "today".to_string()),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, schedule: &Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing classes of date...");
        let date = parse_date(&self.date, schedule.today())?;
        print_day(schedule, date, self.output_format, self.verbose);
        Ok(())
    }
}

fn print_day(schedule: &Schedule, date: NaiveDate, output_format: OutputFormat, verbose: bool) {
    let plan = schedule.day(date);
    let formatter =
        SessionFormatter::new(SessionFormatter::columns(verbose)).with_output_format(output_format);
    println!("{}", formatter.format_day(&plan));
}
