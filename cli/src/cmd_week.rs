// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use rollcall_core::{Schedule, WeekSpan, shift_weeks};

use crate::arg::{CommonArgs, DateArgs};
use crate::session_formatter::SessionFormatter;
use crate::util::OutputFormat;

#[derive(Debug, Clone)]
pub struct CmdWeek {
    pub date: Option<String>,
    pub span: WeekSpan,
    pub offset: i64,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdWeek {
    pub const NAME: &str = "week";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the classes of a week, Monday to Friday")
            .arg(DateArgs::date(false))
            .arg(arg!(--full "Show the full week, Sunday to Saturday"))
            .arg(
                arg!(--offset <WEEKS> "Move by whole weeks, negative for earlier weeks")
                    .value_parser(value_parser!(i64))
                    .allow_negative_numbers(true)
                    .default_value("0"),
            )
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let span = match matches.get_flag("full") {
            true => WeekSpan::Calendar,
            false => WeekSpan::School,
        };
        Self {
            date: DateArgs::get_date(matches),
            span,
            offset: matches.get_one("offset").copied().unwrap_or(0),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, schedule: &Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing week...");
        let anchor = DateArgs::resolve(self.date.as_deref(), schedule.today())?;
        let anchor = shift_weeks(anchor, self.offset)
            .ok_or_else(|| format!("Cannot move {} weeks from {anchor}", self.offset))?;

        let week = schedule.week(anchor, self.span);
        let formatter = SessionFormatter::new(SessionFormatter::columns(self.verbose))
            .with_output_format(self.output_format);
        println!("{}", formatter.format_week(&week));
        Ok(())
    }
}
