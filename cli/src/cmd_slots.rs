// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, error::Error};

use chrono::Weekday;
use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use rollcall_core::{Schedule, SlotCatalog, SlotDefinition};

use crate::arg::CommonArgs;
use crate::table::{Table, TableColumn};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdSlots {
    pub weekday: Option<Weekday>,
    pub output_format: OutputFormat,
}

impl CmdSlots {
    pub const NAME: &str = "slots";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the slot catalog, the time of every slot code")
            .arg(
                arg!(weekday: [WEEKDAY] "Only show the slots of this weekday")
                    .value_parser(|s: &str| s.parse::<Weekday>().map_err(|_| "invalid weekday")),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            weekday: matches.get_one("weekday").copied(),
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub async fn run(self, schedule: &Schedule) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing slot catalog...");
        let days = Self::days(&schedule.config().catalog, self.weekday);

        match self.output_format {
            OutputFormat::Json => {
                let days: Vec<_> = days
                    .iter()
                    .map(|(weekday, slots)| serde_json::json!({ "day": weekday, "slots": slots }))
                    .collect();
                println!("{}", serde_json::to_string_pretty(&days)?);
            }
            OutputFormat::Table if days.is_empty() => {
                println!("{}", "No slots defined".italic());
            }
            OutputFormat::Table => {
                let columns = [SlotColumn::Code, SlotColumn::Time];
                for (i, (weekday, slots)) in days.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!(" {} {}", "►".green(), weekday.to_string().italic());
                    println!("{}", Table::new(&columns, *slots));
                }
            }
        }
        Ok(())
    }

    fn days(catalog: &SlotCatalog, weekday: Option<Weekday>) -> Vec<(Weekday, &[SlotDefinition])> {
        match weekday {
            Some(weekday) => vec![(weekday, catalog.slots_for(weekday))],
            None => catalog.days().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SlotColumn {
    Code,
    Time,
}

impl TableColumn<SlotDefinition> for SlotColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            SlotColumn::Code => "Code",
            SlotColumn::Time => "Time",
        }
        .into()
    }

    fn format<'a>(&self, data: &'a SlotDefinition) -> Cow<'a, str> {
        match self {
            SlotColumn::Code => data.code.as_str().into(),
            SlotColumn::Time => data.time.as_str().into(),
        }
    }
}
