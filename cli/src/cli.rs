// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use futures::{FutureExt, future::BoxFuture};
use rollcall_core::{APP_NAME, Schedule};
use tracing_subscriber::EnvFilter;

use crate::cmd_day::{CmdDay, CmdToday};
use crate::cmd_completion::CmdCompletion;
use crate::cmd_mark::CmdMark;
use crate::cmd_slots::CmdSlots;
use crate::cmd_summary::CmdSummary;
use crate::cmd_week::CmdWeek;
use crate::config::parse_config;

/// Run the Rollcall command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Path to the record file, overriding the configured one
    pub records: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Your weekly class timetable, with attendance tracking.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to today
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/rollcall/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/rollcall/config.toml on Windows. Can also be set with ROLLCALL_CONFIG.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .arg(
                arg!(--records <PATH> "Path to the record file, overrides `core.records_path`")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath)
                    .global(true),
            )
            .subcommand(CmdToday::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdWeek::command())
            .subcommand(CmdMark::command())
            .subcommand(CmdSlots::command())
            .subcommand(CmdSummary::command())
            .subcommand(CmdCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdToday::NAME, matches)) => Today(CmdToday::from(matches)),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches)),
            Some((CmdWeek::NAME, matches)) => Week(CmdWeek::from(matches)),
            Some((CmdMark::NAME, matches)) => Mark(CmdMark::from(matches)),
            Some((CmdSlots::NAME, matches)) => Slots(CmdSlots::from(matches)),
            Some((CmdSummary::NAME, matches)) => Summary(CmdSummary::from(matches)),
            Some((CmdCompletion::NAME, matches)) => Completion(CmdCompletion::from(matches)?),
            None => Today(CmdToday::default()),
            Some((name, _)) => return Err(format!("Unknown command: {name}").into()),
        };

        // Global args are propagated to the matched subcommand
        let global = match matches.subcommand() {
            Some((_, sub)) => sub,
            None => &matches,
        };
        let config = global.get_one("config").cloned();
        let records = global.get_one("records").cloned();
        Ok(Cli {
            config,
            records,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config, self.records).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show today's classes
    Today(CmdToday),

    /// Show the classes of a date
    Day(CmdDay),

    /// Show the classes of a week
    Week(CmdWeek),

    /// Mark attendance of a session
    Mark(CmdMark),

    /// List the slot catalog
    Slots(CmdSlots),

    /// Show the attendance summary
    Summary(CmdSummary),

    /// Generate shell completion
    Completion(CmdCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(
        self,
        config: Option<PathBuf>,
        records: Option<PathBuf>,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Today(a)   => Self::run_with(config, records, |x| a.run(x).boxed()).await,
            Day(a)     => Self::run_with(config, records, |x| a.run(x).boxed()).await,
            Week(a)    => Self::run_with(config, records, |x| a.run(x).boxed()).await,
            Mark(a)    => Self::run_with(config, records, |x| a.run(x).boxed()).await,
            Slots(a)   => Self::run_with(config, records, |x| a.run(x).boxed()).await,
            Summary(a) => Self::run_with(config, records, |x| a.run(x).boxed()).await,
            Completion(a) => a.run(),
        }
    }

    async fn run_with<F>(
        config: Option<PathBuf>,
        records: Option<PathBuf>,
        f: F,
    ) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Schedule) -> BoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let mut core_config = parse_config(config).await?;
        if let Some(records) = records {
            core_config.records_path = Some(records);
        }

        let mut schedule = Schedule::new(core_config).await?;
        f(&mut schedule).await
    }
}
