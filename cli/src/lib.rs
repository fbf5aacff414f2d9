// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod cli;
mod cmd_completion;
mod cmd_day;
mod cmd_mark;
mod cmd_slots;
mod cmd_summary;
mod cmd_week;
mod config;
mod session_formatter;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
