// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Days, NaiveDate, Weekday};
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a date argument relative to `today`.
///
/// Accepts `YYYY-MM-DD`, `today`, `tomorrow`, `yesterday`, or a weekday name,
/// which picks that day of the Monday-based week containing `today`.
pub fn parse_date(s: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let s = s.trim();
    match s.to_lowercase().as_str() {
        "today" => return Ok(today),
        "tomorrow" => return today.succ_opt().ok_or_else(|| "Date out of range".to_string()),
        "yesterday" => return today.pred_opt().ok_or_else(|| "Date out of range".to_string()),
        _ => {}
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date)
    } else if let Ok(weekday) = s.parse::<Weekday>() {
        let monday = today.week(Weekday::Mon).first_day();
        monday
            .checked_add_days(Days::new(weekday.num_days_from_monday().into()))
            .ok_or_else(|| "Date out of range".to_string())
    } else {
        Err(format!(
            "Invalid date: {s}. Expected YYYY-MM-DD, today, tomorrow, yesterday or a weekday"
        ))
    }
}

/// Pads `s` with spaces to `width` display columns, counting wide characters twice.
pub fn pad_to_width(s: &str, width: usize, left_aligned: bool) -> String {
    let padding = " ".repeat(width.saturating_sub(s.width()));
    match left_aligned {
        true => format!("{s}{padding}"),
        false => format!("{padding}{s}"),
    }
}
