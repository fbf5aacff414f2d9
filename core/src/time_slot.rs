// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Parsing of human-readable time ranges such as `"10:00 AM - 10:55 AM"`.
//!
//! Three clock notations show up in timetable data:
//! - 12-hour with a meridiem: `"2:00 PM"`, `"12:00 AM"`;
//! - 24-hour: `"14:00"`, `"08:00"`;
//! - the compact server labels: `"5PM"`, `"11AM"`, optionally prefixed with a
//!   day as in `"THURSDAY_5PM-6PM"`.

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveTime, Timelike};
use regex::Regex;

static CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(\d{1,2})(?::(\d{2}))?\s*([ap])\.?m\.?$").expect("clock regex must compile")
});

static CLOCK_24H: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("24h clock regex must compile"));

/// Parses a single clock reading like `"2:00 PM"`, `"14:00"` or `"5PM"`.
pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    if let Some(caps) = CLOCK.captures(s) {
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = match caps.get(2) {
            Some(m) => m.as_str().parse().ok()?,
            None => 0,
        };
        if !(1..=12).contains(&hour) {
            return None;
        }

        let pm = caps[3].eq_ignore_ascii_case("p");
        let hour = match (hour, pm) {
            (12, false) => 0,
            (12, true) => 12,
            (h, false) => h,
            (h, true) => h + 12,
        };
        NaiveTime::from_hms_opt(hour, minute, 0)
    } else if let Some(caps) = CLOCK_24H.captures(s) {
        // No meridiem, take the reading as-is
        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;
        NaiveTime::from_hms_opt(hour, minute, 0)
    } else {
        None
    }
}

/// Splits `"<start> - <end>"` into its trimmed halves.
///
/// A leading day label (`"THURSDAY_5PM-6PM"`) is skipped.
pub fn split_range(s: &str) -> Option<(&str, &str)> {
    let s = match s.split_once('_') {
        Some((_day, rest)) => rest,
        None => s,
    };
    let (start, end) = s.split_once('-')?;
    let (start, end) = (start.trim(), end.trim());
    (!start.is_empty() && !end.is_empty()).then_some((start, end))
}

/// The `HHMM` integer for the given time, e.g. `1400` for 2:00 PM.
pub fn clock_key(time: NaiveTime) -> u32 {
    time.hour() * 100 + time.minute()
}

/// Computes the sort key of a time range from its start time.
///
/// Malformed or empty input yields `0`, so a bad record sorts first instead of
/// failing the whole day.
pub fn sort_key(time_range: &str) -> u32 {
    let start = match split_range(time_range) {
        Some((start, _)) => start,
        None => time_range,
    };

    match parse_clock(start) {
        Some(time) => clock_key(time),
        None => {
            tracing::debug!(time_range, "unparseable time range, sorting it first");
            0
        }
    }
}

/// A parsed time range with both ends known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    /// When the session starts.
    pub start: NaiveTime,

    /// When the session ends.
    pub end: NaiveTime,
}

impl TimeRange {
    /// Parses `"<start> - <end>"`, returning `None` if either end is malformed.
    pub fn parse(s: &str) -> Option<Self> {
        let (start, end) = split_range(s)?;
        Some(Self {
            start: parse_clock(start)?,
            end: parse_clock(end)?,
        })
    }

    /// The sort key of the start time.
    pub fn sort_key(&self) -> u32 {
        clock_key(self.start)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%I:%M %p"),
            self.end.format("%I:%M %p")
        )
    }
}
