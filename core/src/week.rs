// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, TimeDelta, Weekday};

/// Which days make up a displayed week.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WeekSpan {
    /// Monday to Friday, the teaching week.
    #[default]
    School,

    /// Sunday to Saturday, the full calendar strip.
    Calendar,
}

impl WeekSpan {
    /// The dates of the week containing `date`.
    ///
    /// For [`WeekSpan::School`] a Sunday belongs to the week that ended the
    /// day before, so it maps back to the preceding Monday.
    pub fn dates(self, date: NaiveDate) -> Vec<NaiveDate> {
        let (start, len) = match self {
            WeekSpan::School => (Weekday::Mon, 5),
            WeekSpan::Calendar => (Weekday::Sun, 7),
        };
        date.week(start).first_day().iter_days().take(len).collect()
    }
}

/// Moves `date` by whole weeks, `None` when out of the representable range.
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_weeks(weeks)?)
}
