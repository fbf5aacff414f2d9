// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::ClassSession;

/// The lunch-break cutoff, as an `HHMM` sort key.
///
/// Sessions starting at or before the boundary are "morning", the rest are
/// "afternoon".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Deserialize)]
#[serde(try_from = "u32")]
pub struct LunchBoundary(u32);

impl LunchBoundary {
    /// 1:00 PM
    pub const DEFAULT: LunchBoundary = LunchBoundary(1300);

    /// Creates a boundary from an `HHMM` value, `None` if it is not a valid clock reading.
    pub fn new(hhmm: u32) -> Option<Self> {
        (hhmm / 100 < 24 && hhmm % 100 < 60).then_some(Self(hhmm))
    }

    /// The boundary as an `HHMM` sort key.
    pub fn sort_key(&self) -> u32 {
        self.0
    }
}

impl Default for LunchBoundary {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for LunchBoundary {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("invalid lunch boundary {value}, expected HHMM"))
    }
}

impl fmt::Display for LunchBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A day's sessions split around the lunch break.
#[derive(Debug, Default, Clone, PartialEq, Eq, serde::Serialize)]
pub struct DayPartition {
    /// Sessions with `sort_key <= boundary`, in their original order.
    pub morning: Vec<ClassSession>,

    /// Sessions with `sort_key > boundary`, in their original order.
    pub afternoon: Vec<ClassSession>,
}

impl DayPartition {
    /// Total number of sessions across both buckets.
    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len()
    }

    /// Whether the day has no sessions at all.
    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }

    /// Iterates over all sessions, morning first.
    pub fn iter(&self) -> impl Iterator<Item = &ClassSession> {
        self.morning.iter().chain(self.afternoon.iter())
    }
}

/// Splits sorted sessions into morning and afternoon buckets.
pub fn partition(sessions: Vec<ClassSession>, boundary: LunchBoundary) -> DayPartition {
    let (morning, afternoon) = sessions
        .into_iter()
        .partition(|s| s.sort_key <= boundary.sort_key());
    DayPartition { morning, afternoon }
}
