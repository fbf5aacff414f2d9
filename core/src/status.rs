// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt::Display, str::FromStr};

/// Attendance status of a single class session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AttendanceStatus {
    /// No attendance has been recorded yet.
    #[default]
    Unmarked,

    /// The student attended the class.
    Present,

    /// The student missed the class.
    Absent,

    /// The student missed the class on medical leave.
    Medical,

    /// The class did not take place.
    Cancelled,
}

const STATUS_UNMARKED: &str = "UNMARKED";
const STATUS_PRESENT: &str = "PRESENT";
const STATUS_ABSENT: &str = "ABSENT";
const STATUS_MEDICAL: &str = "MEDICAL";
const STATUS_CANCELLED: &str = "CANCELLED";

impl AttendanceStatus {
    /// All statuses a session can be marked with, in the order the action bar shows them.
    pub const MARKABLE: [AttendanceStatus; 4] = [
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Medical,
        AttendanceStatus::Cancelled,
    ];

    /// Whether the status has been recorded.
    pub fn is_marked(&self) -> bool {
        !matches!(self, AttendanceStatus::Unmarked)
    }
}

impl AsRef<str> for AttendanceStatus {
    fn as_ref(&self) -> &str {
        match self {
            AttendanceStatus::Unmarked => STATUS_UNMARKED,
            AttendanceStatus::Present => STATUS_PRESENT,
            AttendanceStatus::Absent => STATUS_ABSENT,
            AttendanceStatus::Medical => STATUS_MEDICAL,
            AttendanceStatus::Cancelled => STATUS_CANCELLED,
        }
    }
}

impl Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            STATUS_UNMARKED => Ok(AttendanceStatus::Unmarked),
            STATUS_PRESENT => Ok(AttendanceStatus::Present),
            STATUS_ABSENT => Ok(AttendanceStatus::Absent),
            STATUS_MEDICAL => Ok(AttendanceStatus::Medical),
            STATUS_CANCELLED => Ok(AttendanceStatus::Cancelled),
            _ => Err(format!("unknown attendance status: {value}")),
        }
    }
}

impl serde::Serialize for AttendanceStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_ref())
    }
}

impl<'de> serde::Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
