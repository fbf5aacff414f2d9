// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::Weekday;

use crate::time_slot;

/// One entry of the slot catalog: a slot code and the time range it occupies.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SlotDefinition {
    /// Institution-defined period label, e.g. `"A3"` or `"Q"`.
    pub code: String,

    /// Human-readable time range, e.g. `"09:00 - 11:55"`.
    pub time: String,
}

impl SlotDefinition {
    /// Creates a new slot definition.
    pub fn new(code: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            time: time.into(),
        }
    }

    /// The sort key of the slot's start time.
    pub fn sort_key(&self) -> u32 {
        time_slot::sort_key(&self.time)
    }
}

/// Read-only table mapping `(weekday, slot code)` to a time range.
///
/// Each weekday holds an ordered list of slot definitions. Days without
/// entries (weekends in the built-in table) have no classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotCatalog {
    /// Indexed by days from Sunday, `0` = Sunday .. `6` = Saturday.
    days: [Vec<SlotDefinition>; 7],
}

const P1: &str = "08:00 - 08:55";
const P3: &str = "10:00 - 10:55";
const P4: &str = "11:00 - 11:55";
const P5: &str = "12:00 - 12:55";
const P6: &str = "14:00 - 14:55";
const P8: &str = "16:00 - 16:55";
const TWO_HOUR: &str = "09:00 - 10:55";
const MORNING_LAB: &str = "09:00 - 11:55";
const AFTERNOON_LAB: &str = "14:00 - 16:55";

impl SlotCatalog {
    /// A catalog with no entries on any day.
    pub fn empty() -> Self {
        Self {
            days: Default::default(),
        }
    }

    /// The institution table shipped with the application.
    pub fn builtin() -> Self {
        let slots = |entries: &[(&str, &str)]| {
            entries
                .iter()
                .map(|(code, time)| SlotDefinition::new(*code, *time))
                .collect::<Vec<_>>()
        };

        Self::empty()
            .with_day(
                Weekday::Mon,
                slots(&[
                    ("A3", P1),
                    ("A2", TWO_HOUR),
                    ("C3", P3),
                    ("B3", P4),
                    ("D3", P5),
                    ("H3", P6),
                    ("Q", MORNING_LAB),
                    ("J", AFTERNOON_LAB),
                ]),
            )
            .with_day(
                Weekday::Tue,
                slots(&[
                    ("B2", TWO_HOUR),
                    ("D2", TWO_HOUR),
                    ("A3", P5),
                    ("H3", P8),
                    ("K", MORNING_LAB),
                    ("L", AFTERNOON_LAB),
                ]),
            )
            .with_day(
                Weekday::Wed,
                slots(&[
                    ("C2", TWO_HOUR),
                    ("E3", P5),
                    ("R", MORNING_LAB),
                    ("X", AFTERNOON_LAB),
                ]),
            )
            .with_day(
                Weekday::Thu,
                slots(&[
                    ("D4", P1),
                    ("E3", P4),
                    ("G3", P5),
                    ("I2", P6),
                    ("M", MORNING_LAB),
                    ("N", AFTERNOON_LAB),
                ]),
            )
            .with_day(
                Weekday::Fri,
                slots(&[
                    ("G3", P1),
                    ("E2", TWO_HOUR),
                    ("F2", P4),
                    ("V3", P6),
                    ("O", MORNING_LAB),
                    ("P", AFTERNOON_LAB),
                ]),
            )
    }

    /// Replaces the slot list of the given weekday.
    pub fn with_day(mut self, weekday: Weekday, slots: Vec<SlotDefinition>) -> Self {
        self.days[index(weekday)] = slots;
        self
    }

    /// The ordered slot definitions of a weekday, empty if it has none.
    pub fn slots_for(&self, weekday: Weekday) -> &[SlotDefinition] {
        &self.days[index(weekday)]
    }

    /// Finds the definition of `code` on the given weekday.
    pub fn find(&self, weekday: Weekday, code: &str) -> Option<&SlotDefinition> {
        let code = code.trim();
        self.slots_for(weekday).iter().find(|s| s.code == code)
    }

    /// Whether no weekday has any entry.
    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Iterates over the weekdays that have entries, Monday first.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &[SlotDefinition])> {
        use Weekday::*;
        [Mon, Tue, Wed, Thu, Fri, Sat, Sun]
            .into_iter()
            .map(|day| (day, self.slots_for(day)))
            .filter(|(_, slots)| !slots.is_empty())
    }
}

impl Default for SlotCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn index(weekday: Weekday) -> usize {
    weekday.num_days_from_sunday() as usize
}

/// On-disk shape of a catalog, one optional list per weekday.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogRaw {
    #[serde(default)]
    sun: Vec<SlotDefinition>,
    #[serde(default)]
    mon: Vec<SlotDefinition>,
    #[serde(default)]
    tue: Vec<SlotDefinition>,
    #[serde(default)]
    wed: Vec<SlotDefinition>,
    #[serde(default)]
    thu: Vec<SlotDefinition>,
    #[serde(default)]
    fri: Vec<SlotDefinition>,
    #[serde(default)]
    sat: Vec<SlotDefinition>,
}

impl<'de> serde::Deserialize<'de> for SlotCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = CatalogRaw::deserialize(deserializer)?;
        Ok(Self {
            days: [raw.sun, raw.mon, raw.tue, raw.wed, raw.thu, raw.fri, raw.sat],
        })
    }
}
