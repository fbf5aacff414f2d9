// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::{AttendanceEntry, SubjectSlotRecord};

const ENVELOPE_KEY: &str = "classes";
const ATTENDANCE_KEY: &str = "attendance";

/// Layout of a record file on disk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    /// A bare JSON array of records.
    #[default]
    List,

    /// An object wrapping the records in `classes`, as the attendance service returns them.
    Envelope,
}

/// Content of a record file: the timetable and the attendance log.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordFile {
    /// The student's subject-slot records.
    pub records: Vec<SubjectSlotRecord>,

    /// Attendance of single sessions, kept next to the timetable in `attendance`.
    pub attendance: Vec<AttendanceEntry>,

    /// Layout the file was read in.
    pub layout: RecordLayout,
}

/// Parses a record file from JSON text.
pub fn parse_records(content: &str) -> Result<RecordFile, Box<dyn Error>> {
    let value: Value =
        serde_json::from_str(content).map_err(|e| format!("Invalid JSON in record file: {e}"))?;

    let (items, entries, layout) = match value {
        Value::Array(items) => (items, Vec::new(), RecordLayout::List),
        Value::Object(mut map) => {
            let items = match map.remove(ENVELOPE_KEY) {
                Some(Value::Array(items)) => items,
                Some(_) => return Err(format!("`{ENVELOPE_KEY}` must be an array").into()),
                None => {
                    return Err(format!("Expected an array or an object with `{ENVELOPE_KEY}`").into());
                }
            };
            let entries = match map.remove(ATTENDANCE_KEY) {
                Some(Value::Array(entries)) => entries,
                Some(Value::Null) | None => Vec::new(),
                Some(_) => return Err(format!("`{ATTENDANCE_KEY}` must be an array").into()),
            };
            (items, entries, RecordLayout::Envelope)
        }
        _ => return Err(format!("Expected an array or an object with `{ENVELOPE_KEY}`").into()),
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| format!("Invalid record #{i}: {e}, expected `day` and `timeSlot`, or `slots`"))
        })
        .collect::<Result<Vec<SubjectSlotRecord>, _>>()?;

    let attendance = entries
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item).map_err(|e| format!("Invalid attendance entry #{i}: {e}"))
        })
        .collect::<Result<Vec<AttendanceEntry>, _>>()?;

    Ok(RecordFile {
        records,
        attendance,
        layout,
    })
}

/// Formats a record file as pretty JSON.
///
/// A non-empty attendance log needs the envelope layout, whatever the file
/// was read in.
pub fn format_records(file: &RecordFile) -> Result<String, Box<dyn Error>> {
    let content = match (file.layout, file.attendance.is_empty()) {
        (RecordLayout::List, true) => serde_json::to_string_pretty(&file.records)?,
        (_, true) => serde_json::to_string_pretty(&serde_json::json!({
            ENVELOPE_KEY: file.records,
        }))?,
        (_, false) => serde_json::to_string_pretty(&serde_json::json!({
            ENVELOPE_KEY: file.records,
            ATTENDANCE_KEY: file.attendance,
        }))?,
    };
    Ok(content)
}

/// Reads a record file.
#[tracing::instrument]
pub async fn load_records(path: &Path) -> Result<RecordFile, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read record file {}: {}", path.display(), e))?;

    let file = parse_records(&content)?;
    tracing::debug!(
        count = file.records.len(),
        attendance = file.attendance.len(),
        layout = ?file.layout,
        "records loaded"
    );
    Ok(file)
}

/// Writes a record file, replacing its content.
#[tracing::instrument(skip(file))]
pub async fn save_records(path: &Path, file: &RecordFile) -> Result<(), Box<dyn Error>> {
    let content = format_records(file)?;
    fs::write(path, content)
        .await
        .map_err(|e| format!("Failed to write record file {}: {}", path.display(), e))?;

    tracing::debug!(
        count = file.records.len(),
        attendance = file.attendance.len(),
        "records saved"
    );
    Ok(())
}
