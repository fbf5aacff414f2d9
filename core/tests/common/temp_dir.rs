// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary record files for integration tests.
//!
//! The directory is removed when the handle is dropped.

use std::path::PathBuf;

use tempfile::TempDir;
use tokio::fs;

/// A temporary directory holding one record file.
#[derive(Debug)]
pub struct TempRecords {
    /// Path of the record file, which may not exist yet.
    pub path: PathBuf,
    _dir: TempDir,
}

impl TempRecords {
    /// Creates the directory without writing a record file.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn empty() -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        Ok(Self {
            path: dir.path().join("classes.json"),
            _dir: dir,
        })
    }

    /// Reads the record file back.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub async fn read(&self) -> Result<String, Box<dyn std::error::Error>> {
        Ok(fs::read_to_string(&self.path).await?)
    }
}

/// Creates a temporary record file with the given content.
///
/// # Errors
///
/// Returns an error if directory creation or file writing fails.
pub async fn setup_temp_records(content: &str) -> Result<TempRecords, Box<dyn std::error::Error>> {
    let records = TempRecords::empty()?;
    fs::write(&records.path, content).await?;
    Ok(records)
}
