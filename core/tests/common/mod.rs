// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Record factories (fixtures)
//! - Temporary record files with auto-cleanup

mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use fixtures::{
    FRIDAY, MONDAY, SATURDAY, SUNDAY, TUESDAY, WEDNESDAY, resolved_record, sample_records_json,
    slot_record, subject,
};
#[allow(unused_imports)]
pub use temp_dir::{TempRecords, setup_temp_records};
