// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Sort keys derived from display time strings.

use rollcall_core::time_slot::sort_key;

#[test]
fn twelve_hour_ranges() {
    assert_eq!(sort_key("10:00 AM - 10:55 AM"), 1000);
    assert_eq!(sort_key("2:00 PM - 2:55 PM"), 1400);
    assert_eq!(sort_key("12:00 PM - 12:55 PM"), 1200);
    assert_eq!(sort_key("12:00 AM - 12:55 AM"), 0);
    assert_eq!(sort_key("12:30 AM - 1:00 AM"), 30);
}

#[test]
fn twenty_four_hour_ranges() {
    assert_eq!(sort_key("08:00 - 08:55"), 800);
    assert_eq!(sort_key("14:00 - 16:55"), 1400);
}

#[test]
fn compact_and_prefixed_ranges() {
    assert_eq!(sort_key("5PM - 6PM"), 1700);
    assert_eq!(sort_key("MON_2:00 PM - 4:55 PM"), 1400);
}

#[test]
fn malformed_input_sorts_first() {
    assert_eq!(sort_key(""), 0);
    assert_eq!(sort_key("TBA"), 0);
    assert_eq!(sort_key("25:00 - 26:00"), 0);
    assert_eq!(sort_key("13:00 PM - 2:00 PM"), 0);
}
