// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Morning and afternoon buckets around the lunch boundary.

use chrono::Weekday;
use rollcall_core::{LunchBoundary, SessionResolver, SlotCatalog, SlotDefinition, partition};

use crate::common::{MONDAY, resolved_record, slot_record};

#[test]
fn monday_end_to_end() {
    // Arrange
    let catalog = SlotCatalog::empty().with_day(
        Weekday::Mon,
        vec![
            SlotDefinition::new("A3", "08:00 AM - 08:55 AM"),
            SlotDefinition::new("B3", "11:00 AM - 11:55 AM"),
            SlotDefinition::new("H3", "2:00 PM - 2:55 PM"),
        ],
    );
    let records = vec![
        slot_record("compilers", &["H3"]),
        slot_record("networks", &["B3"]),
        slot_record("os", &["A3"]),
    ];

    // Act
    let sessions = SessionResolver::new(&catalog).resolve(&records, MONDAY);
    let day = partition(sessions, LunchBoundary::DEFAULT);

    // Assert
    let morning: Vec<_> = day.morning.iter().map(|s| s.subject_id.as_str()).collect();
    let afternoon: Vec<_> = day.afternoon.iter().map(|s| s.subject_id.as_str()).collect();
    assert_eq!(morning, vec!["os", "networks"]);
    assert_eq!(afternoon, vec!["compilers"]);
}

#[test]
fn monday_end_to_end_with_resolved_records() {
    // Arrange
    let records = vec![
        resolved_record("networks", Weekday::Mon, "11:00 AM - 11:55 AM"),
        resolved_record("os", Weekday::Mon, "08:00 AM - 08:55 AM"),
        resolved_record("compilers", Weekday::Mon, "02:00 PM - 02:55 PM"),
    ];

    // Act
    let sessions = SessionResolver::new(&SlotCatalog::empty()).resolve(&records, MONDAY);
    let keys: Vec<_> = sessions.iter().map(|s| s.sort_key).collect();
    let day = partition(sessions, LunchBoundary::DEFAULT);

    // Assert
    assert_eq!(keys, vec![800, 1100, 1400]);
    let morning: Vec<_> = day.morning.iter().map(|s| s.subject_id.as_str()).collect();
    let afternoon: Vec<_> = day.afternoon.iter().map(|s| s.subject_id.as_str()).collect();
    assert_eq!(morning, vec!["os", "networks"]);
    assert_eq!(afternoon, vec!["compilers"]);
    assert_eq!(day.afternoon[0].display_time, "02:00 PM - 02:55 PM");
}

#[test]
fn partition_covers_every_session_once() {
    let catalog = SlotCatalog::builtin();
    let records = vec![
        slot_record("os", &["A3", "C3", "B3", "D3", "H3", "J"]),
        resolved_record("talk", Weekday::Mon, "1:00 PM - 1:30 PM"),
        resolved_record("late", Weekday::Mon, "1:01 PM - 1:30 PM"),
        resolved_record("bad", Weekday::Mon, "?"),
    ];

    for hhmm in [0, 800, 1200, 1300, 2359] {
        let boundary = LunchBoundary::new(hhmm).unwrap();
        let sessions = SessionResolver::new(&catalog).resolve(&records, MONDAY);
        let total = sessions.len();
        let day = partition(sessions.clone(), boundary);

        assert_eq!(day.len(), total);
        assert!(day.morning.iter().all(|s| s.sort_key <= hhmm));
        assert!(day.afternoon.iter().all(|s| s.sort_key > hhmm));

        let rejoined: Vec<_> = day.iter().cloned().collect();
        assert_eq!(rejoined, sessions, "boundary {hhmm} broke the order");
    }
}

#[test]
fn boundary_is_inclusive_for_morning() {
    let catalog = SlotCatalog::empty();
    let records = vec![
        resolved_record("at", Weekday::Mon, "1:00 PM - 1:55 PM"),
        resolved_record("after", Weekday::Mon, "1:01 PM - 1:55 PM"),
    ];

    let sessions = SessionResolver::new(&catalog).resolve(&records, MONDAY);
    let day = partition(sessions, LunchBoundary::DEFAULT);
    assert_eq!(day.morning.len(), 1);
    assert_eq!(day.morning[0].subject_id, "at");
    assert_eq!(day.afternoon[0].subject_id, "after");
}
