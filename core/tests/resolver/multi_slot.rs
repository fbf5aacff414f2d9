// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Subjects occupying several catalog slots on the same day.

use rollcall_core::{MultiSlotPolicy, SessionResolver, SlotCatalog};

use crate::common::{MONDAY, TUESDAY, slot_record};

#[test]
fn discrete_policy_emits_one_session_per_slot() {
    let catalog = SlotCatalog::builtin();
    let resolver = SessionResolver::new(&catalog);
    let records = vec![slot_record("lab", &["J", "Q"])];

    let sessions = resolver.resolve(&records, MONDAY);
    assert_eq!(sessions.len(), 2);
    assert!(sessions.iter().all(|s| s.subject_id == "lab"));
    assert_eq!(sessions[0].display_time, "09:00 - 11:55");
    assert_eq!(sessions[1].display_time, "14:00 - 16:55");
    assert!(sessions.iter().all(|s| !s.is_multi_slot()));
}

#[test]
fn combined_policy_emits_one_spanning_session() {
    let catalog = SlotCatalog::builtin();
    let resolver = SessionResolver::new(&catalog).with_policy(MultiSlotPolicy::Combined);
    let records = vec![slot_record("lab", &["J", "Q"]), slot_record("os", &["B3"])];

    let sessions = resolver.resolve(&records, MONDAY);
    assert_eq!(sessions.len(), 2);

    let lab = &sessions[0];
    assert_eq!(lab.subject_id, "lab");
    assert_eq!(lab.display_time, "09:00 - 16:55");
    assert_eq!(lab.sort_key, 900);
    assert!(lab.is_multi_slot());
    assert_eq!(sessions[1].subject_id, "os");
}

#[test]
fn policies_agree_on_single_slot_days() {
    let catalog = SlotCatalog::builtin();
    let records = vec![slot_record("lab", &["J", "Q", "K"])];

    let discrete = SessionResolver::new(&catalog).resolve(&records, TUESDAY);
    let combined = SessionResolver::new(&catalog)
        .with_policy(MultiSlotPolicy::Combined)
        .resolve(&records, TUESDAY);
    assert_eq!(discrete, combined);
    assert_eq!(discrete.len(), 1);
    assert_eq!(discrete[0].slot_codes, vec!["K"]);
}
