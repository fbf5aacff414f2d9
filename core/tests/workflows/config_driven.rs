// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.

use chrono::Weekday;
use rollcall_core::{Config, LunchBoundary, MultiSlotPolicy, Schedule};

use crate::common::{MONDAY, TUESDAY, sample_records_json, setup_temp_records};

fn config_from_toml(toml: &str) -> Config {
    toml::from_str(toml).unwrap()
}

#[tokio::test]
async fn config_records_path_is_loaded() {
    // Arrange
    let records = setup_temp_records(sample_records_json()).await.unwrap();
    let config = Config {
        records_path: Some(records.path.clone()),
        ..Default::default()
    };

    // Act
    let schedule = Schedule::new(config).await.unwrap();

    // Assert
    assert_eq!(schedule.records().len(), 3);
    let plan = schedule.day(MONDAY);
    let morning: Vec<_> = plan
        .sessions
        .morning
        .iter()
        .map(|s| (s.subject_id.as_str(), s.display_time.as_str()))
        .collect();
    assert_eq!(
        morning,
        vec![
            ("os", "08:00 - 08:55"),
            ("lab", "09:00 - 11:55"),
            ("os", "10:00 - 10:55"),
        ]
    );
    assert_eq!(plan.sessions.afternoon.len(), 2);
    assert_eq!(plan.sessions.morning[0].location, "NR-121");
}

#[tokio::test]
async fn config_combined_policy_and_boundary() {
    let records = setup_temp_records(sample_records_json()).await.unwrap();
    let mut config = config_from_toml(
        r#"
lunch_boundary = 900
multi_slot = "combined"
default_location = "Online"
"#,
    );
    config.records_path = Some(records.path.clone());
    assert_eq!(config.multi_slot, MultiSlotPolicy::Combined);

    let schedule = Schedule::new(config).await.unwrap();
    let plan = schedule.day(MONDAY);

    assert_eq!(plan.lunch_boundary, LunchBoundary::new(900).unwrap());
    let lab = plan.sessions.iter().find(|s| s.subject_id == "lab").unwrap();
    assert_eq!(lab.display_time, "09:00 - 16:55");
    assert_eq!(lab.location, "Online");

    let morning: Vec<_> = plan.sessions.morning.iter().map(|s| s.sort_key).collect();
    assert_eq!(morning, vec![800, 900]);
}

#[tokio::test]
async fn config_catalog_replaces_builtin_table() {
    let records = setup_temp_records(sample_records_json()).await.unwrap();
    let mut config = config_from_toml(
        r#"
[catalog]
tue = [{ code = "A3", time = "3:00 PM - 3:55 PM" }]
"#,
    );
    config.records_path = Some(records.path.clone());

    let schedule = Schedule::new(config).await.unwrap();
    assert!(schedule.config().catalog.slots_for(Weekday::Mon).is_empty());

    let monday = schedule.sessions(MONDAY);
    assert_eq!(monday.len(), 1, "only the pre-resolved record remains");
    assert_eq!(monday[0].subject_id, "dbms");

    let tuesday = schedule.sessions(TUESDAY);
    assert_eq!(tuesday.len(), 1);
    assert_eq!(tuesday[0].display_time, "3:00 PM - 3:55 PM");
}

#[tokio::test]
async fn config_invalid_records_file_fails() {
    let records = setup_temp_records(r#"{ "classes": [{ "id": "x" }] }"#)
        .await
        .unwrap();
    let config = Config {
        records_path: Some(records.path.clone()),
        ..Default::default()
    };

    let err = Schedule::new(config).await.unwrap_err();
    assert!(err.to_string().contains("Invalid record #0"), "{err}");
}

#[test]
fn config_rejects_invalid_boundary() {
    assert!(toml::from_str::<Config>("lunch_boundary = 1375").is_err());
    assert!(toml::from_str::<Config>("lunch_boundary = 2400").is_err());
}

#[test]
fn config_rejects_unknown_catalog_day() {
    let result = toml::from_str::<Config>(
        r#"
[catalog]
funday = []
"#,
    );
    assert!(result.is_err());
}
