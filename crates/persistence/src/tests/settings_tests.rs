// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for key-value setting persistence operations.

use crate::Persistence;

#[test]
fn test_missing_setting_returns_none() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert!(persistence.get_setting("whatsapp_number").unwrap().is_none());
}

#[test]
fn test_upsert_inserts_then_replaces() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .upsert_setting("whatsapp_number", "+15550100")
        .unwrap();
    assert_eq!(
        persistence.get_setting("whatsapp_number").unwrap(),
        Some(String::from("+15550100"))
    );

    persistence
        .upsert_setting("whatsapp_number", "+15550199")
        .unwrap();
    assert_eq!(
        persistence.get_setting("whatsapp_number").unwrap(),
        Some(String::from("+15550199"))
    );
}

#[test]
fn test_settings_are_keyed_independently() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    persistence
        .upsert_setting("whatsapp_number", "+15550100")
        .unwrap();
    persistence.upsert_setting("store_motto", "refurb first").unwrap();

    assert_eq!(
        persistence.get_setting("whatsapp_number").unwrap(),
        Some(String::from("+15550100"))
    );
    assert_eq!(
        persistence.get_setting("store_motto").unwrap(),
        Some(String::from("refurb first"))
    );
}
