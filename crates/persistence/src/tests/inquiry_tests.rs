// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for buyer question and gadget request persistence operations.

use crate::Persistence;

#[test]
fn test_question_create_list_delete() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let first = persistence
        .create_question("Does the laptop ship with a charger?", "buyer@example.com")
        .unwrap();
    let second = persistence
        .create_question("Is the phone unlocked?", "+15550100")
        .unwrap();

    let questions = persistence.list_questions().unwrap();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].question_id, first);
    assert_eq!(questions[1].question_id, second);

    let deleted = persistence.delete_question(first).unwrap();
    assert_eq!(deleted, 1);

    let remaining = persistence.list_questions().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].question_id, second);
}

#[test]
fn test_delete_unknown_question_removes_nothing() {
    let mut persistence = Persistence::new_in_memory().unwrap();
    assert_eq!(persistence.delete_question(404).unwrap(), 0);
}

#[test]
fn test_gadget_request_starts_unresolved() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let request_id = persistence
        .create_gadget_request("Looking for a 14-inch laptop", "buyer@example.com")
        .unwrap();

    let requests = persistence.list_gadget_requests().unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].request_id, request_id);
    assert!(!requests[0].is_resolved);
}

#[test]
fn test_gadget_request_resolve_flag_round_trip() {
    let mut persistence = Persistence::new_in_memory().unwrap();

    let request_id = persistence
        .create_gadget_request("Any open-box tablets?", "+15550101")
        .unwrap();

    let updated = persistence
        .set_gadget_request_resolved(request_id, true)
        .unwrap();
    assert_eq!(updated, 1);
    assert!(persistence.list_gadget_requests().unwrap()[0].is_resolved);

    persistence
        .set_gadget_request_resolved(request_id, false)
        .unwrap();
    assert!(!persistence.list_gadget_requests().unwrap()[0].is_resolved);
}
