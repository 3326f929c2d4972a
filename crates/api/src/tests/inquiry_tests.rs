// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for buyer questions, gadget requests, and settings handlers.

use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{
    GadgetRequestSubmission, QuestionSubmission, SettingsUpdateRequest,
};
use crate::tests::create_test_persistence;

#[test]
fn test_question_submission_appears_on_dashboard() {
    let mut persistence = create_test_persistence();

    let question = handlers::submit_question(
        &mut persistence,
        &QuestionSubmission {
            question: String::from("Is the phone unlocked?"),
            contact_info: String::from("buyer@example.com"),
        },
    )
    .unwrap();

    let dashboard = handlers::get_dashboard(&mut persistence).unwrap();
    assert_eq!(dashboard.buyer_questions.len(), 1);
    assert_eq!(dashboard.buyer_questions[0].id, question.id);
}

#[test]
fn test_delete_question() {
    let mut persistence = create_test_persistence();

    let question = handlers::submit_question(
        &mut persistence,
        &QuestionSubmission {
            question: String::from("Still available?"),
            contact_info: String::from("+15550100"),
        },
    )
    .unwrap();

    handlers::delete_question(&mut persistence, question.id).unwrap();

    let dashboard = handlers::get_dashboard(&mut persistence).unwrap();
    assert!(dashboard.buyer_questions.is_empty());
}

#[test]
fn test_delete_unknown_question_is_not_found() {
    let mut persistence = create_test_persistence();

    let result = handlers::delete_question(&mut persistence, 77);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_gadget_request_submission_and_resolution() {
    let mut persistence = create_test_persistence();

    let request = handlers::submit_gadget_request(
        &mut persistence,
        &GadgetRequestSubmission {
            gadget_details: String::from("Looking for a 14-inch laptop"),
            contact_info: String::from("buyer@example.com"),
        },
    )
    .unwrap();
    assert!(!request.is_resolved);

    handlers::resolve_gadget_request(&mut persistence, request.id, true).unwrap();

    let dashboard = handlers::get_dashboard(&mut persistence).unwrap();
    assert_eq!(dashboard.gadget_requests.len(), 1);
    assert!(dashboard.gadget_requests[0].is_resolved);
}

#[test]
fn test_resolve_unknown_request_is_not_found() {
    let mut persistence = create_test_persistence();

    let result = handlers::resolve_gadget_request(&mut persistence, 55, true);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_settings_update_is_idempotent_per_key() {
    let mut persistence = create_test_persistence();

    let first = handlers::update_settings(
        &mut persistence,
        &SettingsUpdateRequest {
            whatsapp_number: String::from("+15550100"),
        },
    )
    .unwrap();
    assert!(first.success);

    let second = handlers::update_settings(
        &mut persistence,
        &SettingsUpdateRequest {
            whatsapp_number: String::from("+15550199"),
        },
    )
    .unwrap();
    assert_eq!(second.whatsapp_number, "+15550199");

    assert_eq!(
        persistence
            .get_setting(handlers::WHATSAPP_SETTING_KEY)
            .unwrap(),
        Some(String::from("+15550199"))
    );
}
