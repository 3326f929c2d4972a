// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the bulk status operation and its allow-list.

use crate::error::ApiError;
use crate::handlers;
use crate::request_response::{BulkStatusRequest, StatusUpdateRequest};
use crate::tests::{create_admin_listing, create_seller_submission, create_test_persistence};

#[test]
fn test_bulk_applies_target_uniformly() {
    let mut persistence = create_test_persistence();

    let first =
        handlers::add_listing(&mut persistence, &create_admin_listing("Laptop A", 300.0)).unwrap();
    let second =
        handlers::submit_listing(&mut persistence, &create_seller_submission("Phone B")).unwrap();

    let response = handlers::bulk_update_listings(
        &mut persistence,
        &BulkStatusRequest {
            action: String::from("sold"),
            listing_ids: vec![first.id, second.id],
        },
    )
    .unwrap();

    assert!(response.success);
    assert_eq!(response.updated, 2);
    assert_eq!(
        handlers::get_listing(&mut persistence, first.id).unwrap().status,
        "sold"
    );
    assert_eq!(
        handlers::get_listing(&mut persistence, second.id).unwrap().status,
        "sold"
    );
}

#[test]
fn test_bulk_rejects_pending_target_and_mutates_nothing() {
    let mut persistence = create_test_persistence();

    let listing =
        handlers::add_listing(&mut persistence, &create_admin_listing("Laptop", 300.0)).unwrap();

    let result = handlers::bulk_update_listings(
        &mut persistence,
        &BulkStatusRequest {
            action: String::from("pending"),
            listing_ids: vec![listing.id],
        },
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    assert_eq!(
        handlers::get_listing(&mut persistence, listing.id).unwrap().status,
        "available"
    );
}

#[test]
fn test_bulk_rejects_unknown_target_and_mutates_nothing() {
    let mut persistence = create_test_persistence();

    let listing =
        handlers::add_listing(&mut persistence, &create_admin_listing("Laptop", 300.0)).unwrap();

    let result = handlers::bulk_update_listings(
        &mut persistence,
        &BulkStatusRequest {
            action: String::from("archived"),
            listing_ids: vec![listing.id],
        },
    );

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
    assert_eq!(
        handlers::get_listing(&mut persistence, listing.id).unwrap().status,
        "available"
    );
}

#[test]
fn test_bulk_with_no_matching_ids_is_not_found() {
    let mut persistence = create_test_persistence();

    let result = handlers::bulk_update_listings(
        &mut persistence,
        &BulkStatusRequest {
            action: String::from("deleted"),
            listing_ids: vec![111, 222],
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_bulk_skips_unknown_ids_but_updates_the_rest() {
    let mut persistence = create_test_persistence();

    let listing =
        handlers::add_listing(&mut persistence, &create_admin_listing("Laptop", 300.0)).unwrap();

    let response = handlers::bulk_update_listings(
        &mut persistence,
        &BulkStatusRequest {
            action: String::from("deleted"),
            listing_ids: vec![listing.id, 999],
        },
    )
    .unwrap();

    assert_eq!(response.updated, 1);
    assert_eq!(
        handlers::get_listing(&mut persistence, listing.id).unwrap().status,
        "deleted"
    );
}

#[test]
fn test_bulk_can_move_deleted_listing_straight_to_sold() {
    // The bulk path deliberately bypasses the single-item restore rules:
    // a deleted listing can be marked sold in bulk even though the
    // recognized single-item restore targets are available/pending.
    let mut persistence = create_test_persistence();

    let listing =
        handlers::add_listing(&mut persistence, &create_admin_listing("Laptop", 300.0)).unwrap();
    handlers::change_listing_status(
        &mut persistence,
        listing.id,
        &StatusUpdateRequest {
            status: String::from("deleted"),
        },
    )
    .unwrap();

    let response = handlers::bulk_update_listings(
        &mut persistence,
        &BulkStatusRequest {
            action: String::from("sold"),
            listing_ids: vec![listing.id],
        },
    )
    .unwrap();

    assert_eq!(response.updated, 1);
    assert_eq!(
        handlers::get_listing(&mut persistence, listing.id).unwrap().status,
        "sold"
    );
}
