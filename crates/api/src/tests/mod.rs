// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

mod bulk_action_tests;
mod inquiry_tests;

use gadget_market_persistence::Persistence;

use crate::request_response::{AdminListingRequest, SellerSubmissionRequest};

pub const TEST_ADMIN_USERNAME: &str = "market-admin";
pub const TEST_ADMIN_PASSWORD: &str = "Sturdy-Passw0rd";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory persistence")
}

/// Creates an in-memory database with one provisioned admin.
pub fn create_test_persistence_with_admin() -> Persistence {
    let mut persistence = create_test_persistence();
    crate::handlers::provision_admin(&mut persistence, TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD)
        .expect("Failed to provision test admin");
    persistence
}

pub fn create_seller_submission(name: &str) -> SellerSubmissionRequest {
    SellerSubmissionRequest {
        name: name.to_string(),
        gadget_type: String::from("phone"),
        condition: String::from("used"),
        description: String::from("Lightly used, no scratches"),
        seller_price: 120.0,
        seller_contact_info: String::from("seller@example.com"),
        photo_url: String::from("/uploads/phone.jpg"),
    }
}

pub fn create_admin_listing(name: &str, listing_price: f64) -> AdminListingRequest {
    AdminListingRequest {
        name: name.to_string(),
        gadget_type: String::from("laptop"),
        condition: String::from("open_box"),
        description: String::from("Open-box, store warranty"),
        seller_price: 500.0,
        listing_price,
        seller_contact_info: String::from("trade-in desk"),
        photo_url: String::from("/uploads/laptop.jpg"),
    }
}
