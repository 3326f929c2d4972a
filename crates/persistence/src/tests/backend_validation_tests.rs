// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for multi-database support.
//!
//! These tests validate that the persistence layer works correctly
//! across different database backends (`SQLite`, MariaDB/MySQL).
//!
//! ## Purpose
//!
//! The purpose of these tests is to ensure:
//! 1. Migrations apply cleanly on all supported backends
//! 2. Foreign key constraints are enforced correctly
//! 3. Unique constraints work as expected
//! 4. Backend-specific SQL compatibility
//!
//! ## Test Execution
//!
//! - `SQLite` tests run normally via `cargo test`
//! - MariaDB/MySQL tests are marked `#[ignore]` and run only via `cargo xtask test-mariadb`
//!
//! ## Infrastructure Requirements
//!
//! `MariaDB` tests require:
//! - `DATABASE_URL` environment variable (set by xtask)
//! - `GADGET_MARKET_TEST_BACKEND=mariadb` environment variable
//! - Running `MariaDB` instance (provisioned by xtask)
//!
//! Tests fail fast if required infrastructure is missing.
//!
//! Business logic and domain rules are validated by the standard test suite
//! running against `SQLite`. These backend validation tests ensure the
//! persistence layer works correctly on additional databases.

use diesel::MysqlConnection;
use diesel::prelude::*;
use std::env;

use crate::tests::create_test_published_listing;
use crate::{Persistence, PublicListingFilter};
use gadget_market_domain::ListingStatus;

/// Helper to get the `MariaDB` connection URL from environment.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, indicating missing infrastructure.
fn get_mariadb_url() -> String {
    env::var("DATABASE_URL")
        .expect("DATABASE_URL not set - MariaDB tests must be run via `cargo xtask test-mariadb`")
}

/// Helper to verify we're running in the `MariaDB` test environment.
///
/// # Panics
///
/// Panics if `GADGET_MARKET_TEST_BACKEND` is not set to `mariadb`.
fn verify_mariadb_test_environment() {
    let backend = env::var("GADGET_MARKET_TEST_BACKEND").expect(
        "GADGET_MARKET_TEST_BACKEND not set - MariaDB tests must be run via `cargo xtask test-mariadb`",
    );
    assert_eq!(
        backend, "mariadb",
        "GADGET_MARKET_TEST_BACKEND must be 'mariadb'"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_connection() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = MysqlConnection::establish(&url);
    assert!(
        result.is_ok(),
        "Failed to connect to MariaDB: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_migrations_apply_cleanly() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = Persistence::new_with_mysql(&url);
    assert!(
        result.is_ok(),
        "Failed to initialize MariaDB: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_listing_round_trip() {
    verify_mariadb_test_environment();
    let mut persistence = Persistence::new_with_mysql(&get_mariadb_url()).unwrap();

    let listing_id = persistence
        .create_listing(&create_test_published_listing("MariaDB laptop", 420.0))
        .unwrap();

    let listing = persistence.get_listing(listing_id).unwrap().unwrap();
    assert_eq!(listing.name, "MariaDB laptop");
    assert_eq!(listing.status, ListingStatus::Available);

    let visible = persistence
        .list_public_listings(&PublicListingFilter::default())
        .unwrap();
    assert!(visible.iter().any(|l| l.listing_id == listing_id));

    // Leave the listing soft-deleted so repeated runs stay clean.
    persistence
        .set_listing_status(listing_id, ListingStatus::Deleted)
        .unwrap();
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_unique_username_enforced() {
    verify_mariadb_test_environment();
    let mut persistence = Persistence::new_with_mysql(&get_mariadb_url()).unwrap();

    let unique_name = format!("validation_admin_{}", std::process::id());
    persistence.create_admin(&unique_name, "password-one").unwrap();
    assert!(persistence.create_admin(&unique_name, "password-two").is_err());
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_session_foreign_key_enforced() {
    verify_mariadb_test_environment();
    let mut persistence = Persistence::new_with_mysql(&get_mariadb_url()).unwrap();

    let result = persistence.create_session("orphan-token", -1, "2099-01-01T00:00:00Z");
    assert!(result.is_err(), "FK violation must be rejected");
}
