// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Query modules for persistence layer.
//!
//! This module contains all read-only queries for the persistence layer.
//!
//! ## Module Organization
//!
//! - `listings` — Gadget listing queries (by id, by status, public browse)
//! - `admins` — Administrator and session queries
//! - `inquiries` — Buyer question and gadget request queries
//! - `settings` — Key-value setting queries
//!
//! ## Backend-Specific Functions
//!
//! All query functions are generated in backend-specific monomorphic versions:
//! - Functions suffixed with `_sqlite` for `SQLite`
//! - Functions suffixed with `_mysql` for `MySQL`/`MariaDB`
//!
//! The `Persistence` adapter in `lib.rs` dispatches to the appropriate version
//! based on the active backend connection.

pub mod admins;
pub mod inquiries;
pub mod listings;
pub mod settings;

// Re-export the password verification helper (not backend-specific)
pub use admins::verify_password;

// Re-export backend-specific query functions used by lib.rs
pub use admins::{
    get_admin_by_id_mysql, get_admin_by_id_sqlite, get_admin_by_username_mysql,
    get_admin_by_username_sqlite, get_session_by_token_mysql, get_session_by_token_sqlite,
};
pub use inquiries::{
    list_gadget_requests_mysql, list_gadget_requests_sqlite, list_questions_mysql,
    list_questions_sqlite,
};
pub use listings::{
    get_listing_mysql, get_listing_sqlite, list_listings_by_status_mysql,
    list_listings_by_status_sqlite, list_public_listings_mysql, list_public_listings_sqlite,
};
pub use settings::{get_setting_mysql, get_setting_sqlite};
