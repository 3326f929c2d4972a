// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the persistence layer.
//! Most mutations use Diesel DSL and are backend-agnostic, with minimal use of
//! backend-specific helpers (e.g., `last_insert_rowid()` for `SQLite`).
//!
//! ## Module Organization
//!
//! - `listings` — Gadget listing mutations (create, update, status changes)
//! - `admins` — Administrator and session mutations
//! - `inquiries` — Buyer question and gadget request mutations
//! - `settings` — Key-value setting mutations
//!
//! ## Backend-Specific Code
//!
//! Backend-specific helpers (e.g., `get_last_insert_rowid()`) are imported from
//! the `backend` module. All other code uses Diesel DSL exclusively.

pub mod admins;
pub mod inquiries;
pub mod listings;
pub mod settings;

use crate::error::PersistenceError;
use time::OffsetDateTime;

// Re-export backend-specific mutation functions used by lib.rs
pub use admins::{
    create_admin_mysql, create_admin_sqlite, create_session_mysql, create_session_sqlite,
    delete_expired_sessions_mysql, delete_expired_sessions_sqlite, delete_session_mysql,
    delete_session_sqlite, update_last_login_mysql, update_last_login_sqlite,
    update_session_activity_mysql, update_session_activity_sqlite,
};
pub use inquiries::{
    create_gadget_request_mysql, create_gadget_request_sqlite, create_question_mysql,
    create_question_sqlite, delete_question_mysql, delete_question_sqlite,
    set_gadget_request_resolved_mysql, set_gadget_request_resolved_sqlite,
};
pub use listings::{
    bulk_set_listing_status_mysql, bulk_set_listing_status_sqlite, create_listing_mysql,
    create_listing_sqlite, set_listing_status_mysql, set_listing_status_sqlite,
    update_listing_mysql, update_listing_sqlite,
};
pub use settings::{upsert_setting_mysql, upsert_setting_sqlite};

/// Formats the current UTC time as an ISO 8601 string.
///
/// Timestamp columns are plain text on every backend so that the same
/// value format round-trips identically through `SQLite` and `MySQL`.
pub(crate) fn current_timestamp() -> Result<String, PersistenceError> {
    OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Iso8601::DEFAULT)
        .map_err(|e| PersistenceError::Other(format!("Failed to format timestamp: {e}")))
}
