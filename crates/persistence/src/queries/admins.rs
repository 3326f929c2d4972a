// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrator and session queries.
//!
//! This module contains backend-agnostic queries for retrieving admin
//! accounts and sessions. All queries use Diesel DSL and work across all
//! supported database backends.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::data_models::{AdminData, SessionData};
use crate::diesel_schema::{admins, sessions};
use crate::error::PersistenceError;

/// Diesel Queryable struct for admin rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = admins)]
struct AdminRow {
    admin_id: i64,
    username: String,
    password_hash: String,
    created_at: String,
    last_login_at: Option<String>,
}

impl From<AdminRow> for AdminData {
    fn from(row: AdminRow) -> Self {
        Self {
            admin_id: row.admin_id,
            username: row.username,
            password_hash: row.password_hash,
            created_at: row.created_at,
            last_login_at: row.last_login_at,
        }
    }
}

/// Diesel Queryable struct for session rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = sessions)]
struct SessionRow {
    session_id: i64,
    session_token: String,
    admin_id: i64,
    created_at: String,
    last_activity_at: String,
    expires_at: String,
}

backend_fn! {
/// Retrieves an admin by username.
///
/// The `username` is normalized to uppercase for case-insensitive lookup.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The username to search for
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the admin is not found.
pub fn get_admin_by_username(
    conn: &mut _,
    username: &str,
) -> Result<Option<AdminData>, PersistenceError> {
    let normalized_username: String = username.to_uppercase();

    debug!("Looking up admin by username: {}", normalized_username);

    let result: Result<AdminRow, diesel::result::Error> = admins::table
        .filter(admins::username.eq(&normalized_username))
        .select(AdminRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(AdminData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves an admin by ID.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `admin_id` - The admin ID
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the admin is not found.
pub fn get_admin_by_id(
    conn: &mut _,
    admin_id: i64,
) -> Result<Option<AdminData>, PersistenceError> {
    debug!("Looking up admin by ID: {}", admin_id);

    let result: Result<AdminRow, diesel::result::Error> = admins::table
        .filter(admins::admin_id.eq(admin_id))
        .select(AdminRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(AdminData::from(row))),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves a session by token.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The session token
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the session is not found.
pub fn get_session_by_token(
    conn: &mut _,
    session_token: &str,
) -> Result<Option<SessionData>, PersistenceError> {
    let result: Result<SessionRow, diesel::result::Error> = sessions::table
        .filter(sessions::session_token.eq(session_token))
        .select(SessionRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(SessionData {
            session_id: row.session_id,
            session_token: row.session_token,
            admin_id: row.admin_id,
            created_at: row.created_at,
            last_activity_at: row.last_activity_at,
            expires_at: row.expires_at,
        })),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

/// Verifies a password against a stored hash.
///
/// This is a backend-agnostic utility function that uses bcrypt.
///
/// # Arguments
///
/// * `password` - The plain-text password to verify
/// * `password_hash` - The stored bcrypt hash
///
/// # Errors
///
/// Returns an error if verification cannot be performed.
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, PersistenceError> {
    bcrypt::verify(password, password_hash)
        .map_err(|e| PersistenceError::Other(format!("Failed to verify password: {e}")))
}
