// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Administrator and session mutations.
//!
//! This module contains backend-agnostic mutations for persisting admin
//! accounts and their sessions. Most mutations use Diesel DSL, with minimal
//! backend-specific helpers abstracted via the `PersistenceBackend` trait.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{admins, sessions};
use crate::error::PersistenceError;
use crate::mutations::current_timestamp;

backend_fn! {
/// Creates a new administrator account.
///
/// The `username` is normalized to uppercase for case-insensitive
/// uniqueness. The account is immutable after creation; there is no
/// update path.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `username` - The login name (will be normalized)
/// * `password` - The plain-text password (will be hashed)
///
/// # Errors
///
/// Returns an error if the account cannot be created or if the username
/// already exists.
pub fn create_admin(
    conn: &mut _,
    username: &str,
    password: &str,
) -> Result<i64, PersistenceError> {
    let normalized_username: String = username.to_uppercase();

    info!("Creating admin with username: {}", normalized_username);

    // Hash the password using bcrypt
    let password_hash: String = bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| PersistenceError::Other(format!("Failed to hash password: {e}")))?;

    let created_at: String = current_timestamp()?;

    diesel::insert_into(admins::table)
        .values((
            admins::username.eq(&normalized_username),
            admins::password_hash.eq(&password_hash),
            admins::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let admin_id: i64 = conn.get_last_insert_rowid()?;

    info!(admin_id, "Admin created successfully");

    Ok(admin_id)
}
}

backend_fn! {
/// Updates the last login timestamp for an admin.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `admin_id` - The admin ID
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_last_login(conn: &mut _, admin_id: i64) -> Result<(), PersistenceError> {
    debug!("Updating last_login_at for admin ID: {}", admin_id);

    let now: String = current_timestamp()?;

    diesel::update(admins::table)
        .filter(admins::admin_id.eq(admin_id))
        .set(admins::last_login_at.eq(&now))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Creates a new session for an admin.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The opaque session token
/// * `admin_id` - The admin the session belongs to
/// * `expires_at` - The absolute expiry (ISO 8601)
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_session(
    conn: &mut _,
    session_token: &str,
    admin_id: i64,
    expires_at: &str,
) -> Result<(), PersistenceError> {
    debug!(admin_id, "Creating session");

    let now: String = current_timestamp()?;

    diesel::insert_into(sessions::table)
        .values((
            sessions::session_token.eq(session_token),
            sessions::admin_id.eq(admin_id),
            sessions::created_at.eq(&now),
            sessions::last_activity_at.eq(&now),
            sessions::expires_at.eq(expires_at),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Updates the last activity timestamp for a session.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_id` - The session ID
///
/// # Errors
///
/// Returns an error if the database update fails.
pub fn update_session_activity(conn: &mut _, session_id: i64) -> Result<(), PersistenceError> {
    let now: String = current_timestamp()?;

    diesel::update(sessions::table)
        .filter(sessions::session_id.eq(session_id))
        .set(sessions::last_activity_at.eq(&now))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a session by token.
///
/// Deleting an unknown token is not an error.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `session_token` - The token of the session to delete
///
/// # Returns
///
/// The number of sessions deleted (0 or 1).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_session(conn: &mut _, session_token: &str) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(sessions::table)
        .filter(sessions::session_token.eq(session_token))
        .execute(conn)?;

    debug!(deleted, "Session deleted");

    Ok(deleted)
}
}

backend_fn! {
/// Deletes all sessions whose expiry is at or before the given instant.
///
/// Expiry strings share one ISO 8601 format, so lexicographic comparison
/// matches chronological order.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `now` - The current instant (ISO 8601)
///
/// # Returns
///
/// The number of sessions deleted.
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_expired_sessions(conn: &mut _, now: &str) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(sessions::table)
        .filter(sessions::expires_at.le(now))
        .execute(conn)?;

    if deleted > 0 {
        info!(deleted, "Expired sessions purged");
    }

    Ok(deleted)
}
}
