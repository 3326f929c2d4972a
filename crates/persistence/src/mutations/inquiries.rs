// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Buyer question and gadget request mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::diesel_schema::{gadget_requests, questions};
use crate::error::PersistenceError;
use crate::mutations::current_timestamp;

backend_fn! {
/// Creates a buyer question.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `question` - The question text
/// * `contact_info` - How to reach the buyer
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_question(
    conn: &mut _,
    question: &str,
    contact_info: &str,
) -> Result<i64, PersistenceError> {
    let created_at: String = current_timestamp()?;

    diesel::insert_into(questions::table)
        .values((
            questions::question.eq(question),
            questions::contact_info.eq(contact_info),
            questions::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let question_id: i64 = conn.get_last_insert_rowid()?;

    info!(question_id, "Buyer question created");

    Ok(question_id)
}
}

backend_fn! {
/// Deletes a buyer question.
///
/// Questions are the one record type that is hard-deleted; they carry no
/// lifecycle and nothing references them.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `question_id` - The question to delete
///
/// # Returns
///
/// The number of questions deleted (0 or 1).
///
/// # Errors
///
/// Returns an error if the delete fails.
pub fn delete_question(conn: &mut _, question_id: i64) -> Result<usize, PersistenceError> {
    let deleted: usize = diesel::delete(questions::table)
        .filter(questions::question_id.eq(question_id))
        .execute(conn)?;

    debug!(question_id, deleted, "Buyer question deleted");

    Ok(deleted)
}
}

backend_fn! {
/// Creates a gadget sourcing request.
///
/// New requests always start unresolved.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `gadget_details` - What the buyer is looking for
/// * `contact_info` - How to reach the buyer
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_gadget_request(
    conn: &mut _,
    gadget_details: &str,
    contact_info: &str,
) -> Result<i64, PersistenceError> {
    let created_at: String = current_timestamp()?;

    diesel::insert_into(gadget_requests::table)
        .values((
            gadget_requests::gadget_details.eq(gadget_details),
            gadget_requests::contact_info.eq(contact_info),
            gadget_requests::is_resolved.eq(0),
            gadget_requests::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let request_id: i64 = conn.get_last_insert_rowid()?;

    info!(request_id, "Gadget request created");

    Ok(request_id)
}
}

backend_fn! {
/// Sets the resolved flag on a gadget request.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `request_id` - The request to update
/// * `is_resolved` - The new flag value
///
/// # Returns
///
/// The number of requests updated (0 or 1).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_gadget_request_resolved(
    conn: &mut _,
    request_id: i64,
    is_resolved: bool,
) -> Result<usize, PersistenceError> {
    let updated: usize = diesel::update(gadget_requests::table)
        .filter(gadget_requests::request_id.eq(request_id))
        .set(gadget_requests::is_resolved.eq(i32::from(is_resolved)))
        .execute(conn)?;

    debug!(request_id, is_resolved, "Gadget request flag updated");

    Ok(updated)
}
}
