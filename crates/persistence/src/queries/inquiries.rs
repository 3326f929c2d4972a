// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Buyer question and gadget request queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::data_models::{GadgetRequestData, QuestionData};
use crate::diesel_schema::{gadget_requests, questions};
use crate::error::PersistenceError;

/// Diesel Queryable struct for question rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = questions)]
struct QuestionRow {
    question_id: i64,
    question: String,
    contact_info: String,
    created_at: String,
}

/// Diesel Queryable struct for gadget request rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = gadget_requests)]
struct GadgetRequestRow {
    request_id: i64,
    gadget_details: String,
    contact_info: String,
    is_resolved: i32,
    created_at: String,
}

backend_fn! {
/// Lists all buyer questions, oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_questions(conn: &mut _) -> Result<Vec<QuestionData>, PersistenceError> {
    let rows: Vec<QuestionRow> = questions::table
        .order(questions::question_id.asc())
        .select(QuestionRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| QuestionData {
            question_id: row.question_id,
            question: row.question,
            contact_info: row.contact_info,
            created_at: row.created_at,
        })
        .collect())
}
}

backend_fn! {
/// Lists all gadget requests, oldest first.
///
/// # Arguments
///
/// * `conn` - The database connection
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_gadget_requests(conn: &mut _) -> Result<Vec<GadgetRequestData>, PersistenceError> {
    let rows: Vec<GadgetRequestRow> = gadget_requests::table
        .order(gadget_requests::request_id.asc())
        .select(GadgetRequestRow::as_select())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|row| GadgetRequestData {
            request_id: row.request_id,
            gadget_details: row.gadget_details,
            contact_info: row.contact_info,
            is_resolved: row.is_resolved != 0,
            created_at: row.created_at,
        })
        .collect())
}
}
