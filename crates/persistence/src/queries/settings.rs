// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-value setting queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::diesel_schema::settings;
use crate::error::PersistenceError;

backend_fn! {
/// Retrieves a setting value by key.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `key` - The setting key
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the key has never been set.
pub fn get_setting(conn: &mut _, key: &str) -> Result<Option<String>, PersistenceError> {
    let result: Result<String, diesel::result::Error> = settings::table
        .filter(settings::setting_key.eq(key))
        .select(settings::setting_value)
        .first(conn);

    match result {
        Ok(value) => Ok(Some(value)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}
