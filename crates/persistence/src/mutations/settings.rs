// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Key-value setting mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::debug;

use crate::diesel_schema::settings;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts or replaces a setting value by key.
///
/// Implemented as update-then-insert so the same code runs on every
/// backend (`ON CONFLICT` syntax differs between them).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `key` - The setting key
/// * `value` - The setting value
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_setting(conn: &mut _, key: &str, value: &str) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(settings::table)
        .filter(settings::setting_key.eq(key))
        .set(settings::setting_value.eq(value))
        .execute(conn)?;

    if updated == 0 {
        diesel::insert_into(settings::table)
            .values((
                settings::setting_key.eq(key),
                settings::setting_value.eq(value),
            ))
            .execute(conn)?;
    }

    debug!(key, "Setting upserted");

    Ok(())
}
}
