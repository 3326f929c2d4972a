// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gadget listing mutations.
//!
//! This module contains backend-agnostic mutations for persisting gadget
//! listings. Status strings written here always come from the domain enum,
//! so the CHECK constraints on the table can never fire for code paths
//! that go through this module.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gadget_market_domain::ListingStatus;
use tracing::{debug, info};

use crate::backend::PersistenceBackend;
use crate::data_models::{ListingChanges, NewListingData};
use crate::diesel_schema::gadgets;
use crate::error::PersistenceError;
use crate::mutations::current_timestamp;

/// Diesel changeset for partial listing updates.
///
/// `None` fields are omitted from the generated `UPDATE` statement.
#[derive(AsChangeset)]
#[diesel(table_name = gadgets)]
struct ListingChangeset {
    name: Option<String>,
    gadget_type: Option<String>,
    condition: Option<String>,
    description: Option<String>,
    seller_price: Option<f64>,
    listing_price: Option<f64>,
}

impl From<&ListingChanges> for ListingChangeset {
    fn from(changes: &ListingChanges) -> Self {
        Self {
            name: changes.name.clone(),
            gadget_type: changes.gadget_type.map(|t| t.as_str().to_string()),
            condition: changes.condition.map(|c| c.as_str().to_string()),
            description: changes.description.clone(),
            seller_price: changes.seller_price,
            listing_price: changes.listing_price,
        }
    }
}

backend_fn! {
/// Creates a new gadget listing.
///
/// The caller is responsible for the path-specific rules (seller
/// submissions arrive `pending` without a listing price; admin-created
/// listings arrive `available` with one).
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `listing` - The listing field values
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_listing(
    conn: &mut _,
    listing: &NewListingData,
) -> Result<i64, PersistenceError> {
    let created_at: String = current_timestamp()?;

    diesel::insert_into(gadgets::table)
        .values((
            gadgets::name.eq(&listing.name),
            gadgets::gadget_type.eq(listing.gadget_type.as_str()),
            gadgets::condition.eq(listing.condition.as_str()),
            gadgets::description.eq(&listing.description),
            gadgets::seller_price.eq(listing.seller_price),
            gadgets::listing_price.eq(listing.listing_price),
            gadgets::seller_contact_info.eq(&listing.seller_contact_info),
            gadgets::photo_url.eq(&listing.photo_url),
            gadgets::status.eq(listing.status.as_str()),
            gadgets::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let listing_id: i64 = conn.get_last_insert_rowid()?;

    info!(
        listing_id,
        status = listing.status.as_str(),
        "Listing created"
    );

    Ok(listing_id)
}
}

backend_fn! {
/// Applies a partial update to a listing.
///
/// Only the fields set in `changes` are written; an empty change set is a
/// no-op rather than an error.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `listing_id` - The listing to update
/// * `changes` - The fields to change
///
/// # Returns
///
/// The number of rows updated (0 if the listing does not exist or the
/// change set was empty).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn update_listing(
    conn: &mut _,
    listing_id: i64,
    changes: &ListingChanges,
) -> Result<usize, PersistenceError> {
    if changes.is_empty() {
        debug!(listing_id, "Empty change set, skipping update");
        return Ok(0);
    }

    let changeset: ListingChangeset = ListingChangeset::from(changes);

    let updated: usize = diesel::update(gadgets::table)
        .filter(gadgets::gadget_id.eq(listing_id))
        .set(&changeset)
        .execute(conn)?;

    debug!(listing_id, updated, "Listing fields updated");

    Ok(updated)
}
}

backend_fn! {
/// Sets the status of a single listing.
///
/// Transition rules are resolved by the caller; this function writes the
/// already-resolved status.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `listing_id` - The listing to update
/// * `status` - The resolved status to apply
///
/// # Returns
///
/// The number of rows updated (0 if the listing does not exist).
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_listing_status(
    conn: &mut _,
    listing_id: i64,
    status: ListingStatus,
) -> Result<usize, PersistenceError> {
    let updated: usize = diesel::update(gadgets::table)
        .filter(gadgets::gadget_id.eq(listing_id))
        .set(gadgets::status.eq(status.as_str()))
        .execute(conn)?;

    info!(listing_id, status = status.as_str(), "Listing status set");

    Ok(updated)
}
}

backend_fn! {
/// Applies a status uniformly to every listing in the given id set.
///
/// Ids that match no listing are skipped. The per-listing transition
/// rules do not apply here; the caller validates the target against the
/// bulk allow-list before calling.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `listing_ids` - The listings to update
/// * `status` - The status to apply
///
/// # Returns
///
/// The number of listings updated.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn bulk_set_listing_status(
    conn: &mut _,
    listing_ids: &[i64],
    status: ListingStatus,
) -> Result<usize, PersistenceError> {
    if listing_ids.is_empty() {
        return Ok(0);
    }

    let updated: usize = diesel::update(gadgets::table)
        .filter(gadgets::gadget_id.eq_any(listing_ids.iter().copied()))
        .set(gadgets::status.eq(status.as_str()))
        .execute(conn)?;

    info!(
        requested = listing_ids.len(),
        updated,
        status = status.as_str(),
        "Bulk listing status applied"
    );

    Ok(updated)
}
}
