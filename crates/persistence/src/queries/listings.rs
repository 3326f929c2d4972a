// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Gadget listing queries.
//!
//! This module contains backend-agnostic queries for retrieving listings.
//! Enum-valued columns are parsed into domain types on the way out; a row
//! that fails to parse surfaces as a persistence error.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use gadget_market_domain::{GadgetCondition, GadgetType, ListingStatus};
use std::str::FromStr;
use tracing::debug;

use crate::data_models::{ListingData, PublicListingFilter};
use crate::diesel_schema::gadgets;
use crate::error::PersistenceError;

/// Diesel Queryable struct for gadget rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = gadgets)]
struct ListingRow {
    gadget_id: i64,
    name: String,
    gadget_type: String,
    condition: String,
    description: String,
    seller_price: f64,
    listing_price: Option<f64>,
    seller_contact_info: String,
    photo_url: String,
    status: String,
    created_at: String,
}

/// Maps a raw row to a typed listing, validating the enum columns.
fn row_to_listing(row: ListingRow) -> Result<ListingData, PersistenceError> {
    Ok(ListingData {
        listing_id: row.gadget_id,
        name: row.name,
        gadget_type: GadgetType::from_str(&row.gadget_type)?,
        condition: GadgetCondition::from_str(&row.condition)?,
        description: row.description,
        seller_price: row.seller_price,
        listing_price: row.listing_price,
        seller_contact_info: row.seller_contact_info,
        photo_url: row.photo_url,
        status: ListingStatus::from_str(&row.status)?,
        created_at: row.created_at,
    })
}

backend_fn! {
/// Retrieves a listing by id.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `listing_id` - The listing id to look up
///
/// # Errors
///
/// Returns an error if the database query fails.
/// Returns `Ok(None)` if the listing is not found.
pub fn get_listing(
    conn: &mut _,
    listing_id: i64,
) -> Result<Option<ListingData>, PersistenceError> {
    debug!("Looking up listing by ID: {}", listing_id);

    let result: Result<ListingRow, diesel::result::Error> = gadgets::table
        .filter(gadgets::gadget_id.eq(listing_id))
        .select(ListingRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(Some(row_to_listing(row)?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists all listings in a given status, oldest first.
///
/// Used by the admin dashboard; soft-deleted listings are returned only
/// when asked for explicitly.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `status` - The status to filter by
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_listings_by_status(
    conn: &mut _,
    status: ListingStatus,
) -> Result<Vec<ListingData>, PersistenceError> {
    let rows: Vec<ListingRow> = gadgets::table
        .filter(gadgets::status.eq(status.as_str()))
        .order(gadgets::gadget_id.asc())
        .select(ListingRow::as_select())
        .load(conn)?;

    rows.into_iter().map(row_to_listing).collect()
}
}

backend_fn! {
/// Lists publicly visible listings, newest first.
///
/// Always restricts to `available` listings with a non-null listing
/// price; the optional filters narrow further.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `filter` - Optional type/price/condition filters
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_public_listings(
    conn: &mut _,
    filter: &PublicListingFilter,
) -> Result<Vec<ListingData>, PersistenceError> {
    let mut query = gadgets::table
        .filter(gadgets::status.eq(ListingStatus::Available.as_str()))
        .filter(gadgets::listing_price.is_not_null())
        .order(gadgets::gadget_id.desc())
        .select(ListingRow::as_select())
        .into_boxed();

    if let Some(gadget_type) = filter.gadget_type {
        query = query.filter(gadgets::gadget_type.eq(gadget_type.as_str()));
    }
    if let Some(price_min) = filter.price_min {
        query = query.filter(gadgets::listing_price.ge(price_min));
    }
    if let Some(price_max) = filter.price_max {
        query = query.filter(gadgets::listing_price.le(price_max));
    }
    if let Some(condition) = filter.condition {
        query = query.filter(gadgets::condition.eq(condition.as_str()));
    }

    let rows: Vec<ListingRow> = query.load(conn)?;

    rows.into_iter().map(row_to_listing).collect()
}
}
