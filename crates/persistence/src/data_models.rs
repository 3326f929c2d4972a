// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use gadget_market_domain::{GadgetCondition, GadgetType, ListingStatus};
use serde::{Deserialize, Serialize};

/// A gadget listing as stored.
///
/// Enum-valued columns are parsed into domain types on the way out of the
/// database; a row that fails to parse is surfaced as a persistence error
/// rather than leaking raw strings upward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingData {
    pub listing_id: i64,
    pub name: String,
    pub gadget_type: GadgetType,
    pub condition: GadgetCondition,
    pub description: String,
    pub seller_price: f64,
    pub listing_price: Option<f64>,
    pub seller_contact_info: String,
    pub photo_url: String,
    pub status: ListingStatus,
    pub created_at: String,
}

/// Field values for creating a listing.
///
/// The caller decides the initial status and whether a listing price is
/// present (seller submissions have none, admin-created listings must).
#[derive(Debug, Clone, PartialEq)]
pub struct NewListingData {
    pub name: String,
    pub gadget_type: GadgetType,
    pub condition: GadgetCondition,
    pub description: String,
    pub seller_price: f64,
    pub listing_price: Option<f64>,
    pub seller_contact_info: String,
    pub photo_url: String,
    pub status: ListingStatus,
}

/// A partial update to a listing. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingChanges {
    pub name: Option<String>,
    pub gadget_type: Option<GadgetType>,
    pub condition: Option<GadgetCondition>,
    pub description: Option<String>,
    pub seller_price: Option<f64>,
    pub listing_price: Option<f64>,
}

impl ListingChanges {
    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.gadget_type.is_none()
            && self.condition.is_none()
            && self.description.is_none()
            && self.seller_price.is_none()
            && self.listing_price.is_none()
    }
}

/// Filters for the public listing query.
///
/// All filters are optional and combined with AND; the query always
/// restricts to published listings with a price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicListingFilter {
    pub gadget_type: Option<GadgetType>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub condition: Option<GadgetCondition>,
}

/// An administrator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminData {
    pub admin_id: i64,
    pub username: String,
    pub password_hash: String,
    pub created_at: String,
    pub last_login_at: Option<String>,
}

/// An authentication session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    pub session_id: i64,
    pub session_token: String,
    pub admin_id: i64,
    pub created_at: String,
    pub last_activity_at: String,
    pub expires_at: String,
}

/// A buyer question about a published listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionData {
    pub question_id: i64,
    pub question: String,
    pub contact_info: String,
    pub created_at: String,
}

/// A buyer request for a gadget not currently listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GadgetRequestData {
    pub request_id: i64,
    pub gadget_details: String,
    pub contact_info: String,
    pub is_resolved: bool,
    pub created_at: String,
}
