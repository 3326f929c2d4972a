// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Enum-valued fields travel as strings in these DTOs and are validated
//! against the domain types at the handler boundary. DTOs never expose a
//! seller's price or contact details on public surfaces.

use gadget_market_persistence::{GadgetRequestData, ListingData, QuestionData};

/// API request to authenticate an admin.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    /// The admin username.
    pub username: String,
    /// The plain-text password.
    pub password: String,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    /// The opaque bearer token.
    pub access_token: String,
    /// Always `bearer`.
    pub token_type: String,
    /// Absolute expiry of the token (ISO 8601).
    pub expires_at: String,
}

/// A seller's listing submission.
///
/// The photo has already been stored by the HTTP layer; only its URL
/// travels here.
#[derive(Debug, Clone, PartialEq)]
pub struct SellerSubmissionRequest {
    /// The gadget name.
    pub name: String,
    /// The gadget type (string form, validated at the boundary).
    pub gadget_type: String,
    /// The gadget condition (string form, validated at the boundary).
    pub condition: String,
    /// Free-form description.
    pub description: String,
    /// The price the seller is asking.
    pub seller_price: f64,
    /// How to reach the seller.
    pub seller_contact_info: String,
    /// URL of the stored photo.
    pub photo_url: String,
}

/// An admin-created listing.
///
/// Unlike a seller submission this carries a listing price and goes
/// straight to `available`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminListingRequest {
    /// The gadget name.
    pub name: String,
    /// The gadget type (string form, validated at the boundary).
    pub gadget_type: String,
    /// The gadget condition (string form, validated at the boundary).
    pub condition: String,
    /// Free-form description.
    pub description: String,
    /// The price paid or owed to the seller.
    pub seller_price: f64,
    /// The public listing price.
    pub listing_price: f64,
    /// How to reach the seller.
    pub seller_contact_info: String,
    /// URL of the stored photo.
    pub photo_url: String,
}

/// A partial update to a listing. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListingUpdateRequest {
    pub name: Option<String>,
    pub gadget_type: Option<String>,
    pub condition: Option<String>,
    pub description: Option<String>,
    pub seller_price: Option<f64>,
    pub listing_price: Option<f64>,
}

/// A single-listing status change request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusUpdateRequest {
    /// The requested status (string form, validated at the boundary).
    pub status: String,
}

/// A bulk status change request.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BulkStatusRequest {
    /// The status to apply (must be `available`, `deleted`, or `sold`).
    pub action: String,
    /// The listings to update.
    pub listing_ids: Vec<i64>,
}

/// API response for a bulk status change.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BulkStatusResponse {
    /// Success indicator.
    pub success: bool,
    /// The number of listings updated.
    pub updated: usize,
    /// A success message.
    pub message: String,
}

/// Full listing view for admin surfaces.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListingInfo {
    pub id: i64,
    pub name: String,
    pub gadget_type: String,
    pub condition: String,
    pub description: String,
    pub seller_price: f64,
    pub listing_price: Option<f64>,
    pub seller_contact_info: String,
    pub photo_url: String,
    pub status: String,
    pub created_at: String,
}

impl From<ListingData> for ListingInfo {
    fn from(listing: ListingData) -> Self {
        Self {
            id: listing.listing_id,
            name: listing.name,
            gadget_type: listing.gadget_type.as_str().to_string(),
            condition: listing.condition.as_str().to_string(),
            description: listing.description,
            seller_price: listing.seller_price,
            listing_price: listing.listing_price,
            seller_contact_info: listing.seller_contact_info,
            photo_url: listing.photo_url,
            status: listing.status.as_str().to_string(),
            created_at: listing.created_at,
        }
    }
}

/// Public listing view for buyer surfaces.
///
/// Deliberately omits the seller's asking price and contact details; the
/// admin contact number is attached instead so buyers reach the store.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PublicListingInfo {
    pub id: i64,
    pub name: String,
    pub gadget_type: String,
    pub condition: String,
    pub description: String,
    pub listing_price: f64,
    pub photo_url: String,
    pub status: String,
    pub admin_whatsapp_number: Option<String>,
}

impl PublicListingInfo {
    /// Builds the public view of a listing.
    ///
    /// Callers guarantee the listing is publicly visible (available with a
    /// price); a missing price maps to 0.0 rather than panicking, but the
    /// public query never produces one.
    #[must_use]
    pub fn from_listing(listing: ListingData, admin_whatsapp_number: Option<String>) -> Self {
        Self {
            id: listing.listing_id,
            name: listing.name,
            gadget_type: listing.gadget_type.as_str().to_string(),
            condition: listing.condition.as_str().to_string(),
            description: listing.description,
            listing_price: listing.listing_price.unwrap_or(0.0),
            photo_url: listing.photo_url,
            status: listing.status.as_str().to_string(),
            admin_whatsapp_number,
        }
    }
}

/// Optional filters for the public browse endpoint.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PublicListingQuery {
    pub gadget_type: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub condition: Option<String>,
}

/// A buyer question submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuestionSubmission {
    pub question: String,
    pub contact_info: String,
}

/// A buyer question as shown to admins.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuestionInfo {
    pub id: i64,
    pub question: String,
    pub contact_info: String,
}

impl From<QuestionData> for QuestionInfo {
    fn from(question: QuestionData) -> Self {
        Self {
            id: question.question_id,
            question: question.question,
            contact_info: question.contact_info,
        }
    }
}

/// A gadget sourcing request submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GadgetRequestSubmission {
    pub gadget_details: String,
    pub contact_info: String,
}

/// A gadget sourcing request as shown to admins.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GadgetRequestInfo {
    pub id: i64,
    pub gadget_details: String,
    pub contact_info: String,
    pub is_resolved: bool,
}

impl From<GadgetRequestData> for GadgetRequestInfo {
    fn from(request: GadgetRequestData) -> Self {
        Self {
            id: request.request_id,
            gadget_details: request.gadget_details,
            contact_info: request.contact_info,
            is_resolved: request.is_resolved,
        }
    }
}

/// The admin dashboard: listings partitioned by status plus open inquiries.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DashboardResponse {
    pub pending_listings: Vec<ListingInfo>,
    pub active_listings: Vec<ListingInfo>,
    pub sold_listings: Vec<ListingInfo>,
    pub buyer_questions: Vec<QuestionInfo>,
    pub gadget_requests: Vec<GadgetRequestInfo>,
}

/// API request to update the admin contact number.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SettingsUpdateRequest {
    /// The WhatsApp number shown on public listings.
    pub whatsapp_number: String,
}

/// API response for a settings update.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SettingsUpdateResponse {
    /// Success indicator.
    pub success: bool,
    /// The stored WhatsApp number.
    pub whatsapp_number: String,
}
