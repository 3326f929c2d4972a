// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers translate DTOs into persistence operations, enforce the listing
//! lifecycle rules, and translate errors into the API taxonomy. They carry
//! no HTTP concerns; the server crate maps their errors onto status codes.

use std::str::FromStr;
use tracing::info;

use gadget_market_domain::{GadgetCondition, GadgetType, ListingStatus};
use gadget_market_persistence::{
    AdminData, ListingChanges, ListingData, NewListingData, Persistence, PublicListingFilter,
};

use crate::auth::{AuthenticatedAdmin, AuthenticationService};
use crate::error::{ApiError, translate_domain_error};
use crate::password_policy::PasswordPolicy;
use crate::request_response::{
    AdminListingRequest, BulkStatusRequest, BulkStatusResponse, DashboardResponse,
    GadgetRequestInfo, GadgetRequestSubmission, ListingInfo, ListingUpdateRequest, LoginRequest,
    LoginResponse, PublicListingInfo, PublicListingQuery, QuestionInfo, QuestionSubmission,
    SellerSubmissionRequest, SettingsUpdateRequest, SettingsUpdateResponse, StatusUpdateRequest,
};

/// Settings key for the admin WhatsApp contact number.
pub const WHATSAPP_SETTING_KEY: &str = "whatsapp_number";

/// Authenticates an admin and returns a bearer token.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The login credentials
///
/// # Errors
///
/// Returns an error if the credentials are wrong or the session cannot be
/// created.
pub fn login(
    persistence: &mut Persistence,
    request: &LoginRequest,
) -> Result<LoginResponse, ApiError> {
    let (session_token, admin, _admin_data): (String, AuthenticatedAdmin, AdminData) =
        AuthenticationService::login(persistence, &request.username, &request.password)?;

    // Read the expiry back from the session we just created
    let expires_at: String = persistence
        .get_session_by_token(&session_token)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to retrieve session: {e}"),
        })?
        .ok_or_else(|| ApiError::Internal {
            message: String::from("Session not found after creation"),
        })?
        .expires_at;

    info!(username = %admin.username, "Admin logged in");

    Ok(LoginResponse {
        access_token: session_token,
        token_type: String::from("bearer"),
        expires_at,
    })
}

/// Logs out by deleting the session.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `session_token` - The session token to delete
///
/// # Errors
///
/// Returns an error if the logout fails.
pub fn logout(persistence: &mut Persistence, session_token: &str) -> Result<(), ApiError> {
    AuthenticationService::logout(persistence, session_token)?;
    Ok(())
}

/// Provisions an administrator account.
///
/// This is a one-time setup step driven from the command line, not an HTTP
/// endpoint; accounts are immutable once created.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `username` - The new admin's username
/// * `password` - The new admin's password (validated against the policy)
///
/// # Returns
///
/// The new admin's id.
///
/// # Errors
///
/// Returns an error if the password violates the policy or the username is
/// already taken.
pub fn provision_admin(
    persistence: &mut Persistence,
    username: &str,
    password: &str,
) -> Result<i64, ApiError> {
    PasswordPolicy::default().validate(password, username)?;

    let existing: Option<AdminData> = persistence
        .get_admin_by_username(username)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to check username: {e}"),
        })?;
    if existing.is_some() {
        return Err(ApiError::InvalidInput {
            field: String::from("username"),
            message: format!("Admin '{username}' already exists"),
        });
    }

    let admin_id: i64 =
        persistence
            .create_admin(username, password)
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to create admin: {e}"),
            })?;

    info!(admin_id, username, "Admin provisioned");

    Ok(admin_id)
}

/// Creates a listing from a seller submission.
///
/// Seller submissions always enter the review queue: status is forced to
/// `pending` and no listing price is set.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The submission fields
///
/// # Errors
///
/// Returns an error if an enum field is invalid or the insert fails.
pub fn submit_listing(
    persistence: &mut Persistence,
    request: &SellerSubmissionRequest,
) -> Result<ListingInfo, ApiError> {
    let gadget_type: GadgetType = parse_gadget_type(&request.gadget_type)?;
    let condition: GadgetCondition = parse_condition(&request.condition)?;

    let listing: NewListingData = NewListingData {
        name: request.name.clone(),
        gadget_type,
        condition,
        description: request.description.clone(),
        seller_price: request.seller_price,
        listing_price: None,
        seller_contact_info: request.seller_contact_info.clone(),
        photo_url: request.photo_url.clone(),
        status: ListingStatus::Pending,
    };

    let listing_id: i64 = persistence
        .create_listing(&listing)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to create listing: {e}"),
        })?;

    info!(listing_id, name = %request.name, "Seller submission received");

    fetch_listing(persistence, listing_id)
}

/// Creates a published listing directly.
///
/// Admin-created listings skip review: status is forced to `available` and
/// the listing price is required.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The listing fields
///
/// # Errors
///
/// Returns an error if an enum field is invalid or the insert fails.
pub fn add_listing(
    persistence: &mut Persistence,
    request: &AdminListingRequest,
) -> Result<ListingInfo, ApiError> {
    let gadget_type: GadgetType = parse_gadget_type(&request.gadget_type)?;
    let condition: GadgetCondition = parse_condition(&request.condition)?;

    let listing: NewListingData = NewListingData {
        name: request.name.clone(),
        gadget_type,
        condition,
        description: request.description.clone(),
        seller_price: request.seller_price,
        listing_price: Some(request.listing_price),
        seller_contact_info: request.seller_contact_info.clone(),
        photo_url: request.photo_url.clone(),
        status: ListingStatus::Available,
    };

    let listing_id: i64 = persistence
        .create_listing(&listing)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to create listing: {e}"),
        })?;

    info!(listing_id, name = %request.name, "Listing published directly");

    fetch_listing(persistence, listing_id)
}

/// Retrieves a single listing for admin surfaces.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id.
pub fn get_listing(persistence: &mut Persistence, listing_id: i64) -> Result<ListingInfo, ApiError> {
    fetch_listing(persistence, listing_id)
}

/// Applies a partial field update to a listing.
///
/// Only supplied fields change; an empty request returns the listing
/// unchanged.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `listing_id` - The listing to update
/// * `request` - The fields to change
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id or `InvalidInput` for a
/// bad enum value.
pub fn update_listing(
    persistence: &mut Persistence,
    listing_id: i64,
    request: &ListingUpdateRequest,
) -> Result<ListingInfo, ApiError> {
    // Validate enum fields before touching the row
    let gadget_type: Option<GadgetType> = request
        .gadget_type
        .as_deref()
        .map(parse_gadget_type)
        .transpose()?;
    let condition: Option<GadgetCondition> = request
        .condition
        .as_deref()
        .map(parse_condition)
        .transpose()?;

    // Confirm the listing exists so an unknown id is a 404, not a silent no-op
    let _existing: ListingInfo = fetch_listing(persistence, listing_id)?;

    let changes: ListingChanges = ListingChanges {
        name: request.name.clone(),
        gadget_type,
        condition,
        description: request.description.clone(),
        seller_price: request.seller_price,
        listing_price: request.listing_price,
    };

    persistence
        .update_listing(listing_id, &changes)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to update listing: {e}"),
        })?;

    info!(listing_id, "Listing fields updated");

    fetch_listing(persistence, listing_id)
}

/// Applies a single-listing status change.
///
/// The requested status is resolved against the current one by the
/// lifecycle rule set (soft reject, restore, or direct application).
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `listing_id` - The listing to update
/// * `request` - The requested status
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id or `InvalidInput` for a
/// bad status value.
pub fn change_listing_status(
    persistence: &mut Persistence,
    listing_id: i64,
    request: &StatusUpdateRequest,
) -> Result<ListingInfo, ApiError> {
    let requested: ListingStatus = parse_status(&request.status)?;

    let current: ListingData = persistence
        .get_listing(listing_id)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load listing: {e}"),
        })?
        .ok_or_else(|| listing_not_found(listing_id))?;

    let resolved: ListingStatus = current.status.resolve_transition(requested);

    persistence
        .set_listing_status(listing_id, resolved)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to set listing status: {e}"),
        })?;

    info!(
        listing_id,
        from = current.status.as_str(),
        requested = requested.as_str(),
        resolved = resolved.as_str(),
        "Listing status changed"
    );

    fetch_listing(persistence, listing_id)
}

/// Applies a status uniformly to a set of listings.
///
/// The target must be in the bulk allow-list (`available`, `deleted`,
/// `sold`); the per-listing transition rules are deliberately bypassed, so
/// bulk can move a deleted listing straight to `sold`.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `request` - The target status and id set
///
/// # Errors
///
/// Returns `InvalidInput` for a target outside the allow-list (nothing is
/// mutated) and `ResourceNotFound` when no id matches an existing listing.
pub fn bulk_update_listings(
    persistence: &mut Persistence,
    request: &BulkStatusRequest,
) -> Result<BulkStatusResponse, ApiError> {
    let target: ListingStatus = parse_status(&request.action)?;

    target
        .validate_bulk_target()
        .map_err(|e| translate_domain_error("action", &e))?;

    let updated: usize = persistence
        .bulk_set_listing_status(&request.listing_ids, target)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to apply bulk status: {e}"),
        })?;

    if updated == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Listing"),
            message: String::from("No listings found for the given IDs"),
        });
    }

    info!(updated, target = target.as_str(), "Bulk status applied");

    Ok(BulkStatusResponse {
        success: true,
        updated,
        message: format!("Updated {updated} listings to {target}"),
    })
}

/// Assembles the admin dashboard.
///
/// # Errors
///
/// Returns an error if any underlying query fails.
pub fn get_dashboard(persistence: &mut Persistence) -> Result<DashboardResponse, ApiError> {
    let pending: Vec<ListingData> = persistence
        .list_listings_by_status(ListingStatus::Pending)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load pending listings: {e}"),
        })?;
    let active: Vec<ListingData> = persistence
        .list_listings_by_status(ListingStatus::Available)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load active listings: {e}"),
        })?;
    let sold: Vec<ListingData> = persistence
        .list_listings_by_status(ListingStatus::Sold)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load sold listings: {e}"),
        })?;
    let questions = persistence
        .list_questions()
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load questions: {e}"),
        })?;
    let requests = persistence
        .list_gadget_requests()
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load gadget requests: {e}"),
        })?;

    Ok(DashboardResponse {
        pending_listings: pending.into_iter().map(ListingInfo::from).collect(),
        active_listings: active.into_iter().map(ListingInfo::from).collect(),
        sold_listings: sold.into_iter().map(ListingInfo::from).collect(),
        buyer_questions: questions.into_iter().map(QuestionInfo::from).collect(),
        gadget_requests: requests.into_iter().map(GadgetRequestInfo::from).collect(),
    })
}

/// Lists listings awaiting review.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_pending_listings(
    persistence: &mut Persistence,
) -> Result<Vec<ListingInfo>, ApiError> {
    let pending: Vec<ListingData> = persistence
        .list_listings_by_status(ListingStatus::Pending)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load pending listings: {e}"),
        })?;

    Ok(pending.into_iter().map(ListingInfo::from).collect())
}

/// Lists publicly visible listings with optional filters, newest first.
///
/// Every result carries the admin contact number when one is configured.
///
/// # Arguments
///
/// * `persistence` - The persistence layer
/// * `query` - Optional type/price/condition filters
///
/// # Errors
///
/// Returns `InvalidInput` for a bad filter value.
pub fn list_public_listings(
    persistence: &mut Persistence,
    query: &PublicListingQuery,
) -> Result<Vec<PublicListingInfo>, ApiError> {
    let filter: PublicListingFilter = PublicListingFilter {
        gadget_type: query
            .gadget_type
            .as_deref()
            .map(parse_gadget_type)
            .transpose()?,
        price_min: query.price_min,
        price_max: query.price_max,
        condition: query.condition.as_deref().map(parse_condition).transpose()?,
    };

    let listings: Vec<ListingData> = persistence
        .list_public_listings(&filter)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load public listings: {e}"),
        })?;

    let whatsapp: Option<String> = persistence
        .get_setting(WHATSAPP_SETTING_KEY)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load settings: {e}"),
        })?;

    Ok(listings
        .into_iter()
        .map(|listing| PublicListingInfo::from_listing(listing, whatsapp.clone()))
        .collect())
}

/// Records a buyer question.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn submit_question(
    persistence: &mut Persistence,
    submission: &QuestionSubmission,
) -> Result<QuestionInfo, ApiError> {
    let question_id: i64 = persistence
        .create_question(&submission.question, &submission.contact_info)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to create question: {e}"),
        })?;

    Ok(QuestionInfo {
        id: question_id,
        question: submission.question.clone(),
        contact_info: submission.contact_info.clone(),
    })
}

/// Deletes a buyer question.
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id.
pub fn delete_question(persistence: &mut Persistence, question_id: i64) -> Result<(), ApiError> {
    let deleted: usize = persistence
        .delete_question(question_id)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to delete question: {e}"),
        })?;

    if deleted == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Question"),
            message: format!("Question {question_id} not found"),
        });
    }

    Ok(())
}

/// Records a gadget sourcing request.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn submit_gadget_request(
    persistence: &mut Persistence,
    submission: &GadgetRequestSubmission,
) -> Result<GadgetRequestInfo, ApiError> {
    let request_id: i64 = persistence
        .create_gadget_request(&submission.gadget_details, &submission.contact_info)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to create gadget request: {e}"),
        })?;

    Ok(GadgetRequestInfo {
        id: request_id,
        gadget_details: submission.gadget_details.clone(),
        contact_info: submission.contact_info.clone(),
        is_resolved: false,
    })
}

/// Marks a gadget request resolved (or reopens it).
///
/// # Errors
///
/// Returns `ResourceNotFound` for an unknown id.
pub fn resolve_gadget_request(
    persistence: &mut Persistence,
    request_id: i64,
    is_resolved: bool,
) -> Result<(), ApiError> {
    let updated: usize = persistence
        .set_gadget_request_resolved(request_id, is_resolved)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to update gadget request: {e}"),
        })?;

    if updated == 0 {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("GadgetRequest"),
            message: format!("Gadget request {request_id} not found"),
        });
    }

    Ok(())
}

/// Stores the admin contact number shown on public listings.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn update_settings(
    persistence: &mut Persistence,
    request: &SettingsUpdateRequest,
) -> Result<SettingsUpdateResponse, ApiError> {
    persistence
        .upsert_setting(WHATSAPP_SETTING_KEY, &request.whatsapp_number)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to store setting: {e}"),
        })?;

    Ok(SettingsUpdateResponse {
        success: true,
        whatsapp_number: request.whatsapp_number.clone(),
    })
}

/// Loads a listing or maps its absence to `ResourceNotFound`.
fn fetch_listing(persistence: &mut Persistence, listing_id: i64) -> Result<ListingInfo, ApiError> {
    persistence
        .get_listing(listing_id)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load listing: {e}"),
        })?
        .map(ListingInfo::from)
        .ok_or_else(|| listing_not_found(listing_id))
}

fn listing_not_found(listing_id: i64) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Listing"),
        message: format!("Listing {listing_id} not found"),
    }
}

fn parse_gadget_type(value: &str) -> Result<GadgetType, ApiError> {
    GadgetType::from_str(value).map_err(|e| translate_domain_error("gadget_type", &e))
}

fn parse_condition(value: &str) -> Result<GadgetCondition, ApiError> {
    GadgetCondition::from_str(value).map_err(|e| translate_domain_error("condition", &e))
}

fn parse_status(value: &str) -> Result<ListingStatus, ApiError> {
    ListingStatus::from_str(value).map_err(|e| translate_domain_error("status", &e))
}
