// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedAdmin, AuthenticationService};
pub use error::{ApiError, AuthError};
pub use handlers::{
    WHATSAPP_SETTING_KEY, add_listing, bulk_update_listings, change_listing_status,
    delete_question, get_dashboard, get_listing, list_pending_listings, list_public_listings,
    login, logout, provision_admin, resolve_gadget_request, submit_gadget_request,
    submit_listing, submit_question, update_listing, update_settings,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    AdminListingRequest, BulkStatusRequest, BulkStatusResponse, DashboardResponse,
    GadgetRequestInfo, GadgetRequestSubmission, ListingInfo, ListingUpdateRequest, LoginRequest,
    LoginResponse, PublicListingInfo, PublicListingQuery, QuestionInfo, QuestionSubmission,
    SellerSubmissionRequest, SettingsUpdateRequest, SettingsUpdateResponse, StatusUpdateRequest,
};
