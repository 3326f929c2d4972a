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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use gadget_market_api::{
    AdminListingRequest, ApiError, BulkStatusRequest, BulkStatusResponse, DashboardResponse,
    GadgetRequestInfo, GadgetRequestSubmission, ListingInfo, ListingUpdateRequest, LoginRequest,
    LoginResponse, PublicListingInfo, PublicListingQuery, QuestionInfo, QuestionSubmission,
    SellerSubmissionRequest, SettingsUpdateRequest, SettingsUpdateResponse, StatusUpdateRequest,
};
use gadget_market_persistence::Persistence;

mod session;
mod uploads;

use session::SessionAdmin;
use uploads::{ListingForm, UploadError};

/// Gadget Market Server - HTTP server for the gadget resale marketplace
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Directory where uploaded photos are stored and served from
    #[arg(short, long, default_value = "uploads")]
    uploads_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Maintenance subcommands that run instead of the server.
#[derive(Debug, Subcommand)]
enum Command {
    /// Provision an administrator account, then exit.
    CreateAdmin {
        /// The admin username.
        #[arg(long)]
        username: String,

        /// The admin password (validated against the password policy).
        #[arg(long)]
        password: String,
    },
}

/// Application state shared across handlers.
///
/// This contains the persistence layer wrapped in a Mutex to allow
/// safe concurrent access, plus the photo storage location.
#[derive(Clone)]
struct AppState {
    /// The persistence layer for all marketplace tables.
    persistence: Arc<Mutex<Persistence>>,
    /// Directory where uploaded photos live.
    uploads_dir: Arc<PathBuf>,
}

/// Form credentials for admin login.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct LoginForm {
    /// The admin username.
    username: String,
    /// The plain-text password.
    password: String,
}

/// Request body for resolving a gadget request.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ResolveRequestApiRequest {
    /// The new resolved flag.
    is_resolved: bool,
}

/// Generic success response for operations with no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SuccessResponse {
    /// Success indicator.
    success: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `ok` while the process is serving.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal API error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<UploadError> for HttpError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::Io(_) => {
                error!(error = %err, "Photo storage error");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
            _ => Self {
                status: StatusCode::BAD_REQUEST,
                message: err.to_string(),
            },
        }
    }
}

/// Extracts the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, HttpError> {
    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: String::from("Missing or invalid Authorization header"),
        })
}

/// Handler for GET /health endpoint.
#[allow(clippy::unused_async)]
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST /admin/login endpoint.
///
/// Exchanges form credentials for a bearer token.
async fn handle_admin_login(
    AxumState(app_state): AxumState<AppState>,
    axum::extract::Form(form): axum::extract::Form<LoginForm>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(username = %form.username, "Handling admin login request");

    let mut persistence = app_state.persistence.lock().await;
    let response: LoginResponse = gadget_market_api::login(
        &mut persistence,
        &LoginRequest {
            username: form.username,
            password: form.password,
        },
    )?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /admin/logout endpoint.
///
/// Deletes the presented session.
async fn handle_admin_logout(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<SuccessResponse>, HttpError> {
    let token: &str = bearer_token(&headers)?;

    let mut persistence = app_state.persistence.lock().await;
    gadget_market_api::logout(&mut persistence, token)?;
    drop(persistence);

    info!("Admin logged out");

    Ok(Json(SuccessResponse { success: true }))
}

/// Handler for POST /seller/submit endpoint.
///
/// Accepts a multipart listing submission from a seller. The photo is
/// stored first; the listing enters the review queue as `pending`.
async fn handle_seller_submit(
    AxumState(app_state): AxumState<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ListingInfo>, HttpError> {
    let form: ListingForm = uploads::read_listing_form(&mut multipart).await?;

    info!(name = %form.name, "Handling seller submission");

    let photo_url: String =
        uploads::save_photo(&app_state.uploads_dir, &form.photo_file_name, &form.photo_bytes)
            .await?;

    let request: SellerSubmissionRequest = SellerSubmissionRequest {
        name: form.name,
        gadget_type: form.gadget_type,
        condition: form.condition,
        description: form.description,
        seller_price: form.seller_price,
        seller_contact_info: form.seller_contact_info,
        photo_url,
    };

    let mut persistence = app_state.persistence.lock().await;
    let listing: ListingInfo = gadget_market_api::submit_listing(&mut persistence, &request)?;
    drop(persistence);

    Ok(Json(listing))
}

/// Handler for POST /admin/add endpoint.
///
/// Accepts a multipart listing from an authenticated admin. A listing
/// price is required and the listing is published immediately.
async fn handle_admin_add(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin, _): SessionAdmin,
    mut multipart: Multipart,
) -> Result<Json<ListingInfo>, HttpError> {
    let form: ListingForm = uploads::read_listing_form(&mut multipart).await?;

    let listing_price: f64 = form.listing_price.ok_or_else(|| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: String::from("Missing required field: listing_price"),
    })?;

    info!(name = %form.name, username = %admin.username, "Handling admin add listing");

    let photo_url: String =
        uploads::save_photo(&app_state.uploads_dir, &form.photo_file_name, &form.photo_bytes)
            .await?;

    let request: AdminListingRequest = AdminListingRequest {
        name: form.name,
        gadget_type: form.gadget_type,
        condition: form.condition,
        description: form.description,
        seller_price: form.seller_price,
        listing_price,
        seller_contact_info: form.seller_contact_info,
        photo_url,
    };

    let mut persistence = app_state.persistence.lock().await;
    let listing: ListingInfo = gadget_market_api::add_listing(&mut persistence, &request)?;
    drop(persistence);

    Ok(Json(listing))
}

/// Handler for GET /admin/dashboard endpoint.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(admin, _): SessionAdmin,
) -> Result<Json<DashboardResponse>, HttpError> {
    info!(username = %admin.username, "Handling dashboard request");

    let mut persistence = app_state.persistence.lock().await;
    let dashboard: DashboardResponse = gadget_market_api::get_dashboard(&mut persistence)?;
    drop(persistence);

    Ok(Json(dashboard))
}

/// Handler for GET /admin/listings/pending endpoint.
async fn handle_pending_listings(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(_, _): SessionAdmin,
) -> Result<Json<Vec<ListingInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let pending: Vec<ListingInfo> = gadget_market_api::list_pending_listings(&mut persistence)?;
    drop(persistence);

    Ok(Json(pending))
}

/// Handler for PUT `/admin/listings/{listing_id}` endpoint.
///
/// Applies a partial field update.
async fn handle_update_listing(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(_, _): SessionAdmin,
    Path(listing_id): Path<i64>,
    Json(request): Json<ListingUpdateRequest>,
) -> Result<Json<ListingInfo>, HttpError> {
    info!(listing_id, "Handling listing update request");

    let mut persistence = app_state.persistence.lock().await;
    let listing: ListingInfo =
        gadget_market_api::update_listing(&mut persistence, listing_id, &request)?;
    drop(persistence);

    Ok(Json(listing))
}

/// Handler for PATCH `/admin/listings/{listing_id}/status` endpoint.
///
/// Applies a single-listing status change through the lifecycle rules.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(_, _): SessionAdmin,
    Path(listing_id): Path<i64>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<ListingInfo>, HttpError> {
    info!(listing_id, status = %request.status, "Handling status change request");

    let mut persistence = app_state.persistence.lock().await;
    let listing: ListingInfo =
        gadget_market_api::change_listing_status(&mut persistence, listing_id, &request)?;
    drop(persistence);

    Ok(Json(listing))
}

/// Handler for POST /admin/listings/bulk endpoint.
///
/// Applies a status uniformly to an id set.
async fn handle_bulk_update(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(_, _): SessionAdmin,
    Json(request): Json<BulkStatusRequest>,
) -> Result<Json<BulkStatusResponse>, HttpError> {
    info!(
        action = %request.action,
        count = request.listing_ids.len(),
        "Handling bulk status request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: BulkStatusResponse =
        gadget_market_api::bulk_update_listings(&mut persistence, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST /admin/settings endpoint.
async fn handle_update_settings(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(_, _): SessionAdmin,
    Json(request): Json<SettingsUpdateRequest>,
) -> Result<Json<SettingsUpdateResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: SettingsUpdateResponse =
        gadget_market_api::update_settings(&mut persistence, &request)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/admin/questions/{question_id}` endpoint.
async fn handle_delete_question(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(_, _): SessionAdmin,
    Path(question_id): Path<i64>,
) -> Result<StatusCode, HttpError> {
    info!(question_id, "Handling question delete request");

    let mut persistence = app_state.persistence.lock().await;
    gadget_market_api::delete_question(&mut persistence, question_id)?;
    drop(persistence);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for PATCH `/admin/requests/{request_id}/resolve` endpoint.
async fn handle_resolve_request(
    AxumState(app_state): AxumState<AppState>,
    SessionAdmin(_, _): SessionAdmin,
    Path(request_id): Path<i64>,
    Json(request): Json<ResolveRequestApiRequest>,
) -> Result<Json<SuccessResponse>, HttpError> {
    info!(request_id, request.is_resolved, "Handling request resolve");

    let mut persistence = app_state.persistence.lock().await;
    gadget_market_api::resolve_gadget_request(&mut persistence, request_id, request.is_resolved)?;
    drop(persistence);

    Ok(Json(SuccessResponse { success: true }))
}

/// Handler for POST /buyer/question endpoint.
async fn handle_buyer_question(
    AxumState(app_state): AxumState<AppState>,
    Json(submission): Json<QuestionSubmission>,
) -> Result<Json<QuestionInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let question: QuestionInfo =
        gadget_market_api::submit_question(&mut persistence, &submission)?;
    drop(persistence);

    Ok(Json(question))
}

/// Handler for POST /buyer/request endpoint.
async fn handle_buyer_request(
    AxumState(app_state): AxumState<AppState>,
    Json(submission): Json<GadgetRequestSubmission>,
) -> Result<Json<GadgetRequestInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let request: GadgetRequestInfo =
        gadget_market_api::submit_gadget_request(&mut persistence, &submission)?;
    drop(persistence);

    Ok(Json(request))
}

/// Handler for GET /listings endpoint.
///
/// Public browse with optional type/price/condition filters.
async fn handle_public_listings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<PublicListingQuery>,
) -> Result<Json<Vec<PublicListingInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let listings: Vec<PublicListingInfo> =
        gadget_market_api::list_public_listings(&mut persistence, &query)?;
    drop(persistence);

    Ok(Json(listings))
}

/// Handler for GET /listings/approved endpoint.
///
/// Public, unfiltered view of published listings.
async fn handle_approved_listings(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<PublicListingInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let listings: Vec<PublicListingInfo> =
        gadget_market_api::list_public_listings(&mut persistence, &PublicListingQuery::default())?;
    drop(persistence);

    Ok(Json(listings))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    let uploads_dir: PathBuf = (*app_state.uploads_dir).clone();

    Router::new()
        .route("/health", get(handle_health))
        .route("/seller/submit", post(handle_seller_submit))
        .route("/admin/login", post(handle_admin_login))
        .route("/admin/logout", post(handle_admin_logout))
        .route("/admin/add", post(handle_admin_add))
        .route("/admin/dashboard", get(handle_dashboard))
        .route("/admin/listings/pending", get(handle_pending_listings))
        .route("/admin/listings/bulk", post(handle_bulk_update))
        .route("/admin/listings/{listing_id}", put(handle_update_listing))
        .route(
            "/admin/listings/{listing_id}/status",
            patch(handle_update_status),
        )
        .route("/admin/settings", post(handle_update_settings))
        .route(
            "/admin/questions/{question_id}",
            delete(handle_delete_question),
        )
        .route(
            "/admin/requests/{request_id}/resolve",
            patch(handle_resolve_request),
        )
        .route("/buyer/question", post(handle_buyer_question))
        .route("/buyer/request", post(handle_buyer_request))
        .route("/listings", get(handle_public_listings))
        .route("/listings/approved", get(handle_approved_listings))
        .nest_service("/uploads", ServeDir::new(uploads_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Opens the persistence layer per the CLI arguments.
fn open_persistence(database: Option<&str>) -> Result<Persistence, Box<dyn std::error::Error>> {
    let persistence: Persistence = if let Some(db_path) = database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Gadget Market Server");

    let mut persistence: Persistence = open_persistence(args.database.as_deref())?;

    // Provisioning subcommand: run and exit without serving.
    if let Some(Command::CreateAdmin { username, password }) = args.command {
        let admin_id: i64 =
            gadget_market_api::provision_admin(&mut persistence, &username, &password)?;
        info!(admin_id, username = %username, "Admin account created");
        return Ok(());
    }

    // Make sure the photo directory exists before serving from it.
    std::fs::create_dir_all(&args.uploads_dir)?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        uploads_dir: Arc::new(args.uploads_dir),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
