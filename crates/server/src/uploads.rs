// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Multipart listing form parsing and photo storage.
//!
//! Listing submissions arrive as multipart forms carrying text fields plus
//! one photo. The photo is written beneath the uploads directory and served
//! back by filename; only its URL travels further into the system.

use axum::extract::Multipart;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// The multipart field name carrying the photo.
const PHOTO_FIELD: &str = "photo";

/// A parsed multipart listing form.
///
/// `listing_price` is present only on the admin path; the handler decides
/// whether it is required.
#[derive(Debug)]
pub struct ListingForm {
    pub name: String,
    pub gadget_type: String,
    pub condition: String,
    pub description: String,
    pub seller_price: f64,
    pub listing_price: Option<f64>,
    pub seller_contact_info: String,
    pub photo_file_name: String,
    pub photo_bytes: Vec<u8>,
}

/// Errors raised while reading a listing form or storing its photo.
#[derive(Debug)]
pub enum UploadError {
    /// The multipart stream could not be read.
    Multipart(String),
    /// A required text field is missing.
    MissingField(&'static str),
    /// The photo part is missing.
    MissingPhoto,
    /// The photo filename is empty or escapes the uploads directory.
    InvalidFilename(String),
    /// A numeric field could not be parsed.
    InvalidNumber {
        /// The offending field.
        field: &'static str,
        /// The raw value.
        value: String,
    },
    /// Writing the photo to disk failed.
    Io(String),
}

impl std::fmt::Display for UploadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Multipart(msg) => write!(f, "Malformed multipart request: {msg}"),
            Self::MissingField(field) => write!(f, "Missing required field: {field}"),
            Self::MissingPhoto => write!(f, "Missing photo upload"),
            Self::InvalidFilename(name) => write!(f, "Invalid photo filename: '{name}'"),
            Self::InvalidNumber { field, value } => {
                write!(f, "Invalid number for field '{field}': '{value}'")
            }
            Self::Io(msg) => write!(f, "Failed to store photo: {msg}"),
        }
    }
}

impl std::error::Error for UploadError {}

/// Reads a listing submission form.
///
/// Unknown fields are ignored; required text fields and the photo must be
/// present.
///
/// # Errors
///
/// Returns an error if the stream is malformed, a required field is
/// missing, or a numeric field does not parse.
pub async fn read_listing_form(multipart: &mut Multipart) -> Result<ListingForm, UploadError> {
    let mut name: Option<String> = None;
    let mut gadget_type: Option<String> = None;
    let mut condition: Option<String> = None;
    let mut description: Option<String> = None;
    let mut seller_price: Option<f64> = None;
    let mut listing_price: Option<f64> = None;
    let mut seller_contact_info: Option<String> = None;
    let mut photo_file_name: Option<String> = None;
    let mut photo_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.to_string()))?
    {
        let Some(field_name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if field_name == PHOTO_FIELD {
            photo_file_name = field.file_name().map(ToString::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| UploadError::Multipart(e.to_string()))?;
            photo_bytes = Some(bytes.to_vec());
            continue;
        }

        let value: String = field
            .text()
            .await
            .map_err(|e| UploadError::Multipart(e.to_string()))?;

        match field_name.as_str() {
            "name" => name = Some(value),
            "gadget_type" => gadget_type = Some(value),
            "condition" => condition = Some(value),
            "description" => description = Some(value),
            "seller_price" => seller_price = Some(parse_price("seller_price", &value)?),
            "listing_price" => listing_price = Some(parse_price("listing_price", &value)?),
            "seller_contact_info" => seller_contact_info = Some(value),
            other => debug!(field = other, "Ignoring unknown multipart field"),
        }
    }

    let photo_bytes: Vec<u8> = photo_bytes.ok_or(UploadError::MissingPhoto)?;
    let photo_file_name: String = photo_file_name.ok_or(UploadError::MissingPhoto)?;

    Ok(ListingForm {
        name: name.ok_or(UploadError::MissingField("name"))?,
        gadget_type: gadget_type.ok_or(UploadError::MissingField("gadget_type"))?,
        condition: condition.ok_or(UploadError::MissingField("condition"))?,
        description: description.ok_or(UploadError::MissingField("description"))?,
        seller_price: seller_price.ok_or(UploadError::MissingField("seller_price"))?,
        listing_price,
        seller_contact_info: seller_contact_info
            .ok_or(UploadError::MissingField("seller_contact_info"))?,
        photo_file_name,
        photo_bytes,
    })
}

/// Stores a photo beneath the uploads directory and returns its public URL.
///
/// The filename is reduced to its final path component so an upload can
/// never write outside the uploads directory. An upload with an existing
/// name replaces the previous file.
///
/// # Errors
///
/// Returns an error if the filename is unusable or the write fails.
pub async fn save_photo(
    uploads_dir: &Path,
    file_name: &str,
    data: &[u8],
) -> Result<String, UploadError> {
    let sanitized: &str = Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty() && *n != "." && *n != "..")
        .ok_or_else(|| {
            warn!(file_name, "Rejecting unusable photo filename");
            UploadError::InvalidFilename(file_name.to_string())
        })?;

    let target: PathBuf = uploads_dir.join(sanitized);

    tokio::fs::create_dir_all(uploads_dir)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;
    tokio::fs::write(&target, data)
        .await
        .map_err(|e| UploadError::Io(e.to_string()))?;

    debug!(path = %target.display(), "Photo stored");

    Ok(format!("/uploads/{sanitized}"))
}

fn parse_price(field: &'static str, value: &str) -> Result<f64, UploadError> {
    value.parse::<f64>().map_err(|_| UploadError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
