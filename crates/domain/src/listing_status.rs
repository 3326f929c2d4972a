// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Listing lifecycle status and transition rules.
//!
//! This module defines listing states and the rule set governing
//! administrator-initiated status changes. Status transitions are
//! operator-initiated only; the system never advances status on its own.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states for a gadget listing.
///
/// Listings are never removed from storage; `Deleted` is a soft delete
/// and a deleted listing can be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingStatus {
    /// Submitted by a seller, awaiting administrator review and pricing.
    Pending,
    /// Reviewed, priced, and publicly visible.
    Available,
    /// Sale concluded.
    Sold,
    /// Soft-deleted. Restorable.
    Deleted,
}

/// Statuses a bulk operation may apply.
///
/// `Pending` is deliberately absent: listings re-enter review one at a
/// time, never in bulk.
pub const BULK_STATUS_TARGETS: [ListingStatus; 3] = [
    ListingStatus::Available,
    ListingStatus::Deleted,
    ListingStatus::Sold,
];

impl ListingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Available => "available",
            Self::Sold => "sold",
            Self::Deleted => "deleted",
        }
    }

    /// Resolves a single-listing status change request against the
    /// current status.
    ///
    /// The rule set is deliberately asymmetric and must stay that way:
    ///
    /// - a `Pending` listing asked to become `Deleted` is soft-rejected
    ///   (it stays in storage, marked `Deleted`, and can be restored);
    /// - a `Deleted` listing asked to become `Available` or `Pending` is
    ///   restored to the requested status;
    /// - every other pair applies the requested status directly, with no
    ///   validation beyond enum membership. That includes
    ///   `Deleted` → `Sold`, which is accepted as-is.
    #[must_use]
    pub const fn resolve_transition(self, requested: Self) -> Self {
        match (self, requested) {
            // Restoring a soft-deleted listing back into circulation.
            (Self::Deleted, Self::Available | Self::Pending) => requested,
            // Rejecting a pending submission soft-deletes it.
            (Self::Pending, Self::Deleted) => Self::Deleted,
            // Everything else is applied unconditionally.
            _ => requested,
        }
    }

    /// Validates a bulk operation target.
    ///
    /// Bulk changes accept only `Available`, `Deleted`, and `Sold`; the
    /// target is applied uniformly to every matched listing, bypassing
    /// [`resolve_transition`](Self::resolve_transition). The two rule
    /// sets are intentionally separate.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBulkTarget` if the target is not in
    /// the allowed set.
    pub fn validate_bulk_target(self) -> Result<(), DomainError> {
        if matches!(self, Self::Available | Self::Deleted | Self::Sold) {
            Ok(())
        } else {
            Err(DomainError::InvalidBulkTarget {
                target: self.as_str().to_string(),
            })
        }
    }

    /// Returns true if a listing in this status with the given price is
    /// publicly visible.
    ///
    /// A listing is browsable only once an administrator has published it
    /// and set a listing price.
    #[must_use]
    pub const fn is_publicly_visible(self, listing_price: Option<f64>) -> bool {
        matches!(self, Self::Available) && listing_price.is_some()
    }
}

impl FromStr for ListingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "available" => Ok(Self::Available),
            "sold" => Ok(Self::Sold),
            "deleted" => Ok(Self::Deleted),
            _ => Err(DomainError::InvalidListingStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
