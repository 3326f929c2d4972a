// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The gadget type string is not a recognized value.
    InvalidGadgetType(String),
    /// The condition string is not a recognized value.
    InvalidCondition(String),
    /// The listing status string is not a recognized value.
    InvalidListingStatus(String),
    /// The requested bulk target is outside the allowed set.
    InvalidBulkTarget {
        /// The rejected target status.
        target: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidGadgetType(value) => {
                write!(
                    f,
                    "Invalid gadget type: '{value}'. Must be 'phone', 'laptop', or 'other'"
                )
            }
            Self::InvalidCondition(value) => {
                write!(
                    f,
                    "Invalid condition: '{value}'. Must be 'new', 'used', or 'open_box'"
                )
            }
            Self::InvalidListingStatus(value) => {
                write!(
                    f,
                    "Invalid listing status: '{value}'. Must be 'pending', 'available', 'sold', or 'deleted'"
                )
            }
            Self::InvalidBulkTarget { target } => {
                write!(
                    f,
                    "Invalid bulk action '{target}'. Must be 'available', 'deleted', or 'sold'"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
