// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The category of a gadget offered for resale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GadgetType {
    /// Mobile phones and similar handhelds.
    Phone,
    /// Laptops and notebooks.
    Laptop,
    /// Anything else (tablets, consoles, accessories).
    Other,
}

impl GadgetType {
    /// Returns the string representation of the gadget type.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
            Self::Laptop => "laptop",
            Self::Other => "other",
        }
    }
}

impl FromStr for GadgetType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "phone" => Ok(Self::Phone),
            "laptop" => Ok(Self::Laptop),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidGadgetType(s.to_string())),
        }
    }
}

impl std::fmt::Display for GadgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The physical condition of a gadget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GadgetCondition {
    /// Unused, factory sealed.
    New,
    /// Previously used.
    Used,
    /// Opened packaging, otherwise unused.
    OpenBox,
}

impl GadgetCondition {
    /// Returns the string representation of the condition.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Used => "used",
            Self::OpenBox => "open_box",
        }
    }
}

impl FromStr for GadgetCondition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "used" => Ok(Self::Used),
            "open_box" => Ok(Self::OpenBox),
            _ => Err(DomainError::InvalidCondition(s.to_string())),
        }
    }
}

impl std::fmt::Display for GadgetCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gadget_type_round_trip() {
        for gadget_type in [GadgetType::Phone, GadgetType::Laptop, GadgetType::Other] {
            let s = gadget_type.as_str();
            match GadgetType::from_str(s) {
                Ok(parsed) => assert_eq!(gadget_type, parsed),
                Err(e) => panic!("Failed to parse gadget type string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_condition_round_trip() {
        for condition in [
            GadgetCondition::New,
            GadgetCondition::Used,
            GadgetCondition::OpenBox,
        ] {
            let s = condition.as_str();
            match GadgetCondition::from_str(s) {
                Ok(parsed) => assert_eq!(condition, parsed),
                Err(e) => panic!("Failed to parse condition string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_gadget_type_rejected() {
        let result = GadgetType::from_str("toaster");
        assert_eq!(
            result,
            Err(DomainError::InvalidGadgetType(String::from("toaster")))
        );
    }

    #[test]
    fn test_invalid_condition_rejected() {
        assert!(GadgetCondition::from_str("mint").is_err());
        // Case matters: values are stored lowercase.
        assert!(GadgetCondition::from_str("New").is_err());
    }
}
