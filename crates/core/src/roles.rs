//! User roles for the two-role dashboard.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

pub const ROLE_GROWER: &str = "grower";
pub const ROLE_TECHNICIAN: &str = "technician";

/// All valid role strings.
pub const VALID_ROLES: &[&str] = &[ROLE_GROWER, ROLE_TECHNICIAN];

/// Closed two-variant role enum. Role-based branching matches on this,
/// never on raw strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Grower,
    Technician,
}

impl UserRole {
    /// Parse from a stored string value.
    pub fn from_str_value(s: &str) -> Result<Self, EvalError> {
        match s {
            ROLE_GROWER => Ok(Self::Grower),
            ROLE_TECHNICIAN => Ok(Self::Technician),
            _ => Err(EvalError::Validation(format!(
                "Invalid role '{s}'. Must be one of: {}",
                VALID_ROLES.join(", ")
            ))),
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grower => ROLE_GROWER,
            Self::Technician => ROLE_TECHNICIAN,
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Grower => "Poultry Grower",
            Self::Technician => "Field Technician",
        }
    }
}
