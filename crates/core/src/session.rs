//! Explicit session state for a logged-in user.
//!
//! The session is an ordinary value passed by the caller into any
//! operation that branches on role. There is no process-wide mutable
//! singleton; the storage collaborator persists and restores sessions
//! as it sees fit.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::roles::UserRole;
use crate::types::Timestamp;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_name: String,
    pub role: UserRole,
    pub logged_in_at: Timestamp,
}

impl Session {
    /// Build a session for a named user. Blank names are rejected.
    pub fn new(
        user_name: impl Into<String>,
        role: UserRole,
        logged_in_at: Timestamp,
    ) -> Result<Self, EvalError> {
        let user_name = user_name.into();
        if user_name.trim().is_empty() {
            return Err(EvalError::Validation(
                "user name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            user_name,
            role,
            logged_in_at,
        })
    }

    /// Only field technicians may verify grower-entered records.
    pub fn can_verify_records(&self) -> bool {
        matches!(self.role, UserRole::Technician)
    }
}
