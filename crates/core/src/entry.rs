//! Daily data-entry record validation.
//!
//! Growers submit daily metrics and production counts; field
//! technicians may additionally attach a verification sign-off to
//! grower-entered data. Validation is pure; persistence and sync are
//! the caller's concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::session::Session;
use crate::types::Timestamp;

/// Maximum length of the free-text notes field.
pub const MAX_NOTES_LENGTH: usize = 2000;

/// A technician's sign-off on a grower-entered record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicianVerification {
    pub verified_by: String,
    pub verified_at: Timestamp,
}

/// One day's worth of manually entered farm data. Fields are optional
/// because growers fill in whichever tabs apply that day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub mortality_count: Option<u32>,
    pub feed_consumption_kg: Option<f64>,
    pub avg_weight_kg: Option<f64>,
    pub chicks_loaded: Option<u32>,
    pub harvested: Option<u32>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub verification: Option<TechnicianVerification>,
}

/// Validate a daily entry against the submitting session.
///
/// Numeric fields must be finite and non-negative; the verification
/// block is only permitted when the session belongs to a technician.
pub fn validate_entry(entry: &DailyEntry, session: &Session) -> Result<(), EvalError> {
    validate_quantity(entry.feed_consumption_kg, "feed_consumption_kg")?;
    validate_quantity(entry.avg_weight_kg, "avg_weight_kg")?;

    if entry.notes.len() > MAX_NOTES_LENGTH {
        return Err(EvalError::Validation(format!(
            "notes exceed maximum length of {MAX_NOTES_LENGTH}"
        )));
    }

    if let Some(verification) = &entry.verification {
        if !session.can_verify_records() {
            return Err(EvalError::Forbidden(
                "only field technicians can verify records".to_string(),
            ));
        }
        if verification.verified_by.trim().is_empty() {
            return Err(EvalError::Validation(
                "verification must name the verifying technician".to_string(),
            ));
        }
    }

    Ok(())
}

fn validate_quantity(value: Option<f64>, name: &str) -> Result<(), EvalError> {
    if let Some(v) = value {
        if !v.is_finite() {
            return Err(EvalError::Validation(format!(
                "{name} must be finite, got {v}"
            )));
        }
        if v < 0.0 {
            return Err(EvalError::Validation(format!(
                "{name} must not be negative, got {v}"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;
    use crate::roles::UserRole;

    fn grower_session() -> Session {
        Session::new("Juan Dela Cruz", UserRole::Grower, Utc::now()).unwrap()
    }

    fn technician_session() -> Session {
        Session::new("Maria Santos", UserRole::Technician, Utc::now()).unwrap()
    }

    fn basic_entry() -> DailyEntry {
        DailyEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            mortality_count: Some(4),
            feed_consumption_kg: Some(310.5),
            avg_weight_kg: Some(2.3),
            chicks_loaded: None,
            harvested: None,
            notes: "Flock active, water lines flushed".to_string(),
            verification: None,
        }
    }

    #[test]
    fn valid_grower_entry_passes() {
        assert!(validate_entry(&basic_entry(), &grower_session()).is_ok());
    }

    #[test]
    fn negative_feed_rejected() {
        let mut entry = basic_entry();
        entry.feed_consumption_kg = Some(-1.0);
        assert_matches!(
            validate_entry(&entry, &grower_session()),
            Err(EvalError::Validation(_))
        );
    }

    #[test]
    fn non_finite_weight_rejected() {
        let mut entry = basic_entry();
        entry.avg_weight_kg = Some(f64::NAN);
        assert_matches!(
            validate_entry(&entry, &grower_session()),
            Err(EvalError::Validation(_))
        );
    }

    #[test]
    fn oversized_notes_rejected() {
        let mut entry = basic_entry();
        entry.notes = "x".repeat(MAX_NOTES_LENGTH + 1);
        assert_matches!(
            validate_entry(&entry, &grower_session()),
            Err(EvalError::Validation(_))
        );
    }

    #[test]
    fn grower_cannot_attach_verification() {
        let mut entry = basic_entry();
        entry.verification = Some(TechnicianVerification {
            verified_by: "Maria Santos".to_string(),
            verified_at: Utc::now(),
        });
        assert_matches!(
            validate_entry(&entry, &grower_session()),
            Err(EvalError::Forbidden(_))
        );
    }

    #[test]
    fn technician_verification_passes() {
        let mut entry = basic_entry();
        entry.verification = Some(TechnicianVerification {
            verified_by: "Maria Santos".to_string(),
            verified_at: Utc::now(),
        });
        assert!(validate_entry(&entry, &technician_session()).is_ok());
    }

    #[test]
    fn anonymous_verification_rejected() {
        let mut entry = basic_entry();
        entry.verification = Some(TechnicianVerification {
            verified_by: "  ".to_string(),
            verified_at: Utc::now(),
        });
        assert_matches!(
            validate_entry(&entry, &technician_session()),
            Err(EvalError::Validation(_))
        );
    }

    #[test]
    fn empty_entry_is_valid() {
        let entry = DailyEntry {
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
            mortality_count: None,
            feed_consumption_kg: None,
            avg_weight_kg: None,
            chicks_loaded: None,
            harvested: None,
            notes: String::new(),
            verification: None,
        };
        assert!(validate_entry(&entry, &grower_session()).is_ok());
    }
}
