//! Advisory text for out-of-range environmental conditions.

use crate::range::{EvaluationResult, RangeStatus};

/// Recommendation shown under the environmental monitor when either
/// reading is out of range. Returns `None` when both are optimal.
pub fn environment_advice(
    temperature: &EvaluationResult,
    humidity: &EvaluationResult,
) -> Option<&'static str> {
    let temp_ok = temperature.status == RangeStatus::Optimal;
    let humidity_ok = humidity.status == RangeStatus::Optimal;

    match (temp_ok, humidity_ok) {
        (true, true) => None,
        (false, false) => Some("Adjust both temperature and humidity levels"),
        (false, true) => Some("Temperature is outside optimal range"),
        (true, false) => Some("Humidity levels need adjustment"),
    }
}
