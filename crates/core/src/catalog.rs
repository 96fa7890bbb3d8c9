//! Default poultry monitoring configuration.
//!
//! Optimal environmental ranges and industry-standard references for a
//! broiler grow-out, plus JSON override loaders for deployments that
//! tune them. Defaults are static; nothing here is mutated at runtime.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::error::EvalError;
use crate::metric_names::{
    METRIC_DAILY_GAIN, METRIC_FCR, METRIC_FEED_EFFICIENCY, METRIC_HUMIDITY, METRIC_LIVEABILITY,
    METRIC_MORTALITY_RATE, METRIC_TEMPERATURE,
};
use crate::range::OptimalRange;
use crate::standards::{Direction, StandardReference};
use crate::types::Tier;

// ---------------------------------------------------------------------------
// Environmental range defaults
// ---------------------------------------------------------------------------

/// Optimal barn temperature band for broilers, degrees Celsius.
pub const TEMP_RANGE_LOW_C: f64 = 20.0;
pub const TEMP_RANGE_HIGH_C: f64 = 30.0;
/// Temperature gauge runs 0-40 degC on the dashboard.
pub const TEMP_GAUGE_FULL_SCALE_C: f64 = 40.0;

/// Optimal relative humidity band, percent.
pub const HUMIDITY_RANGE_LOW_PCT: f64 = 50.0;
pub const HUMIDITY_RANGE_HIGH_PCT: f64 = 70.0;

/// Default temperature range: both cold and hot barns are critical.
pub fn default_temperature_range() -> OptimalRange {
    OptimalRange {
        low: TEMP_RANGE_LOW_C,
        high: TEMP_RANGE_HIGH_C,
        below_tier: Tier::Critical,
        full_scale: TEMP_GAUGE_FULL_SCALE_C,
    }
}

/// Default humidity range: dry air is a warning, humid air is critical.
pub fn default_humidity_range() -> OptimalRange {
    OptimalRange {
        low: HUMIDITY_RANGE_LOW_PCT,
        high: HUMIDITY_RANGE_HIGH_PCT,
        below_tier: Tier::Warning,
        full_scale: 100.0,
    }
}

/// Default optimal range for a canonical environmental metric.
pub fn default_range_for(metric: &str) -> Option<OptimalRange> {
    match metric {
        METRIC_TEMPERATURE => Some(default_temperature_range()),
        METRIC_HUMIDITY => Some(default_humidity_range()),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Industry standard defaults
// ---------------------------------------------------------------------------

/// Industry-standard references for the standards-comparison view.
pub fn default_standards() -> Vec<StandardReference> {
    vec![
        StandardReference {
            metric: METRIC_MORTALITY_RATE.to_string(),
            value: 3.5,
            unit: "%".to_string(),
            direction: Direction::LowerIsBetter,
            description: "Birds lost as a share of birds placed".to_string(),
        },
        StandardReference {
            metric: METRIC_FCR.to_string(),
            value: 1.75,
            unit: String::new(),
            direction: Direction::LowerIsBetter,
            description: "Kilograms of feed per kilogram of live weight".to_string(),
        },
        StandardReference {
            metric: METRIC_DAILY_GAIN.to_string(),
            value: 0.30,
            unit: "kg".to_string(),
            direction: Direction::HigherIsBetter,
            description: "Average daily weight gain per bird".to_string(),
        },
        StandardReference {
            metric: METRIC_LIVEABILITY.to_string(),
            value: 96.5,
            unit: "%".to_string(),
            direction: Direction::HigherIsBetter,
            description: "Share of birds surviving to harvest".to_string(),
        },
        StandardReference {
            metric: METRIC_FEED_EFFICIENCY.to_string(),
            value: 1.80,
            unit: String::new(),
            direction: Direction::LowerIsBetter,
            description: "Feed input per unit of output".to_string(),
        },
    ]
}

// ---------------------------------------------------------------------------
// JSON override loaders
// ---------------------------------------------------------------------------

/// Raw shape of a range override entry before validation.
#[derive(Debug, Clone, Deserialize)]
struct RangeOverride {
    metric: String,
    low: f64,
    high: f64,
    #[serde(default)]
    below_tier: Option<Tier>,
    #[serde(default)]
    full_scale: Option<f64>,
}

/// Parse a JSON array of range overrides into validated `(metric, range)`
/// pairs.
///
/// `below_tier` defaults to `Critical` and `full_scale` to the range
/// high bound when omitted.
pub fn parse_ranges_json(
    json: &serde_json::Value,
) -> Result<Vec<(String, OptimalRange)>, EvalError> {
    let overrides: Vec<RangeOverride> = serde_json::from_value(json.clone())
        .map_err(|e| EvalError::Validation(format!("malformed range overrides: {e}")))?;

    let mut seen = BTreeSet::new();
    let mut ranges = Vec::with_capacity(overrides.len());
    for entry in overrides {
        if entry.metric.trim().is_empty() {
            return Err(EvalError::Validation(
                "range override metric name must not be empty".to_string(),
            ));
        }
        if !seen.insert(entry.metric.clone()) {
            return Err(EvalError::Validation(format!(
                "duplicate range override for metric '{}'",
                entry.metric
            )));
        }
        let range = OptimalRange::new(
            entry.low,
            entry.high,
            entry.below_tier.unwrap_or(Tier::Critical),
            entry.full_scale.unwrap_or(entry.high),
        )?;
        ranges.push((entry.metric, range));
    }
    Ok(ranges)
}

/// Parse a JSON array of standard references, rejecting empty metric
/// names, non-finite values, and duplicate metrics.
pub fn parse_standards_json(
    json: &serde_json::Value,
) -> Result<Vec<StandardReference>, EvalError> {
    let standards: Vec<StandardReference> = serde_json::from_value(json.clone())
        .map_err(|e| EvalError::Validation(format!("malformed standards: {e}")))?;

    let mut seen = BTreeSet::new();
    for standard in &standards {
        if standard.metric.trim().is_empty() {
            return Err(EvalError::Validation(
                "standard metric name must not be empty".to_string(),
            ));
        }
        if !standard.value.is_finite() {
            return Err(EvalError::Validation(format!(
                "standard value for '{}' must be finite, got {}",
                standard.metric, standard.value
            )));
        }
        if !seen.insert(standard.metric.clone()) {
            return Err(EvalError::Validation(format!(
                "duplicate standard for metric '{}'",
                standard.metric
            )));
        }
    }
    Ok(standards)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
