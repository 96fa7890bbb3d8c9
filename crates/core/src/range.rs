//! Range classification for environmental readings.
//!
//! Maps a raw sensor reading (temperature, humidity) to a status tag
//! given a closed optimal interval. Pure logic; the caller fetches the
//! reading and the configured range and passes both in.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::metric_names::{METRIC_HUMIDITY, METRIC_TEMPERATURE};
use crate::types::Tier;

/// Where a reading falls relative to its optimal range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeStatus {
    Optimal,
    TooLow,
    TooHigh,
}

impl RangeStatus {
    /// Domain display label for a classified reading.
    ///
    /// Temperature and humidity carry the labels the dashboard badges
    /// use; other metrics get a generic label.
    pub fn label_for(self, metric: &str) -> &'static str {
        match (self, metric) {
            (Self::Optimal, _) => "Optimal",
            (Self::TooLow, METRIC_TEMPERATURE) => "Too Cold",
            (Self::TooHigh, METRIC_TEMPERATURE) => "Too Hot",
            (Self::TooLow, METRIC_HUMIDITY) => "Too Dry",
            (Self::TooHigh, METRIC_HUMIDITY) => "Too Humid",
            (Self::TooLow, _) => "Too Low",
            (Self::TooHigh, _) => "Too High",
        }
    }
}

/// Inclusive `[low, high]` interval of acceptable readings for a metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimalRange {
    pub low: f64,
    pub high: f64,
    /// Tier assigned to readings below the range. Readings above the
    /// range are always `Critical`; below-range severity differs per
    /// metric (a cold barn is critical, a dry one is only a warning).
    pub below_tier: Tier,
    /// Full-scale value for the display gauge (e.g. 40 for a 0-40 degC
    /// temperature gauge).
    pub full_scale: f64,
}

impl OptimalRange {
    /// Build a validated range. Fails if the bounds are non-finite,
    /// inverted, or the gauge scale is not positive.
    pub fn new(low: f64, high: f64, below_tier: Tier, full_scale: f64) -> Result<Self, EvalError> {
        let range = Self {
            low,
            high,
            below_tier,
            full_scale,
        };
        range.validate()?;
        Ok(range)
    }

    /// Validate an already-constructed range (e.g. one deserialized from
    /// a configuration override).
    pub fn validate(&self) -> Result<(), EvalError> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(EvalError::Validation(format!(
                "range bounds must be finite, got [{}, {}]",
                self.low, self.high
            )));
        }
        if self.low > self.high {
            return Err(EvalError::Validation(format!(
                "range low {} exceeds high {}",
                self.low, self.high
            )));
        }
        if !self.full_scale.is_finite() || self.full_scale <= 0.0 {
            return Err(EvalError::Validation(format!(
                "gauge full scale must be positive, got {}",
                self.full_scale
            )));
        }
        Ok(())
    }

    /// Whether a value lies within the range, bounds inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Output of classifying one reading against its optimal range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub metric_name: String,
    pub value: f64,
    pub status: RangeStatus,
    pub tier: Tier,
}

/// Classify a reading against an optimal range.
///
/// Bounds are inclusive: a reading exactly at `low` or `high` is
/// `Optimal`. Non-finite readings are rejected.
pub fn classify(
    metric_name: &str,
    value: f64,
    range: &OptimalRange,
) -> Result<EvaluationResult, EvalError> {
    if !value.is_finite() {
        return Err(EvalError::InvalidInput(format!(
            "{metric_name} reading must be finite, got {value}"
        )));
    }

    let (status, tier) = if value < range.low {
        (RangeStatus::TooLow, range.below_tier)
    } else if value > range.high {
        (RangeStatus::TooHigh, Tier::Critical)
    } else {
        (RangeStatus::Optimal, Tier::Good)
    };

    Ok(EvaluationResult {
        metric_name: metric_name.to_string(),
        value,
        status,
        tier,
    })
}

/// Gauge fill for a reading, as a percentage of the range's full scale,
/// clamped to `[0, 100]`.
pub fn gauge_percent(value: f64, range: &OptimalRange) -> f64 {
    (value / range.full_scale * 100.0).clamp(0.0, 100.0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
