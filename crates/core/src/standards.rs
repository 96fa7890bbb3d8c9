//! Standards-comparison scoring.
//!
//! Compares an observed metric against an industry-standard reference,
//! producing a directional percentage-of-standard and a tier. Each
//! reference declares a fixed improvement direction; inferring the
//! direction from the observed value is available only as a fallback
//! for metrics without a declared reference, since inference mis-scores
//! any metric that has regressed past its standard.

use serde::{Deserialize, Serialize};

use crate::error::EvalError;
use crate::types::Tier;

/// Percentage at or above which a scored metric is `Good`.
pub const TIER_GOOD_PCT: f64 = 95.0;
/// Percentage at or above which a scored metric is `Warning` (below Good).
pub const TIER_WARNING_PCT: f64 = 80.0;

/// Which way a metric improves relative to its standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

impl Direction {
    /// Fallback per-call inference for metrics without a declared
    /// direction: treat the current value being below the standard as
    /// lower-is-better.
    pub fn infer(current: f64, standard: f64) -> Self {
        if current < standard {
            Self::LowerIsBetter
        } else {
            Self::HigherIsBetter
        }
    }
}

/// An industry benchmark for a single metric. Static configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardReference {
    /// Canonical metric name (see [`crate::metric_names`]).
    pub metric: String,
    /// The benchmark value.
    pub value: f64,
    /// Display unit ("%", "kg", or empty for ratios).
    pub unit: String,
    pub direction: Direction,
    /// Short description shown alongside the comparison row.
    pub description: String,
}

/// One metric scored against its industry standard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredMetric {
    pub metric: String,
    pub current: f64,
    pub standard: f64,
    pub unit: String,
    /// Percentage-of-standard, clamped to `[0, 100]`.
    pub percentage: f64,
    pub tier: Tier,
}

/// Compute the percentage-of-standard for an observation.
///
/// Lower-is-better metrics score `standard / current`; higher-is-better
/// metrics score `current / standard`. The result is clamped to
/// `[0, 100]`. A zero denominator is only acceptable when both values
/// are zero (a perfect score); otherwise it is an invalid input.
pub fn percentage_vs_standard(
    current: f64,
    standard: f64,
    direction: Direction,
) -> Result<f64, EvalError> {
    if !current.is_finite() || !standard.is_finite() {
        return Err(EvalError::InvalidInput(format!(
            "values must be finite, got current {current} / standard {standard}"
        )));
    }

    let (numerator, denominator) = match direction {
        Direction::LowerIsBetter => (standard, current),
        Direction::HigherIsBetter => (current, standard),
    };

    if denominator == 0.0 {
        if numerator == 0.0 {
            return Ok(100.0);
        }
        return Err(EvalError::InvalidInput(format!(
            "cannot score {numerator} against a zero denominator"
        )));
    }

    Ok((numerator / denominator * 100.0).clamp(0.0, 100.0))
}

/// Derive a tier from a percentage-of-standard score.
pub fn tier_for_percentage(percentage: f64) -> Tier {
    if percentage >= TIER_GOOD_PCT {
        Tier::Good
    } else if percentage >= TIER_WARNING_PCT {
        Tier::Warning
    } else {
        Tier::Critical
    }
}

/// Score an observed value against its declared standard reference.
pub fn score(current: f64, reference: &StandardReference) -> Result<ScoredMetric, EvalError> {
    let percentage = percentage_vs_standard(current, reference.value, reference.direction)?;
    Ok(ScoredMetric {
        metric: reference.metric.clone(),
        current,
        standard: reference.value,
        unit: reference.unit.clone(),
        percentage,
        tier: tier_for_percentage(percentage),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn reference(metric: &str, value: f64, direction: Direction) -> StandardReference {
        StandardReference {
            metric: metric.to_string(),
            value,
            unit: String::new(),
            direction,
            description: String::new(),
        }
    }

    #[test]
    fn below_standard_mortality_scores_full() {
        // 30 against a lower-is-better standard of 35: 35/30 > 100, clamped.
        let pct = percentage_vs_standard(30.0, 35.0, Direction::LowerIsBetter).unwrap();
        assert_eq!(pct, 100.0);
        assert_eq!(tier_for_percentage(pct), Tier::Good);
    }

    #[test]
    fn fcr_above_standard_is_warning() {
        // FCR 1.85 against a lower-is-better standard of 1.75:
        // 1.75 / 1.85 * 100 ~= 94.59, just under the Good threshold.
        let scored = score(1.85, &reference("feed_conversion_ratio", 1.75, Direction::LowerIsBetter))
            .unwrap();
        assert!((scored.percentage - 94.594_594_594).abs() < 1e-6);
        assert_eq!(scored.tier, Tier::Warning);
    }

    #[test]
    fn higher_is_better_above_standard_clamps() {
        let scored = score(0.32, &reference("daily_weight_gain_kg", 0.30, Direction::HigherIsBetter))
            .unwrap();
        assert_eq!(scored.percentage, 100.0);
        assert_eq!(scored.tier, Tier::Good);
    }

    #[test]
    fn higher_is_better_below_standard_scores_proportionally() {
        let scored = score(80.0, &reference("liveability_percent", 96.5, Direction::HigherIsBetter))
            .unwrap();
        assert!((scored.percentage - 82.901_554_404).abs() < 1e-6);
        assert_eq!(scored.tier, Tier::Warning);
    }

    #[test]
    fn deep_regression_is_critical() {
        // Mortality at double the standard with lower-is-better: 50%.
        let pct = percentage_vs_standard(7.0, 3.5, Direction::LowerIsBetter).unwrap();
        assert_eq!(pct, 50.0);
        assert_eq!(tier_for_percentage(pct), Tier::Critical);
    }

    #[test]
    fn zero_over_zero_is_perfect() {
        assert_eq!(
            percentage_vs_standard(0.0, 0.0, Direction::LowerIsBetter).unwrap(),
            100.0
        );
        assert_eq!(
            percentage_vs_standard(0.0, 0.0, Direction::HigherIsBetter).unwrap(),
            100.0
        );
    }

    #[test]
    fn zero_denominator_rejected() {
        assert_matches!(
            percentage_vs_standard(0.0, 3.5, Direction::LowerIsBetter),
            Err(EvalError::InvalidInput(_))
        );
        assert_matches!(
            percentage_vs_standard(1.5, 0.0, Direction::HigherIsBetter),
            Err(EvalError::InvalidInput(_))
        );
    }

    #[test]
    fn non_finite_values_rejected() {
        assert_matches!(
            percentage_vs_standard(f64::NAN, 1.0, Direction::LowerIsBetter),
            Err(EvalError::InvalidInput(_))
        );
        assert_matches!(
            percentage_vs_standard(1.0, f64::INFINITY, Direction::HigherIsBetter),
            Err(EvalError::InvalidInput(_))
        );
    }

    #[test]
    fn negative_reading_clamps_to_zero() {
        let pct = percentage_vs_standard(-1.0, 3.5, Direction::LowerIsBetter).unwrap();
        assert_eq!(pct, 0.0);
        assert_eq!(tier_for_percentage(pct), Tier::Critical);
    }

    #[test]
    fn inference_fallback_matches_observed_side() {
        assert_eq!(Direction::infer(3.2, 3.5), Direction::LowerIsBetter);
        assert_eq!(Direction::infer(1.85, 1.75), Direction::HigherIsBetter);
    }

    #[test]
    fn declared_direction_overrides_inference() {
        // FCR regressed above its standard. Inference would flip to
        // higher-is-better and report a perfect score; the declared
        // direction keeps scoring it honestly.
        let inferred = percentage_vs_standard(1.85, 1.75, Direction::infer(1.85, 1.75)).unwrap();
        assert_eq!(inferred, 100.0);

        let declared = percentage_vs_standard(1.85, 1.75, Direction::LowerIsBetter).unwrap();
        assert!(declared < 95.0);
    }

    #[test]
    fn score_is_idempotent() {
        let standard = reference("feed_efficiency", 1.80, Direction::LowerIsBetter);
        let a = score(1.85, &standard).unwrap();
        let b = score(1.85, &standard).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tier_thresholds_are_inclusive() {
        assert_eq!(tier_for_percentage(95.0), Tier::Good);
        assert_eq!(tier_for_percentage(94.999), Tier::Warning);
        assert_eq!(tier_for_percentage(80.0), Tier::Warning);
        assert_eq!(tier_for_percentage(79.999), Tier::Critical);
    }
}
