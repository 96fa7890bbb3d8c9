//! Aggregate performance scoring.
//!
//! Combines per-metric percentage-of-standard scores into one overall
//! score and tier for the dashboard summary card and report banner.

use serde::Serialize;

use crate::error::EvalError;
use crate::types::Tier;

/// Overall score at or above which performance is `Good`.
pub const AGGREGATE_GOOD_SCORE: u8 = 85;
/// Overall score at or above which performance is `Warning` (below Good).
pub const AGGREGATE_WARNING_SCORE: u8 = 65;

/// Single 0-100 summary of farm performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AggregateScore {
    pub overall_score: u8,
    pub tier: Tier,
}

/// Average a non-empty sequence of per-metric percentages into an
/// overall score, clamped to `[0, 100]` and rounded to the nearest
/// integer.
pub fn aggregate(scores: &[f64]) -> Result<AggregateScore, EvalError> {
    if scores.is_empty() {
        return Err(EvalError::InvalidInput(
            "cannot aggregate an empty score list".to_string(),
        ));
    }
    for score in scores {
        if !score.is_finite() {
            return Err(EvalError::InvalidInput(format!(
                "scores must be finite, got {score}"
            )));
        }
    }

    let mean = scores.iter().sum::<f64>() / scores.len() as f64;
    let overall_score = mean.clamp(0.0, 100.0).round() as u8;

    let tier = if overall_score >= AGGREGATE_GOOD_SCORE {
        Tier::Good
    } else if overall_score >= AGGREGATE_WARNING_SCORE {
        Tier::Warning
    } else {
        Tier::Critical
    };

    Ok(AggregateScore {
        overall_score,
        tier,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
