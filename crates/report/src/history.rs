//! Historical performance data summarization.
//!
//! Date-range filtering, per-metric averaging, and day-over-day trend
//! derivation for the historical data view. The caller loads records
//! from wherever they live and passes them in.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use poultrywatch_core::error::EvalError;

/// Total-feed delta below which a day-over-day trend counts as neutral.
pub const TREND_EPSILON_KG: f64 = 5.0;

/// One day's recorded performance metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub date: NaiveDate,
    pub mortality_rate: f64,
    pub feed_efficiency: f64,
    pub weight_gain_kg: f64,
    pub total_feed_kg: f64,
}

/// Averages over a set of historical records.
#[derive(Debug, Clone, Serialize)]
pub struct HistorySummary {
    pub records: usize,
    pub avg_mortality_rate: f64,
    pub avg_feed_efficiency: f64,
    pub avg_weight_gain_kg: f64,
    pub avg_total_feed_kg: f64,
}

/// Day-over-day movement of total feed consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Records whose date falls within `[from, to]`, both inclusive.
pub fn filter_range(
    records: &[HistoricalRecord],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<HistoricalRecord> {
    records
        .iter()
        .filter(|r| r.date >= from && r.date <= to)
        .cloned()
        .collect()
}

/// Average each metric over the given records.
///
/// Fails with `InvalidInput` when there is nothing to average.
pub fn summarize(records: &[HistoricalRecord]) -> Result<HistorySummary, EvalError> {
    if records.is_empty() {
        return Err(EvalError::InvalidInput(
            "cannot summarize an empty record set".to_string(),
        ));
    }

    let n = records.len() as f64;
    Ok(HistorySummary {
        records: records.len(),
        avg_mortality_rate: records.iter().map(|r| r.mortality_rate).sum::<f64>() / n,
        avg_feed_efficiency: records.iter().map(|r| r.feed_efficiency).sum::<f64>() / n,
        avg_weight_gain_kg: records.iter().map(|r| r.weight_gain_kg).sum::<f64>() / n,
        avg_total_feed_kg: records.iter().map(|r| r.total_feed_kg).sum::<f64>() / n,
    })
}

/// Trend of one record relative to the previous day's total feed.
pub fn feed_trend(previous: &HistoricalRecord, current: &HistoricalRecord) -> Trend {
    let delta = current.total_feed_kg - previous.total_feed_kg;
    if delta > TREND_EPSILON_KG {
        Trend::Up
    } else if delta < -TREND_EPSILON_KG {
        Trend::Down
    } else {
        Trend::Neutral
    }
}

/// Per-record trends for a chronological record list. The first record
/// has no predecessor and is always `Neutral`.
pub fn trends(records: &[HistoricalRecord]) -> Vec<Trend> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            if i == 0 {
                Trend::Neutral
            } else {
                feed_trend(&records[i - 1], record)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
