//! Performance report assembly.
//!
//! Builds the weekly performance report from historical records and the
//! configured industry standards: trailing-window averages, per-metric
//! standards scores, the aggregate score, and the derived analysis and
//! recommendation lines. Output is plain fields; the export
//! collaborator owns formatting.

use serde::Serialize;
use tracing::debug;

use poultrywatch_core::error::EvalError;
use poultrywatch_core::metric_names::{
    display_name, METRIC_DAILY_GAIN, METRIC_FCR, METRIC_FEED_EFFICIENCY, METRIC_MORTALITY_RATE,
};
use poultrywatch_core::performance::{aggregate, AggregateScore};
use poultrywatch_core::standards::{score, ScoredMetric, StandardReference};
use poultrywatch_core::types::{Tier, Timestamp};

use crate::history::{filter_range, summarize, HistoricalRecord};

/// Reports average over the trailing seven calendar days, inclusive of
/// the generation day.
pub const WEEKLY_WINDOW_DAYS: u64 = 7;

/// Trailing-window averages feeding the report.
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyAverages {
    pub mortality_rate: f64,
    pub feed_efficiency: f64,
    pub weight_gain_kg: f64,
    pub total_feed_kg: f64,
}

/// The assembled report, ready for export.
#[derive(Debug, Clone, Serialize)]
pub struct PerformanceReport {
    pub generated_at: Timestamp,
    pub weekly_average: WeeklyAverages,
    pub overall: AggregateScore,
    /// Banner label derived from the overall tier.
    pub status_label: &'static str,
    pub metrics: Vec<ScoredMetric>,
    pub analysis: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Compute trailing-window averages ending at `today`.
///
/// Fails with `InvalidInput` when the window contains no records.
pub fn weekly_averages(
    records: &[HistoricalRecord],
    today: chrono::NaiveDate,
) -> Result<WeeklyAverages, EvalError> {
    let from = today
        .checked_sub_days(chrono::Days::new(WEEKLY_WINDOW_DAYS - 1))
        .ok_or_else(|| EvalError::InvalidInput(format!("window start underflows from {today}")))?;

    let window = filter_range(records, from, today);
    debug!(total = records.len(), in_window = window.len(), %from, %today, "computed weekly window");

    let summary = summarize(&window)?;
    Ok(WeeklyAverages {
        mortality_rate: summary.avg_mortality_rate,
        feed_efficiency: summary.avg_feed_efficiency,
        weight_gain_kg: summary.avg_weight_gain_kg,
        total_feed_kg: summary.avg_total_feed_kg,
    })
}

/// The weekly average backing a standard metric, if history carries one.
fn weekly_value(metric: &str, weekly: &WeeklyAverages) -> Option<f64> {
    match metric {
        METRIC_MORTALITY_RATE => Some(weekly.mortality_rate),
        METRIC_FCR | METRIC_FEED_EFFICIENCY => Some(weekly.feed_efficiency),
        METRIC_DAILY_GAIN => Some(weekly.weight_gain_kg),
        _ => None,
    }
}

fn analysis_line(scored: &ScoredMetric) -> String {
    let label = display_name(&scored.metric);
    match scored.tier {
        Tier::Good => format!("{label} is within acceptable range"),
        Tier::Warning => format!("{label} is slightly off standard"),
        Tier::Critical => format!("{label} is well outside standard"),
    }
}

fn recommendation_line(scored: &ScoredMetric) -> String {
    let label = display_name(&scored.metric);
    match scored.tier {
        Tier::Good => format!("Continue current practices for {label}"),
        Tier::Warning => format!("Review {label} drivers to close the gap to standard"),
        Tier::Critical => format!("Take immediate corrective action on {label}"),
    }
}

/// Assemble the full performance report.
///
/// Standards without a backing weekly average (e.g. liveability, which
/// is computed at harvest) are skipped. Fails with `InvalidInput` when
/// the weekly window is empty or no standard has a backing value.
pub fn build_report(
    records: &[HistoricalRecord],
    standards: &[StandardReference],
    generated_at: Timestamp,
) -> Result<PerformanceReport, EvalError> {
    let weekly = weekly_averages(records, generated_at.date_naive())?;

    let mut metrics = Vec::new();
    for standard in standards {
        if let Some(current) = weekly_value(&standard.metric, &weekly) {
            metrics.push(score(current, standard)?);
        }
    }

    let percentages: Vec<f64> = metrics.iter().map(|m| m.percentage).collect();
    let overall = aggregate(&percentages)?;

    let analysis = metrics.iter().map(analysis_line).collect();
    let recommendations = metrics.iter().map(recommendation_line).collect();

    debug!(
        metrics = metrics.len(),
        overall_score = overall.overall_score,
        "assembled performance report"
    );

    Ok(PerformanceReport {
        generated_at,
        weekly_average: weekly,
        overall,
        status_label: overall.tier.status_label(),
        metrics,
        analysis,
        recommendations,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
