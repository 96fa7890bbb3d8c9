//! Shared domain types used across the evaluation engine.

use serde::{Deserialize, Serialize};

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Coarse classification of a metric or an aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Good,
    Warning,
    Critical,
}

impl Tier {
    /// Badge label for a per-metric standards-comparison row.
    pub fn badge_label(self) -> &'static str {
        match self {
            Self::Good => "Above Standard",
            Self::Warning => "Needs Improvement",
            Self::Critical => "Critical",
        }
    }

    /// Label for the overall report status banner.
    pub fn status_label(self) -> &'static str {
        match self {
            Self::Good => "On Track",
            Self::Warning => "Needs Attention",
            Self::Critical => "Critical",
        }
    }
}

/// A single named numeric observation, supplied by manual data entry or
/// a sensor feed. Immutable once produced.
#[derive(Debug, Clone, Serialize)]
pub struct MetricReading {
    /// Canonical metric name (see [`crate::metric_names`]).
    pub metric_name: String,
    pub value: f64,
    /// When the reading was taken, if known.
    pub recorded_at: Option<Timestamp>,
}

impl MetricReading {
    pub fn new(metric_name: impl Into<String>, value: f64) -> Self {
        Self {
            metric_name: metric_name.into(),
            value,
            recorded_at: None,
        }
    }

    pub fn with_recorded_at(mut self, at: Timestamp) -> Self {
        self.recorded_at = Some(at);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_badge_labels() {
        assert_eq!(Tier::Good.badge_label(), "Above Standard");
        assert_eq!(Tier::Warning.badge_label(), "Needs Improvement");
        assert_eq!(Tier::Critical.badge_label(), "Critical");
    }

    #[test]
    fn tier_status_labels() {
        assert_eq!(Tier::Good.status_label(), "On Track");
        assert_eq!(Tier::Warning.status_label(), "Needs Attention");
        assert_eq!(Tier::Critical.status_label(), "Critical");
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Good).unwrap(), "\"good\"");
        assert_eq!(
            serde_json::to_string(&Tier::Critical).unwrap(),
            "\"critical\""
        );
    }

    #[test]
    fn reading_builder_sets_timestamp() {
        let at = chrono::Utc::now();
        let reading = MetricReading::new("temperature_celsius", 28.5).with_recorded_at(at);
        assert_eq!(reading.recorded_at, Some(at));
        assert_eq!(reading.value, 28.5);
    }
}
