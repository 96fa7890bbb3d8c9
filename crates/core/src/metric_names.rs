//! Well-known metric name constants.
//!
//! These are the canonical metric names used by the range classifier,
//! the standards-comparison scorer, and the report builder.

/// Barn air temperature in degrees Celsius.
pub const METRIC_TEMPERATURE: &str = "temperature_celsius";

/// Relative humidity percentage (0-100).
pub const METRIC_HUMIDITY: &str = "humidity_percent";

/// Flock mortality rate as a percentage of birds placed.
pub const METRIC_MORTALITY_RATE: &str = "mortality_rate_percent";

/// Feed conversion ratio (kg feed per kg live weight).
pub const METRIC_FCR: &str = "feed_conversion_ratio";

/// Average daily weight gain in kilograms.
pub const METRIC_DAILY_GAIN: &str = "daily_weight_gain_kg";

/// Share of birds surviving to harvest (0-100).
pub const METRIC_LIVEABILITY: &str = "liveability_percent";

/// Feed efficiency index (kg feed per kg output).
pub const METRIC_FEED_EFFICIENCY: &str = "feed_efficiency";

/// Human-readable display name for a canonical metric.
///
/// Falls back to the raw name for metrics without a registered label.
pub fn display_name(metric: &str) -> &str {
    match metric {
        METRIC_TEMPERATURE => "Temperature",
        METRIC_HUMIDITY => "Humidity",
        METRIC_MORTALITY_RATE => "Mortality Rate",
        METRIC_FCR => "Feed Conversion Ratio (FCR)",
        METRIC_DAILY_GAIN => "Daily Weight Gain",
        METRIC_LIVEABILITY => "Liveability Rate",
        METRIC_FEED_EFFICIENCY => "Feed Efficiency",
        other => other,
    }
}
