//! Application-level configuration constants.

use crate::gauge::GaugeScale;
use crate::parse::UnitPolicy;

// Gauge reference paces (seconds per km)
pub const GAUGE_MIN_PACE: f64 = 150.0; // faster than world record
pub const GAUGE_MAX_PACE: f64 = 600.0; // slow walking pace

// Largest derived time or pace (seconds) that still formats as whole seconds
pub const MAX_RESULT_SECONDS: f64 = 9_007_199_254_740_992.0; // 2^53

// Query parameter keys for shareable links
pub const QUERY_DISTANCE: &str = "distance";
pub const QUERY_TIME: &str = "time";
pub const QUERY_PACE: &str = "pace";

// Preset distance buttons: (label, field text)
pub const DISTANCE_PRESETS: [(&str, &str); 4] = [
    ("5K", "5"),
    ("10K", "10"),
    ("Half Marathon", "21.0975"),
    ("Marathon", "42.195"),
];

// UI messages
pub const MSG_INVALID_FIELD: &str = "Invalid input format.";
pub const MSG_CORRECT_INPUTS: &str = "Please correct invalid inputs.";

// Placeholders for input fields
pub const PLACEHOLDER_DISTANCE: &str = "e.g. 10km, 5000m, 21.1";
pub const PLACEHOLDER_TIME: &str = "e.g. 1:30:00, 45:30, 1h30m";
pub const PLACEHOLDER_PACE: &str = "e.g. 5:00, 4m45s";

#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Settings that change how input is interpreted and displayed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorConfig {
    pub unit_policy: UnitPolicy,
    pub gauge: GaugeScale,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            unit_policy: UnitPolicy::Lenient,
            gauge: GaugeScale::default(),
        }
    }
}
