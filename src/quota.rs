//! Weighted quota computation
//!
//! Gemini's daily quota does not count every message equally: Flash messages
//! are free, Flash Thinking messages cost about a third of a slot, and Pro
//! messages cost a full slot. This module is the source of truth for that
//! weighting and for the quota display helpers built on top of it.
//!
//! # Examples
//!
//! ```
//! use gcpro::quota::{weighted_quota, format_weighted};
//! use gcpro::types::ModelCounts;
//!
//! let counts = ModelCounts::new(5, 3, 2);
//! let weighted = weighted_quota(&counts);
//! assert_eq!(format_weighted(weighted), "2.99");
//! ```

use crate::types::ModelCounts;
use serde::Serialize;

/// Display and weighting configuration for one model variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelConfig {
    /// Human-readable variant label
    pub label: &'static str,
    /// Quota slots consumed per message
    pub multiplier: f64,
}

/// Quota weight for the Flash variant
pub const FLASH: ModelConfig = ModelConfig {
    label: "3 Flash",
    multiplier: 0.0,
};

/// Quota weight for the Flash Thinking variant
pub const THINKING: ModelConfig = ModelConfig {
    label: "3 Flash Thinking",
    multiplier: 0.33,
};

/// Quota weight for the Pro variant
pub const PRO: ModelConfig = ModelConfig {
    label: "3 Pro",
    multiplier: 1.0,
};

/// Default daily quota limit for free accounts
pub const DEFAULT_QUOTA_LIMIT: u64 = 50;

/// Calculate the weighted quota usage for a set of per-model counts
///
/// `weighted = flash * 0.0 + thinking * 0.33 + pro * 1.0`
pub fn weighted_quota(counts: &ModelCounts) -> f64 {
    counts.flash as f64 * FLASH.multiplier
        + counts.thinking as f64 * THINKING.multiplier
        + counts.pro as f64 * PRO.multiplier
}

/// Format a weighted value for export output
///
/// Whole numbers render without a decimal point; fractional values render
/// rounded to two decimal places with trailing zeros trimmed.
pub fn format_weighted(weighted: f64) -> String {
    let rounded = (weighted * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as u64)
    } else {
        let s = format!("{rounded:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Format the quota status label shown next to the counter
///
/// The weighted value here uses the counter panel's one-decimal rendering
/// rather than the two-decimal export rendering.
pub fn format_quota_label(raw_count: u64, weighted: f64, limit: u64) -> String {
    let weighted_str = if weighted.fract() == 0.0 {
        format!("{}", weighted as u64)
    } else {
        format!("{weighted:.1}")
    };
    format!("{raw_count} msgs ({weighted_str} weighted) / {limit}")
}

/// Severity bucket for the quota gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotaLevel {
    /// Under 60% of the daily limit
    Ok,
    /// Between 60% and 85%
    Warning,
    /// At or above 85%
    Critical,
}

/// Percent-of-limit and severity for a weighted usage value
///
/// The percentage is capped at 100; a zero limit reports 0%.
pub fn quota_state(weighted: f64, limit: u64) -> (f64, QuotaLevel) {
    let pct = if limit > 0 {
        (weighted / limit as f64 * 100.0).min(100.0)
    } else {
        0.0
    };
    let level = if pct < 60.0 {
        QuotaLevel::Ok
    } else if pct < 85.0 {
        QuotaLevel::Warning
    } else {
        QuotaLevel::Critical
    };
    (pct, level)
}
