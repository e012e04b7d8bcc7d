//! Core domain types for gcpro
//!
//! These types provide strong typing for the concepts the rest of the crate
//! works with: day keys, per-model message counts, daily records, and the
//! day-keyed usage ledger persisted by the counter.

use crate::error::{GcproError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Strongly-typed calendar-date key for the usage ledger
///
/// Wraps a `NaiveDate` so map iteration is chronological and formatting is
/// always the ISO `YYYY-MM-DD` form the counter uses as storage keys.
///
/// # Examples
/// ```
/// use gcpro::types::DayDate;
///
/// let day: DayDate = "2026-02-08".parse().unwrap();
/// assert_eq!(day.to_string(), "2026-02-08");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayDate(NaiveDate);

impl DayDate {
    /// Create a new DayDate
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Get the inner NaiveDate
    pub fn inner(&self) -> &NaiveDate {
        &self.0
    }
}

impl fmt::Display for DayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayDate {
    type Err = GcproError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|_| GcproError::InvalidDate(s.to_string()))
    }
}

impl From<NaiveDate> for DayDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

/// Per-variant message counts for a single day
///
/// Tracks how many messages were sent to each Gemini model variant. Absent
/// fields in stored JSON deserialize as zero, so partial sub-objects from
/// older counter versions load cleanly.
///
/// # Examples
/// ```
/// use gcpro::types::ModelCounts;
///
/// let counts = ModelCounts::new(5, 3, 2);
/// assert_eq!(counts.total(), 10);
///
/// let more = ModelCounts::new(1, 0, 1);
/// let combined = counts + more;
/// assert_eq!(combined.flash, 6);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelCounts {
    /// Messages sent to the Flash variant
    pub flash: u64,
    /// Messages sent to the Flash Thinking variant
    pub thinking: u64,
    /// Messages sent to the Pro variant
    pub pro: u64,
}

impl ModelCounts {
    /// Create new ModelCounts
    pub fn new(flash: u64, thinking: u64, pro: u64) -> Self {
        Self {
            flash,
            thinking,
            pro,
        }
    }

    /// Total categorized messages across all variants
    pub fn total(&self) -> u64 {
        self.flash + self.thinking + self.pro
    }
}

impl Add for ModelCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            flash: self.flash + other.flash,
            thinking: self.thinking + other.thinking,
            pro: self.pro + other.pro,
        }
    }
}

impl AddAssign for ModelCounts {
    fn add_assign(&mut self, other: Self) {
        self.flash += other.flash;
        self.thinking += other.thinking;
        self.pro += other.pro;
    }
}

/// Raw counters recorded for one day
///
/// `by_model` is `None` for legacy records written before model tracking
/// existed; read it through [`DayRecord::model_counts`] so the zero-default
/// rule applies uniformly.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DayRecord {
    /// Messages sent that day
    pub messages: u64,
    /// Chats created that day
    pub chats: u64,
    /// Per-model breakdown, absent on legacy records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_model: Option<ModelCounts>,
}

impl DayRecord {
    /// Create a record with a model breakdown
    pub fn new(messages: u64, chats: u64, by_model: ModelCounts) -> Self {
        Self {
            messages,
            chats,
            by_model: Some(by_model),
        }
    }

    /// Per-model counts, zero for legacy records without a breakdown
    pub fn model_counts(&self) -> ModelCounts {
        self.by_model.unwrap_or_default()
    }
}

/// Day-keyed usage ledger
///
/// The `BTreeMap` key order is chronological, so iterating a ledger already
/// yields days sorted ascending — no caller-side sort is needed and the map
/// is never mutated to produce ordered output.
pub type UsageLedger = BTreeMap<DayDate, DayRecord>;

/// Caller-supplied metadata for the Markdown report
///
/// Lifetime totals and streaks may span more history than the ledger snapshot,
/// so the exporter takes them as given rather than deriving them. Every field
/// is optional; an absent field suppresses its report row rather than
/// rendering a placeholder.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportOptions {
    /// Account identifier shown in the report header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Lifetime message total
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Lifetime chats-created total
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_chats_created: Option<u64>,
    /// Consecutive-day streak ending now
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_streak: Option<u32>,
    /// Longest consecutive-day streak on record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_streak: Option<u32>,
}

impl ReportOptions {
    /// Set the user field
    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Set the lifetime message total
    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    /// Set the lifetime chats-created total
    pub fn with_total_chats(mut self, chats: u64) -> Self {
        self.total_chats_created = Some(chats);
        self
    }

    /// Set the current streak
    pub fn with_current_streak(mut self, days: u32) -> Self {
        self.current_streak = Some(days);
        self
    }

    /// Set the best streak
    pub fn with_best_streak(mut self, days: u32) -> Self {
        self.best_streak = Some(days);
        self
    }
}
