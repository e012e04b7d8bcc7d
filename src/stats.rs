//! Ledger aggregation and derived statistics
//!
//! Everything here is a pure function over a borrowed ledger snapshot: column
//! totals for the table/CSV footers, consecutive-day streaks for the report
//! summary, and date-range filtering for the daily view.

use crate::quota::weighted_quota;
use crate::store::CounterStore;
use crate::types::{DayDate, ModelCounts, ReportOptions, UsageLedger};
use chrono::{Days, NaiveDate};
use serde::Serialize;

/// Column sums across a ledger
///
/// The weighted total is the sum of per-day weighted values, not a
/// recomputation from the summed model counts; the two differ once per-day
/// values have been rounded for display.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct Totals {
    /// Sum of daily message counts
    pub messages: u64,
    /// Sum of daily chats-created counts
    pub chats: u64,
    /// Field-wise sum of per-model counts
    pub models: ModelCounts,
    /// Sum of per-day weighted quota values
    pub weighted: f64,
}

impl Totals {
    /// Sum every column of the given ledger
    pub fn from_ledger(ledger: &UsageLedger) -> Self {
        let mut totals = Self::default();
        for record in ledger.values() {
            let models = record.model_counts();
            totals.messages += record.messages;
            totals.chats += record.chats;
            totals.models += models;
            totals.weighted += weighted_quota(&models);
        }
        totals
    }
}

/// Consecutive-day usage streaks
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streaks {
    /// Streak ending today (or yesterday, when today has no messages yet)
    pub current: u32,
    /// Longest streak on record
    pub best: u32,
}

/// Compute usage streaks from the ledger
///
/// A day counts toward a streak when it has at least one message. The best
/// streak is the longest run of strictly consecutive such days anywhere in
/// the ledger. The current streak counts back from `today`, or from yesterday
/// when today has no messages yet, so an unbroken streak is not reported as
/// zero before the first message of the day.
pub fn calculate_streaks(ledger: &UsageLedger, today: NaiveDate) -> Streaks {
    let mut best = 0u32;
    let mut run = 0u32;
    let mut last: Option<NaiveDate> = None;

    for (day, record) in ledger {
        if record.messages == 0 {
            continue;
        }
        let date = *day.inner();
        run = match last {
            Some(prev) if date == prev + Days::new(1) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        last = Some(date);
    }

    let has_messages = |date: NaiveDate| {
        ledger
            .get(&DayDate::new(date))
            .is_some_and(|r| r.messages > 0)
    };

    let mut cursor = if has_messages(today) {
        today
    } else {
        today - Days::new(1)
    };
    let mut current = 0u32;
    while has_messages(cursor) {
        current += 1;
        cursor = cursor - Days::new(1);
    }

    Streaks { current, best }
}

/// Assemble the Markdown report metadata from the counter store
///
/// Lifetime totals come straight from the store's running counters; streaks
/// are computed from the ledger snapshot relative to `today`.
pub fn report_options(
    store: &CounterStore,
    user: Option<String>,
    today: NaiveDate,
) -> ReportOptions {
    let streaks = calculate_streaks(&store.daily_counts, today);
    ReportOptions {
        user,
        total: Some(store.total),
        total_chats_created: Some(store.total_chats_created),
        current_streak: Some(streaks.current),
        best_streak: Some(streaks.best),
    }
}

/// Restrict a ledger to the inclusive `[since, until]` range
///
/// Either bound may be absent. Returns an independent map; the input is
/// never touched.
pub fn filter_range(
    ledger: &UsageLedger,
    since: Option<DayDate>,
    until: Option<DayDate>,
) -> UsageLedger {
    ledger
        .iter()
        .filter(|(day, _)| since.is_none_or(|s| **day >= s))
        .filter(|(day, _)| until.is_none_or(|u| **day <= u))
        .map(|(day, record)| (*day, record.clone()))
        .collect()
}
