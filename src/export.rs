//! Report exporters for the usage ledger
//!
//! Two pure formatters over a borrowed ledger snapshot: a CSV table for
//! spreadsheets and a Markdown report for sharing. Neither mutates the
//! ledger, caches anything, or fails — malformed upstream data degrades to
//! zeros instead of erroring.
//!
//! # Examples
//!
//! ```
//! use gcpro::export::{export_csv, export_markdown};
//! use gcpro::types::{DayRecord, ModelCounts, ReportOptions, UsageLedger};
//!
//! let mut ledger = UsageLedger::new();
//! ledger.insert(
//!     "2026-02-08".parse().unwrap(),
//!     DayRecord::new(10, 2, ModelCounts::new(5, 3, 2)),
//! );
//!
//! let csv = export_csv(&ledger);
//! assert!(csv.contains("2026-02-08,10,2,5,3,2,2.99"));
//!
//! let options = ReportOptions::default().with_user("test@gmail.com");
//! let report = export_markdown(&ledger, Some(&options));
//! assert!(report.contains("# Gemini Usage Report"));
//! ```

use crate::quota::{format_weighted, weighted_quota};
use crate::stats::Totals;
use crate::types::{ReportOptions, UsageLedger};
use chrono::{DateTime, Local};
use std::fmt::Write;

/// Fixed CSV header row
const CSV_HEADER: &str = "Date,Messages,Chats,Flash,Thinking,Pro,Weighted";

/// Number of days shown in the Markdown breakdown table
const BREAKDOWN_WINDOW: usize = 30;

/// Render the ledger as CSV
///
/// One row per day in ascending date order, followed by a `TOTAL` row whose
/// columns are independent per-column sums. An empty ledger still yields the
/// header and an all-zero `TOTAL` row. Every row has exactly seven fields;
/// legacy records without a model breakdown contribute zeros.
pub fn export_csv(ledger: &UsageLedger) -> String {
    let mut out = String::with_capacity(64 * (ledger.len() + 2));
    out.push_str(CSV_HEADER);
    out.push('\n');

    for (day, record) in ledger {
        let models = record.model_counts();
        // write! into a String cannot fail
        let _ = writeln!(
            out,
            "{},{},{},{},{},{},{}",
            day,
            record.messages,
            record.chats,
            models.flash,
            models.thinking,
            models.pro,
            format_weighted(weighted_quota(&models)),
        );
    }

    let totals = Totals::from_ledger(ledger);
    let _ = writeln!(
        out,
        "TOTAL,{},{},{},{},{},{}",
        totals.messages,
        totals.chats,
        totals.models.flash,
        totals.models.thinking,
        totals.models.pro,
        format_weighted(totals.weighted),
    );

    out
}

/// Render the ledger as a Markdown report, stamped with the current time
///
/// `options` carries caller-supplied summary metadata; `None` behaves as all
/// fields absent. Streak rows appear only for the streak fields actually
/// supplied, and the daily breakdown section is omitted entirely for an
/// empty ledger. At most the 30 most recent days are tabulated.
pub fn export_markdown(ledger: &UsageLedger, options: Option<&ReportOptions>) -> String {
    export_markdown_at(ledger, options, Local::now())
}

/// Markdown export with an explicit export timestamp, for deterministic tests
pub(crate) fn export_markdown_at(
    ledger: &UsageLedger,
    options: Option<&ReportOptions>,
    exported_at: DateTime<Local>,
) -> String {
    let defaults = ReportOptions::default();
    let options = options.unwrap_or(&defaults);

    let mut out = String::new();
    out.push_str("# Gemini Usage Report\n\n");

    let user = options.user.as_deref().unwrap_or("Unknown");
    let _ = writeln!(out, "**User:** {user}");
    let _ = writeln!(
        out,
        "**Exported:** {}",
        exported_at.format("%Y-%m-%d %H:%M:%S")
    );
    out.push('\n');

    out.push_str("## Summary\n\n");
    out.push_str("| Metric | Value |\n");
    out.push_str("|--------|-------|\n");
    let _ = writeln!(out, "| Total Messages | {} |", options.total.unwrap_or(0));
    let _ = writeln!(
        out,
        "| Chats Created | {} |",
        options.total_chats_created.unwrap_or(0)
    );
    if let Some(current) = options.current_streak {
        let _ = writeln!(out, "| Current Streak | {current} days |");
    }
    if let Some(best) = options.best_streak {
        let _ = writeln!(out, "| Best Streak | {best} days |");
    }
    out.push('\n');

    if !ledger.is_empty() {
        out.push_str("## Daily Breakdown\n\n");
        out.push_str("| Date | Messages | Chats | Flash | Thinking | Pro |\n");
        out.push_str("|------|----------|-------|-------|----------|-----|\n");

        let skip = ledger.len().saturating_sub(BREAKDOWN_WINDOW);
        for (day, record) in ledger.iter().skip(skip) {
            let models = record.model_counts();
            let _ = writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                day, record.messages, record.chats, models.flash, models.thinking, models.pro,
            );
        }
        out.push('\n');
    }

    out.push_str("---\n*Generated by Gemini Counter Pro*\n");
    out
}
