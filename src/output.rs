//! Output formatting for the daily usage view
//!
//! Two formatters behind a common trait: an ASCII table for terminal display
//! and JSON for machine consumption. Both render the same ledger snapshot and
//! the same precomputed totals.
//!
//! # Examples
//!
//! ```
//! use gcpro::output::get_formatter;
//! use gcpro::stats::Totals;
//! use gcpro::types::{DayRecord, ModelCounts, UsageLedger};
//!
//! let mut ledger = UsageLedger::new();
//! ledger.insert(
//!     "2026-02-08".parse().unwrap(),
//!     DayRecord::new(10, 2, ModelCounts::new(5, 3, 2)),
//! );
//! let totals = Totals::from_ledger(&ledger);
//!
//! let formatter = get_formatter(false);
//! println!("{}", formatter.format_daily(&ledger, &totals));
//! ```

use crate::quota::{format_weighted, weighted_quota};
use crate::stats::Totals;
use crate::types::UsageLedger;
use prettytable::{format, row, Table};
use serde_json::json;

/// Trait for daily-view output formatters
pub trait OutputFormatter {
    /// Format the ledger with its column totals
    fn format_daily(&self, ledger: &UsageLedger, totals: &Totals) -> String;
}

/// Table formatter for human-readable terminal output
pub struct TableFormatter;

impl TableFormatter {
    /// Format a number with thousands separators
    fn format_number(n: u64) -> String {
        let s = n.to_string();
        let mut result = String::new();

        for (count, ch) in s.chars().rev().enumerate() {
            if count > 0 && count % 3 == 0 {
                result.push(',');
            }
            result.push(ch);
        }

        result.chars().rev().collect()
    }
}

impl OutputFormatter for TableFormatter {
    fn format_daily(&self, ledger: &UsageLedger, totals: &Totals) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);

        table.set_titles(row![
            b -> "Date",
            b -> "Messages",
            b -> "Chats",
            b -> "Flash",
            b -> "Thinking",
            b -> "Pro",
            b -> "Weighted"
        ]);

        for (day, record) in ledger {
            let models = record.model_counts();
            table.add_row(row![
                day.to_string(),
                r -> Self::format_number(record.messages),
                r -> Self::format_number(record.chats),
                r -> Self::format_number(models.flash),
                r -> Self::format_number(models.thinking),
                r -> Self::format_number(models.pro),
                r -> format_weighted(weighted_quota(&models))
            ]);
        }

        table.add_row(row![
            b -> "TOTAL",
            br -> Self::format_number(totals.messages),
            br -> Self::format_number(totals.chats),
            br -> Self::format_number(totals.models.flash),
            br -> Self::format_number(totals.models.thinking),
            br -> Self::format_number(totals.models.pro),
            br -> format_weighted(totals.weighted)
        ]);

        table.to_string()
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_daily(&self, ledger: &UsageLedger, totals: &Totals) -> String {
        let daily: Vec<_> = ledger
            .iter()
            .map(|(day, record)| {
                let models = record.model_counts();
                json!({
                    "date": day.to_string(),
                    "messages": record.messages,
                    "chats": record.chats,
                    "byModel": models,
                    "weighted": (weighted_quota(&models) * 100.0).round() / 100.0,
                })
            })
            .collect();

        let output = json!({
            "daily": daily,
            "totals": {
                "messages": totals.messages,
                "chats": totals.chats,
                "byModel": totals.models,
                "weighted": (totals.weighted * 100.0).round() / 100.0,
            },
        });

        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Get the appropriate formatter for the output mode
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}
