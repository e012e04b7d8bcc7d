//! gcpro - Track and export Gemini chat usage from local counter data
//!
//! This library provides functionality to:
//! - Parse the JSON state persisted by the Gemini Counter Pro userscript
//! - Compute weighted quota usage per model variant (Flash, Thinking, Pro)
//! - Derive consecutive-day usage streaks from the daily ledger
//! - Export the ledger as CSV or a Markdown report
//!
//! # Examples
//!
//! ```no_run
//! use gcpro::{
//!     export::{export_csv, export_markdown},
//!     stats::report_options,
//!     store::CounterStore,
//! };
//! use std::path::Path;
//!
//! fn main() -> gcpro::Result<()> {
//!     let store = CounterStore::load(Path::new("counter.json"))?;
//!
//!     let csv = export_csv(&store.daily_counts);
//!
//!     let today = chrono::Local::now().date_naive();
//!     let options = report_options(&store, Some("me@gmail.com".into()), today);
//!     let report = export_markdown(&store.daily_counts, Some(&options));
//!
//!     println!("{csv}\n{report}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod error;
pub mod export;
pub mod output;
pub mod quota;
pub mod stats;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{GcproError, Result};
pub use types::{DayDate, DayRecord, ModelCounts, ReportOptions, UsageLedger};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
