//! CLI interface for gcpro
//!
//! Defines the command-line interface using clap derive.
//!
//! # Example
//!
//! ```bash
//! # Daily breakdown for February
//! gcpro daily --since 2026-02-01 --until 2026-02-28
//!
//! # Shareable Markdown report
//! gcpro export markdown --user me@gmail.com --output report.md
//!
//! # Lifetime totals, streaks, and today's quota
//! gcpro summary
//! ```

use crate::error::Result;
use crate::quota::DEFAULT_QUOTA_LIMIT;
use crate::types::DayDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Track and export Gemini chat usage from local counter data
#[derive(Parser, Debug, Clone)]
#[command(name = "gcpro")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Show informational output (default is quiet mode with only warnings and errors)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the exported counter store JSON
    #[arg(long, global = true, env = "GCPRO_DATA_PATH")]
    pub data_path: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Export output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a TOTAL row
    Csv,
    /// Markdown report with summary and daily breakdown
    Markdown,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the daily usage breakdown
    Daily {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Filter by start date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<String>,

        /// Filter by end date (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,
    },
    /// Export the ledger as CSV or a Markdown report
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Write to a file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Account name shown in the Markdown report header
        #[arg(long)]
        user: Option<String>,
    },
    /// Show lifetime totals, streaks, and today's quota usage
    Summary {
        /// Daily weighted quota limit
        #[arg(long, default_value_t = DEFAULT_QUOTA_LIMIT)]
        limit: u64,
    },
}

/// Parse a `--since`/`--until` argument into a day key
pub fn parse_date_filter(s: &str) -> Result<DayDate> {
    s.parse()
}
