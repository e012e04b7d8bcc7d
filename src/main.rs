//! gcpro - Track and export Gemini chat usage from local counter data

use clap::Parser;
use colored::Colorize;
use gcpro::{
    cli::{parse_date_filter, Cli, Command, ExportFormat},
    error::Result,
    export::{export_csv, export_markdown},
    output::get_formatter,
    quota::{format_quota_label, quota_state, weighted_quota, QuotaLevel},
    stats::{calculate_streaks, filter_range, report_options, Totals},
    store::CounterStore,
    types::DayDate,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging. --verbose should override RUST_LOG.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("gcpro=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gcpro=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store_path = CounterStore::resolve_path(cli.data_path)?;
    let store = CounterStore::load(&store_path)?;

    match cli.command {
        Command::Daily { json, since, until } => {
            info!("Running daily usage report");

            let since = since.as_deref().map(parse_date_filter).transpose()?;
            let until = until.as_deref().map(parse_date_filter).transpose()?;
            let ledger = filter_range(&store.daily_counts, since, until);

            let totals = Totals::from_ledger(&ledger);
            let formatter = get_formatter(json);
            println!("{}", formatter.format_daily(&ledger, &totals));
        }
        Command::Export {
            format,
            output,
            user,
        } => {
            info!("Exporting ledger as {format:?}");

            let text = match format {
                ExportFormat::Csv => export_csv(&store.daily_counts),
                ExportFormat::Markdown => {
                    let today = chrono::Local::now().date_naive();
                    let options = report_options(&store, user, today);
                    export_markdown(&store.daily_counts, Some(&options))
                }
            };
            deliver(text, output)?;
        }
        Command::Summary { limit } => {
            info!("Running summary report");

            let today = chrono::Local::now().date_naive();
            let streaks = calculate_streaks(&store.daily_counts, today);
            let today_record = store.daily_counts.get(&DayDate::new(today));
            let today_messages = today_record.map_or(0, |r| r.messages);
            let today_weighted =
                today_record.map_or(0.0, |r| weighted_quota(&r.model_counts()));

            let label = format_quota_label(today_messages, today_weighted, limit);
            let (pct, level) = quota_state(today_weighted, limit);
            let quota_line = format!("{label} ({pct:.0}%)");
            let quota_line = match level {
                QuotaLevel::Ok => quota_line.green(),
                QuotaLevel::Warning => quota_line.yellow(),
                QuotaLevel::Critical => quota_line.red(),
            };

            println!("Lifetime messages: {}", store.total);
            println!("Chats created:     {}", store.total_chats_created);
            println!("Current streak:    {} days", streaks.current);
            println!("Best streak:       {} days", streaks.best);
            println!("Today's quota:     {quota_line}");
        }
    }

    Ok(())
}

/// Write export text to a file, or print it when no path was given
fn deliver(text: String, output: Option<PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(&path, text)?;
            info!("Wrote export to {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
